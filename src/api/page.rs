// src/api/page.rs — Dashboard page rendering (minijinja)

use minijinja::{context, Environment};

use crate::core::{ChannelId, DashboardContext, ViewState};
use crate::infra::errors::DashResult;

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE: &str = include_str!("templates/dashboard.html");

/// JSON safe to embed inside a `<script>` element. `<` only occurs inside
/// string literals, where the escaped form is equivalent.
fn script_json<T: serde::Serialize>(value: &T) -> DashResult<String> {
    let json = serde_json::to_string(value).map_err(anyhow::Error::from)?;
    Ok(json.replace('<', "\\u003c"))
}

pub fn render(title: &str, ctx: &DashboardContext, initial: &ViewState) -> DashResult<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let figure = initial.output(ChannelId::Map).and_then(|o| o.as_figure());
    let figure_json = script_json(&figure)?;
    let text_of = |id: ChannelId| {
        initial
            .output(id)
            .and_then(|o| o.as_text())
            .unwrap_or_default()
            .to_string()
    };

    let html = tmpl.render(context! {
        title => title,
        winners => ctx.winners(),
        years => ctx.years(),
        default_winner => ctx.default_winner(),
        default_year => ctx.default_year(),
        country_text => text_of(ChannelId::Country),
        year_text => text_of(ChannelId::Year),
        figure_json => figure_json,
    })?;
    Ok(html)
}
