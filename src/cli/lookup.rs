// src/cli/lookup.rs — One-shot channel lookups from the command line

use crate::core::{Binder, DashboardContext, InputEvent};
use crate::infra::config::Config;

/// Compute the output of a text channel for `event`.
pub fn lookup(ctx: &DashboardContext, event: InputEvent) -> anyhow::Result<String> {
    let (channel, output) = Binder::new().dispatch(ctx, &event)?;
    output
        .as_text()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Channel '{channel}' has no text output"))
}

pub fn run_lookup(config: &Config, event: InputEvent) -> anyhow::Result<()> {
    let ctx = DashboardContext::load(&config.data)?;
    println!("{}", lookup(&ctx, event)?);
    Ok(())
}
