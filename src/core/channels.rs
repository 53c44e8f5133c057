// src/core/channels.rs — Reactive binder: input events → channel outputs
//
// Each channel is a plain `fn(&DashboardContext, &InputEvent)` registered in
// a fixed table. Handlers never mutate the context, so the same input always
// yields the same output and concurrent dispatch is safe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::context::DashboardContext;
use crate::core::figure::{build_choropleth, Figure};
use crate::infra::errors::{DashError, DashResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelId {
    Map,
    Country,
    Year,
}

impl ChannelId {
    pub const ALL: [ChannelId; 3] = [ChannelId::Map, ChannelId::Country, ChannelId::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Map => "map",
            ChannelId::Country => "country",
            ChannelId::Year => "year",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user input, tagged with the channel it feeds.
///
/// JSON form: `{"channel": "map"}`, `{"channel": "country", "value": "Italy"}`,
/// `{"channel": "year", "value": 1998}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// The map component mounted. Carries no payload.
    Map,
    Country(String),
    Year(i32),
}

impl InputEvent {
    pub fn channel(&self) -> ChannelId {
        match self {
            InputEvent::Map => ChannelId::Map,
            InputEvent::Country(_) => ChannelId::Country,
            InputEvent::Year(_) => ChannelId::Year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChannelOutput {
    Figure(Figure),
    Text(String),
}

impl ChannelOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ChannelOutput::Text(s) => Some(s),
            ChannelOutput::Figure(_) => None,
        }
    }

    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            ChannelOutput::Figure(f) => Some(f),
            ChannelOutput::Text(_) => None,
        }
    }
}

pub type Handler = fn(&DashboardContext, &InputEvent) -> DashResult<ChannelOutput>;

// ── Pure computations ────────────────────────────────────────────

pub fn country_message(name: &str, wins: usize) -> String {
    format!("{name} has won the World Cup {wins} times.")
}

pub fn year_message(year: i32, winner: &str, runner_up: &str) -> String {
    format!("In {year}, {winner} won the World Cup and {runner_up} was the runner-up.")
}

pub fn year_missing_message(year: i32) -> String {
    format!("No World Cup result is recorded for {year}.")
}

/// Win count sentence. Unknown names count as zero wins.
pub fn country_wins(ctx: &DashboardContext, name: &str) -> String {
    country_message(name, ctx.tally().wins(name))
}

/// Winner and runner-up sentence for the first record of `year`.
pub fn year_result(ctx: &DashboardContext, year: i32) -> String {
    match ctx.records().first_for_year(year) {
        Some(r) => year_message(year, &r.winner, &r.runner_up),
        None => year_missing_message(year),
    }
}

pub fn winners_map(ctx: &DashboardContext) -> Figure {
    build_choropleth(ctx.winners(), ctx.tally())
}

// ── Handlers ─────────────────────────────────────────────────────

fn mismatch(expected: ChannelId, event: &InputEvent) -> DashError {
    DashError::ChannelMismatch {
        expected,
        got: event.channel(),
    }
}

fn handle_map(ctx: &DashboardContext, event: &InputEvent) -> DashResult<ChannelOutput> {
    match event {
        InputEvent::Map => Ok(ChannelOutput::Figure(winners_map(ctx))),
        other => Err(mismatch(ChannelId::Map, other)),
    }
}

fn handle_country(ctx: &DashboardContext, event: &InputEvent) -> DashResult<ChannelOutput> {
    match event {
        InputEvent::Country(name) => Ok(ChannelOutput::Text(country_wins(ctx, name))),
        other => Err(mismatch(ChannelId::Country, other)),
    }
}

fn handle_year(ctx: &DashboardContext, event: &InputEvent) -> DashResult<ChannelOutput> {
    match event {
        InputEvent::Year(year) => Ok(ChannelOutput::Text(year_result(ctx, *year))),
        other => Err(mismatch(ChannelId::Year, other)),
    }
}

static HANDLERS: [(ChannelId, Handler); 3] = [
    (ChannelId::Map, handle_map),
    (ChannelId::Country, handle_country),
    (ChannelId::Year, handle_year),
];

/// The channel → handler table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binder;

impl Binder {
    pub fn new() -> Self {
        Binder
    }

    pub fn handler(&self, id: ChannelId) -> Handler {
        // Rows are laid out in ChannelId declaration order.
        HANDLERS[id as usize].1
    }

    /// Route `event` to its channel and compute the new output.
    pub fn dispatch(
        &self,
        ctx: &DashboardContext,
        event: &InputEvent,
    ) -> DashResult<(ChannelId, ChannelOutput)> {
        let id = event.channel();
        tracing::debug!("Dispatching {:?} to channel {}", event, id);
        let output = (self.handler(id))(ctx, event)?;
        Ok((id, output))
    }

    /// The event each channel is first computed with.
    pub fn default_events(&self, ctx: &DashboardContext) -> Vec<InputEvent> {
        let mut events = vec![InputEvent::Map];
        if let Some(w) = ctx.default_winner() {
            events.push(InputEvent::Country(w.to_string()));
        }
        if let Some(y) = ctx.default_year() {
            events.push(InputEvent::Year(y));
        }
        events
    }
}
