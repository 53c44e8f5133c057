// src/core/state.rs — Per-channel view state (Stale / Fresh)

use serde::Serialize;

use crate::core::channels::{Binder, ChannelId, ChannelOutput, InputEvent};
use crate::core::context::DashboardContext;
use crate::infra::errors::DashResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// No computation since the last input change.
    Stale,
    /// The output reflects the current input.
    Fresh,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelState {
    pub freshness: Freshness,
    pub input: Option<InputEvent>,
    pub output: Option<ChannelOutput>,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            freshness: Freshness::Stale,
            input: None,
            output: None,
        }
    }
}

/// Current input and output of every channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub map: ChannelState,
    pub country: ChannelState,
    pub year: ChannelState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every channel computed with its default input.
    pub fn initial(binder: &Binder, ctx: &DashboardContext) -> DashResult<Self> {
        let mut state = Self::new();
        for event in binder.default_events(ctx) {
            state.apply(binder, ctx, event)?;
        }
        Ok(state)
    }

    pub fn channel(&self, id: ChannelId) -> &ChannelState {
        match id {
            ChannelId::Map => &self.map,
            ChannelId::Country => &self.country,
            ChannelId::Year => &self.year,
        }
    }

    fn channel_mut(&mut self, id: ChannelId) -> &mut ChannelState {
        match id {
            ChannelId::Map => &mut self.map,
            ChannelId::Country => &mut self.country,
            ChannelId::Year => &mut self.year,
        }
    }

    pub fn output(&self, id: ChannelId) -> Option<&ChannelOutput> {
        self.channel(id).output.as_ref()
    }

    /// Deliver `event` to its channel. The channel goes Stale with the new
    /// input, then Fresh once its handler returns; other channels are not
    /// touched. On a handler error the channel stays Stale and keeps its
    /// previous output.
    pub fn apply(
        &mut self,
        binder: &Binder,
        ctx: &DashboardContext,
        event: InputEvent,
    ) -> DashResult<&ChannelOutput> {
        let id = event.channel();
        let slot = self.channel_mut(id);
        slot.freshness = Freshness::Stale;
        slot.input = Some(event.clone());

        let (_, output) = binder.dispatch(ctx, &event)?;
        slot.freshness = Freshness::Fresh;
        Ok(slot.output.insert(output))
    }

    pub fn all_fresh(&self) -> bool {
        ChannelId::ALL
            .iter()
            .all(|id| self.channel(*id).freshness == Freshness::Fresh)
    }
}
