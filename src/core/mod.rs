// src/core/mod.rs — Dashboard core: context, reactive binder, view state

pub mod channels;
pub mod context;
pub mod figure;
pub mod state;

pub use channels::{Binder, ChannelId, ChannelOutput, InputEvent};
pub use context::{DashboardContext, Summary};
pub use state::{Freshness, ViewState};
