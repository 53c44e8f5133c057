// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::core::{ChannelId, ChannelOutput};

/// Dropdown contents for the lookup panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub winners: Vec<String>,
    pub years: Vec<i32>,
    pub default_winner: Option<String>,
    pub default_year: Option<i32>,
}

/// The recomputed output of the one channel an event was sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelResponse {
    pub channel: ChannelId,
    pub output: ChannelOutput,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
