// src/cli/serve.rs — Load the dataset and serve the dashboard

use crate::api::{self, ApiState};
use crate::core::DashboardContext;
use crate::infra::config::Config;

/// Load errors abort here, before the listener is bound.
pub async fn run_serve(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let ctx = DashboardContext::load(&config.data)?;
    let state = ApiState::new(ctx, config.dashboard.title.clone())?;
    api::start_server(&server, state).await
}
