// src/cli/mod.rs — CLI definition (clap derive)

pub mod export;
pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::infra::config::Config;

#[derive(Parser)]
#[command(
    name = "cupdash",
    about = "World Cup winners dashboard served over HTTP",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Dataset path (overrides [data].path)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Dataset encoding: latin1 or utf8 (overrides [data].encoding)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Turn on debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print how many times a country has won
    Country {
        /// Country name as written in the dataset
        name: String,
    },
    /// Print the winner and runner-up of a given year
    Year {
        year: i32,
    },
    /// Export the derived summary (tally, winners, years)
    Export {
        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    /// Apply the global flag overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(ref path) = self.data {
            config.data.path = path.clone();
        }
        if let Some(ref enc) = self.encoding {
            config.data.encoding = enc.parse()?;
        }
        Ok(())
    }
}
