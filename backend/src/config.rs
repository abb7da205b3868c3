//! Runtime configuration from command-line flags or the environment.
//!
//! | Flag             | Variable                 | Default                     |
//! |------------------|--------------------------|-----------------------------|
//! | `--host`         | `DASHBOARD_HOST`         | `127.0.0.1`                 |
//! | `--port`         | `DASHBOARD_PORT`         | `8080`                      |
//! | `--dataset`      | `DASHBOARD_DATASET`      | `Mental Health Dataset.csv` |
//! | `--open-browser` | `DASHBOARD_OPEN_BROWSER` | `true`                      |
//!
//! A flag wins over its variable. Logging verbosity is controlled separately
//! through `RUST_LOG`.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "mental-health-dashboard",
    version,
    about = "🧠 Mental Health Dashboard: survey analytics served over HTTP"
)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "DASHBOARD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Survey CSV loaded at startup.
    #[arg(
        long = "dataset",
        env = "DASHBOARD_DATASET",
        default_value = "Mental Health Dataset.csv"
    )]
    pub dataset_path: PathBuf,

    /// Open the dashboard in the default browser once the server is up.
    #[arg(
        long,
        env = "DASHBOARD_OPEN_BROWSER",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
