// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use clap::Parser;
use devlaunch::config::CONFIG_FILE_NAME;
use log::Level;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "devlaunch",
    version,
    about = "Start the backend and frontend dev servers, then open the app"
)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Do not open a browser once the services are up
    #[arg(long)]
    pub no_browser: bool,

    /// trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

/// `--log-level`, then `DEVLAUNCH_LOG_LEVEL`, then `LOG_LEVEL`. The first
/// source that is set wins; an unknown value means `info`.
pub fn log_level(flag: Option<&str>) -> Level {
    flag.map(str::to_string)
        .or_else(|| env::var("DEVLAUNCH_LOG_LEVEL").ok())
        .or_else(|| env::var("LOG_LEVEL").ok())
        .and_then(|level| devlaunch_log::parse_level(&level))
        .unwrap_or(Level::Info)
}
