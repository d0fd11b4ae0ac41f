// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure to load `launcher.json`. Always recovered by falling back to defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum StartError {
    #[error("empty command")]
    EmptyCommand,
    #[error("failed to spawn: {0}")]
    SpawnFailed(#[source] io::Error),
}

#[derive(Error, Debug)]
#[error("timeout waiting for {host}:{port} after {}s", .timeout.as_secs())]
pub struct TimeoutError {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

#[derive(Error, Debug)]
#[error("could not open browser at {url}: {source}")]
pub struct BrowserOpenError {
    pub url: String,
    #[source]
    pub source: io::Error,
}
