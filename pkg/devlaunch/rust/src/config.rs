// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::ConfigError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "launcher.json";

const DEFAULT_BACKEND_CMD: &str = "npm start -- --skip-init";
const DEFAULT_FRONTEND_CMD: &str = "npm run dev --prefix ./frontend";
const DEFAULT_BACKEND_PORT: u16 = 3002;
const DEFAULT_FRONTEND_PORT: u16 = 5173;
const DEFAULT_OPEN_URL: &str = "http://localhost:5173";
const DEFAULT_READY_HOST: &str = "localhost";
const DEFAULT_READY_TIMEOUT_SECS: u64 = 60;

/// Launcher settings. Fields missing from `launcher.json` keep their defaults,
/// so a file only has to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub backend_cmd: String,
    pub frontend_cmd: String,
    /// `0` disables the readiness wait, as does `None` when set in code.
    pub backend_port: Option<u16>,
    pub frontend_port: Option<u16>,
    pub open_url: Option<String>,
    pub ready_host: String,
    pub ready_timeout_secs: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            backend_cmd: DEFAULT_BACKEND_CMD.to_string(),
            frontend_cmd: DEFAULT_FRONTEND_CMD.to_string(),
            backend_port: Some(DEFAULT_BACKEND_PORT),
            frontend_port: Some(DEFAULT_FRONTEND_PORT),
            open_url: Some(DEFAULT_OPEN_URL.to_string()),
            ready_host: DEFAULT_READY_HOST.to_string(),
            ready_timeout_secs: DEFAULT_READY_TIMEOUT_SECS,
        }
    }
}

/// On-disk form of [`Configuration`]. A missing key and an explicit `null`
/// both leave the default in place.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigFile {
    backend_cmd: Option<String>,
    frontend_cmd: Option<String>,
    backend_port: Option<u16>,
    frontend_port: Option<u16>,
    open_url: Option<String>,
    ready_host: Option<String>,
    ready_timeout_secs: Option<u64>,
}

impl ConfigFile {
    fn overlay(self, mut config: Configuration) -> Configuration {
        if let Some(cmd) = self.backend_cmd {
            config.backend_cmd = cmd;
        }
        if let Some(cmd) = self.frontend_cmd {
            config.frontend_cmd = cmd;
        }
        if let Some(port) = self.backend_port {
            config.backend_port = Some(port);
        }
        if let Some(port) = self.frontend_port {
            config.frontend_port = Some(port);
        }
        if let Some(url) = self.open_url {
            config.open_url = Some(url);
        }
        if let Some(host) = self.ready_host {
            config.ready_host = host;
        }
        if let Some(secs) = self.ready_timeout_secs {
            config.ready_timeout_secs = secs;
        }
        config
    }
}

impl Configuration {
    /// URL to open once both services are up: `openUrl` when set, otherwise
    /// the frontend on localhost.
    pub fn browser_url(&self) -> Option<String> {
        match self.open_url.as_deref() {
            Some(url) if !url.is_empty() => Some(url.to_string()),
            _ => self
                .frontend_port
                .filter(|&port| port != 0)
                .map(|port| format!("http://localhost:{port}")),
        }
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }
}

/// Load `launcher.json` from the current directory.
pub fn load() -> Configuration {
    load_from(Path::new(CONFIG_FILE_NAME))
}

/// Load the configuration at `path`, falling back to defaults on any error.
pub fn load_from(path: &Path) -> Configuration {
    match try_load(path) {
        Ok(Some(config)) => {
            info!("loaded configuration from {}", path.display());
            config
        }
        Ok(None) => {
            debug!("{} not found, using defaults", path.display());
            Configuration::default()
        }
        Err(e) => {
            warn!("ignoring {e}; using defaults");
            Configuration::default()
        }
    }
}

/// Returns `Ok(None)` when the file does not exist.
///
/// Only the first JSON value of the file is decoded; anything after it is
/// ignored. An empty file yields the defaults.
pub fn try_load(path: &Path) -> Result<Option<Configuration>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut values = serde_json::Deserializer::from_str(&contents).into_iter::<ConfigFile>();
    match values.next() {
        Some(Ok(file)) => Ok(Some(file.overlay(Configuration::default()))),
        Some(Err(source)) => Err(ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(Some(Configuration::default())),
    }
}
