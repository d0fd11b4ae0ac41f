// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::BrowserOpenError;
use std::process::Stdio;
use tokio::process::Command;

pub trait BrowserOpener {
    /// Ask the desktop to open `url`. Success only means the helper started.
    fn open(&self, url: &str) -> Result<(), BrowserOpenError>;
}

/// Opens URLs through the platform's URL handler command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemBrowser {
    program: String,
    args: Vec<String>,
}

impl SystemBrowser {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn platform() -> Self {
        if cfg!(windows) {
            Self::new("rundll32", vec!["url.dll,FileProtocolHandler".to_string()])
        } else if cfg!(target_os = "macos") {
            Self::new("open", Vec::new())
        } else {
            Self::new("xdg-open", Vec::new())
        }
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserOpenError> {
        // Not awaited; tokio reaps the helper once it exits.
        Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| BrowserOpenError {
                url: url.to_string(),
                source,
            })
    }
}
