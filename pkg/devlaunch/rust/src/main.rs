// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use anyhow::Result;
use clap::Parser;
use devlaunch::browser::SystemBrowser;
use devlaunch::config;
use devlaunch::lifecycle::Launcher;
use devlaunch::runner::ShellRunner;
use log::info;
#[cfg(not(unix))]
use log::error;
use std::future::Future;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    devlaunch_log::init("DEVLAUNCH", cli::log_level(args.log_level.as_deref()))?;

    let config = config::load_from(&args.config);
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    info!("devlaunch starting (version {})", env!("CARGO_PKG_VERSION"));
    let interrupt = interrupt()?;
    let mut launcher = Launcher::new(config, ShellRunner::platform(), SystemBrowser::platform());
    if args.no_browser {
        launcher = launcher.without_browser();
    }
    launcher.run(interrupt).await;
    Ok(())
}

/// Handlers are installed here, before any child starts, so an early Ctrl+C
/// is never missed. The returned future resolves on the first signal.
#[cfg(unix)]
fn interrupt() -> Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM"),
            _ = sigint.recv() => info!("received SIGINT"),
        }
    })
}

#[cfg(not(unix))]
fn interrupt() -> Result<impl Future<Output = ()>> {
    Ok(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C"),
            Err(e) => {
                // Nothing left to wake us up; run until killed.
                error!("cannot listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        }
    })
}
