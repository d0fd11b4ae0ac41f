// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Startup sequencing and shutdown.
//!
//! Nothing here is fatal. A child that fails to start, a port that never
//! opens or a browser that cannot be launched is logged and the sequence
//! moves on. The only way out of `Running` is the interrupt future.

use crate::browser::BrowserOpener;
use crate::config::Configuration;
use crate::readiness::PortWaiter;
use crate::runner::CommandRunner;
use crate::state::LifecycleState;
use crate::supervisor::{Role, Supervisor};
use log::{debug, error, info, warn};
use std::future::Future;
use std::pin::Pin;

pub struct Launcher<R, B> {
    config: Configuration,
    supervisor: Supervisor<R>,
    browser: B,
    waiter: PortWaiter,
    open_browser: bool,
    state: LifecycleState,
    history: Vec<LifecycleState>,
}

impl<R: CommandRunner, B: BrowserOpener> Launcher<R, B> {
    pub fn new(config: Configuration, runner: R, browser: B) -> Self {
        Self {
            config,
            supervisor: Supervisor::new(runner),
            browser,
            waiter: PortWaiter::default(),
            open_browser: true,
            state: LifecycleState::Idle,
            history: vec![LifecycleState::Idle],
        }
    }

    pub fn with_waiter(mut self, waiter: PortWaiter) -> Self {
        self.waiter = waiter;
        self
    }

    pub fn without_browser(mut self) -> Self {
        self.open_browser = false;
        self
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Every state entered so far, starting with `Idle`.
    pub fn history(&self) -> &[LifecycleState] {
        &self.history
    }

    pub fn supervisor(&self) -> &Supervisor<R> {
        &self.supervisor
    }

    /// Run the whole sequence, returning once both children have been told
    /// to terminate.
    pub async fn run<F>(&mut self, interrupt: F)
    where
        F: Future<Output = ()>,
    {
        let mut interrupt = std::pin::pin!(interrupt);

        self.transition(LifecycleState::Starting);
        self.start_children();

        self.transition(LifecycleState::WaitingFrontend);
        let mut interrupted = self
            .wait_ready(Role::Frontend, self.config.frontend_port, &mut interrupt)
            .await;

        if !interrupted {
            self.transition(LifecycleState::WaitingBackend);
            interrupted = self
                .wait_ready(Role::Backend, self.config.backend_port, &mut interrupt)
                .await;
        }

        if !interrupted {
            self.transition(LifecycleState::Opening);
            self.open_browser();

            self.transition(LifecycleState::Running);
            info!("Launcher running. Press Ctrl+C to stop child processes...");
            interrupt.await;
        }

        self.transition(LifecycleState::ShuttingDown);
        info!("Stopping...");
        self.supervisor.stop(Role::Frontend);
        self.supervisor.stop(Role::Backend);
        self.transition(LifecycleState::Terminated);
        info!("Done.");
    }

    fn start_children(&mut self) {
        for (role, command_line) in [
            (Role::Backend, &self.config.backend_cmd),
            (Role::Frontend, &self.config.frontend_cmd),
        ] {
            info!("Starting {role}: {command_line}");
            if let Err(e) = self.supervisor.start(role, command_line) {
                error!("Failed to start {role}: {e}");
            }
        }
    }

    /// Returns `true` when the interrupt fired before the wait finished.
    async fn wait_ready<F>(&self, role: Role, port: Option<u16>, interrupt: &mut Pin<&mut F>) -> bool
    where
        F: Future<Output = ()>,
    {
        let Some(port) = port.filter(|&p| p != 0) else {
            debug!("[{role}] no port configured, not waiting");
            return false;
        };

        info!("Waiting for {role} on port {port}...");
        tokio::select! {
            result = self.waiter.wait(&self.config.ready_host, Some(port), self.config.ready_timeout()) => {
                if let Err(e) = result {
                    warn!("{e}");
                }
                false
            }
            _ = interrupt.as_mut() => {
                info!("interrupted while waiting for {role}");
                true
            }
        }
    }

    fn open_browser(&self) {
        if !self.open_browser {
            debug!("browser disabled");
            return;
        }
        let Some(url) = self.config.browser_url() else {
            debug!("no URL to open");
            return;
        };
        info!("Opening browser at {url}");
        if let Err(e) = self.browser.open(&url) {
            warn!("{e}");
        }
    }

    fn transition(&mut self, next: LifecycleState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {} -> {next}",
            self.state
        );
        debug!("{} -> {next}", self.state);
        self.state = next;
        self.history.push(next);
    }
}
