// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing loaded yet.
    Idle,
    /// Configuration loaded, children being started.
    Starting,
    WaitingFrontend,
    WaitingBackend,
    /// Both waits finished, opening the browser.
    Opening,
    /// Waiting for an interrupt.
    Running,
    /// Terminating children.
    ShuttingDown,
    Terminated,
}

impl LifecycleState {
    pub fn is_terminal(self) -> bool {
        self == LifecycleState::Terminated
    }

    /// An interrupt during a readiness wait jumps straight to `ShuttingDown`;
    /// every other edge follows the startup sequence.
    pub(crate) fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Idle, Starting)
                | (Starting, WaitingFrontend)
                | (WaitingFrontend, WaitingBackend)
                | (WaitingBackend, Opening)
                | (Opening, Running)
                | (WaitingFrontend, ShuttingDown)
                | (WaitingBackend, ShuttingDown)
                | (Running, ShuttingDown)
                | (ShuttingDown, Terminated)
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Idle => write!(f, "idle"),
            LifecycleState::Starting => write!(f, "starting"),
            LifecycleState::WaitingFrontend => write!(f, "waiting-frontend"),
            LifecycleState::WaitingBackend => write!(f, "waiting-backend"),
            LifecycleState::Opening => write!(f, "opening"),
            LifecycleState::Running => write!(f, "running"),
            LifecycleState::ShuttingDown => write!(f, "shutting-down"),
            LifecycleState::Terminated => write!(f, "terminated"),
        }
    }
}
