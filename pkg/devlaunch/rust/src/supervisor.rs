// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::StartError;
use crate::runner::{ChildHandle, CommandRunner};
use log::{debug, info, warn};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Backend,
    Frontend,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Backend => write!(f, "backend"),
            Role::Frontend => write!(f, "frontend"),
        }
    }
}

/// A child that started successfully. Failed starts never produce one.
pub struct ManagedProcess {
    pub role: Role,
    command_line: String,
    handle: Box<dyn ChildHandle>,
}

impl ManagedProcess {
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn pid(&self) -> Option<u32> {
        self.handle.id()
    }

    /// Forceful kill with no wait and no escalation. Failures, including
    /// "already exited", are only logged at debug level.
    pub fn stop(mut self) {
        let pid = self.handle.id().unwrap_or(0);
        match self.handle.kill() {
            Ok(()) => info!("[{}] killed (pid={pid})", self.role),
            Err(e) => debug!("[{}] kill failed (pid={pid}): {e}", self.role),
        }
    }
}

impl fmt::Debug for ManagedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedProcess")
            .field("role", &self.role)
            .field("command_line", &self.command_line)
            .field("pid", &self.handle.id())
            .finish()
    }
}

/// Owns the launcher's children. At most one process is tracked per role.
///
/// Anything still tracked when the supervisor is dropped is killed.
pub struct Supervisor<R> {
    runner: R,
    processes: Vec<ManagedProcess>,
}

impl<R: CommandRunner> Supervisor<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            processes: Vec::new(),
        }
    }

    /// Spawn `command_line` for `role` and track it. Returns as soon as the
    /// child exists; readiness is the waiter's business.
    pub fn start(&mut self, role: Role, command_line: &str) -> Result<&ManagedProcess, StartError> {
        if command_line.trim().is_empty() {
            return Err(StartError::EmptyCommand);
        }

        let handle = self
            .runner
            .spawn(command_line)
            .map_err(StartError::SpawnFailed)?;
        info!(
            "[{role}] spawned (pid={}, cmd={command_line})",
            handle.id().unwrap_or(0)
        );

        if self.is_tracked(role) {
            warn!("[{role}] already running, stopping the previous process");
            self.stop(role);
        }

        let index = self.processes.len();
        self.processes.push(ManagedProcess {
            role,
            command_line: command_line.to_string(),
            handle,
        });
        Ok(&self.processes[index])
    }
}

impl<R> Supervisor<R> {
    pub fn get(&self, role: Role) -> Option<&ManagedProcess> {
        self.processes.iter().find(|p| p.role == role)
    }

    pub fn is_tracked(&self, role: Role) -> bool {
        self.get(role).is_some()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Stop the process tracked for `role`. No-op when there is none.
    pub fn stop(&mut self, role: Role) {
        if let Some(index) = self.processes.iter().position(|p| p.role == role) {
            self.processes.remove(index).stop();
        }
    }

    /// Stop everything still tracked, most recently started first.
    pub fn shutdown(&mut self) {
        while let Some(process) = self.processes.pop() {
            process.stop();
        }
    }
}

impl<R> Drop for Supervisor<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
