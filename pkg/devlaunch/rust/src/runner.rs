// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Shell command execution.
//!
//! Command lines are shell syntax, not argv arrays: they are handed verbatim
//! to `sh -c` or `cmd /C`. Whatever the shell can do, a configured command
//! can do too.

use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// A started child that can be killed without waiting for it.
pub trait ChildHandle: Send {
    fn id(&self) -> Option<u32>;

    /// Request forceful termination and return immediately.
    fn kill(&mut self) -> io::Result<()>;

    /// Non-blocking exit check. Returns `Some` once the child has exited.
    fn try_wait(&mut self) -> io::Result<Option<ExitStatus>>;
}

/// Starts command lines as child processes.
pub trait CommandRunner {
    fn spawn(&self, command_line: &str) -> io::Result<Box<dyn ChildHandle>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub flag: String,
}

impl Shell {
    pub fn platform() -> Self {
        if cfg!(windows) {
            Self {
                program: "cmd".to_string(),
                flag: "/C".to_string(),
            }
        } else {
            Self {
                program: "sh".to_string(),
                flag: "-c".to_string(),
            }
        }
    }
}

/// Runs command lines through a shell from a fixed working directory.
///
/// Children inherit stdout and stderr, get a null stdin, and on Unix lead
/// their own process group so that a kill also reaches whatever the shell
/// started.
pub struct ShellRunner {
    shell: Shell,
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new(shell: Shell, working_dir: PathBuf) -> Self {
        Self { shell, working_dir }
    }

    /// Platform shell, running from the launcher's current directory.
    pub fn platform() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(Shell::platform(), working_dir)
    }
}

impl CommandRunner for ShellRunner {
    fn spawn(&self, command_line: &str) -> io::Result<Box<dyn ChildHandle>> {
        let mut cmd = Command::new(&self.shell.program);
        cmd.arg(&self.shell.flag);

        // cmd.exe does its own parsing; Rust-style quoting would mangle it.
        #[cfg(windows)]
        cmd.raw_arg(command_line);
        #[cfg(not(windows))]
        cmd.arg(command_line);

        cmd.current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        #[cfg(unix)]
        cmd.process_group(0);

        let child = cmd.spawn()?;
        Ok(Box::new(ShellChild { child }))
    }
}

struct ShellChild {
    child: Child,
}

impl ChildHandle for ShellChild {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    fn kill(&mut self) -> io::Result<()> {
        #[cfg(unix)]
        if let Some(pid) = self.child.id() {
            use nix::sys::signal::{Signal, killpg};
            use nix::unistd::Pid;

            return killpg(Pid::from_raw(pid as i32), Signal::SIGKILL).map_err(io::Error::from);
        }
        self.child.start_kill()
    }

    fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        self.child.try_wait()
    }
}
