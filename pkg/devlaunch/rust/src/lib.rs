// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Local development launcher: start a backend and a frontend, wait for their
//! ports, open a browser, and kill both on interrupt.

pub mod browser;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod readiness;
pub mod runner;
pub mod state;
pub mod supervisor;

pub use config::Configuration;
pub use lifecycle::Launcher;
pub use state::LifecycleState;
pub use supervisor::{ManagedProcess, Role, Supervisor};
