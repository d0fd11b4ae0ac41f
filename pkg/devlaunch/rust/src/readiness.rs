// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! TCP readiness polling.
//!
//! A service counts as ready once something accepts a TCP connection on its
//! port. Nothing is sent over the connection; it is closed right away.

use crate::error::TimeoutError;
use log::{debug, info};
use tokio::net::TcpStream;
use tokio::time::{Duration, Instant, sleep, timeout};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed-interval poller. No backoff: the total wait is bounded by the
/// caller's timeout anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortWaiter {
    pub connect_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for PortWaiter {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl PortWaiter {
    /// Poll `host:port` until it accepts a connection or `limit` has elapsed.
    ///
    /// `None` and `Some(0)` succeed immediately without touching the network.
    pub async fn wait(
        &self,
        host: &str,
        port: Option<u16>,
        limit: Duration,
    ) -> Result<(), TimeoutError> {
        let Some(port) = port.filter(|&p| p != 0) else {
            return Ok(());
        };

        let addr = format!("{host}:{port}");
        // A limit too large to represent as an instant means no deadline.
        let deadline = Instant::now().checked_add(limit);
        let mut attempts: u64 = 0;
        while deadline.is_none_or(|deadline| Instant::now() < deadline) {
            attempts += 1;
            match timeout(self.connect_timeout, TcpStream::connect(&addr)).await {
                Ok(Ok(stream)) => {
                    drop(stream);
                    info!("{addr} is accepting connections (attempt {attempts})");
                    return Ok(());
                }
                Ok(Err(e)) => debug!("{addr} not ready: {e}"),
                Err(_) => debug!("{addr} connect timed out"),
            }
            sleep(self.poll_interval).await;
        }

        Err(TimeoutError {
            host: host.to_string(),
            port,
            timeout: limit,
        })
    }
}

/// [`PortWaiter::wait`] with the default 1 s connect timeout and 500 ms interval.
pub async fn wait_for_port(
    host: &str,
    port: Option<u16>,
    limit: Duration,
) -> Result<(), TimeoutError> {
    PortWaiter::default().wait(host, port, limit).await
}
