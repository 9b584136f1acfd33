// ABOUTME: Process resource sampling (resident memory and CPU) for benchmark reports
// ABOUTME: Wraps sysinfo so benchmark and load-test runs can report before/after usage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use sysinfo::{Pid, System};
use tracing::warn;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Resource usage of this process at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResourceSnapshot {
    /// Resident set size in bytes
    pub rss_bytes: u64,
    /// CPU usage since the previous sample, in percent of one core
    pub cpu_percent: f32,
}

impl ResourceSnapshot {
    /// Resident set size in MiB
    #[must_use]
    pub fn rss_mib(&self) -> f64 {
        self.rss_bytes as f64 / BYTES_PER_MIB
    }
}

/// Usage sampled before and after a measured run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResourceUsage {
    /// Sample taken before the run
    pub before: ResourceSnapshot,
    /// Sample taken after the run; its CPU figure covers the run itself
    pub after: ResourceSnapshot,
}

impl ResourceUsage {
    /// Change in resident memory over the run, in bytes
    #[must_use]
    pub fn memory_delta_bytes(&self) -> i64 {
        let delta = i128::from(self.after.rss_bytes) - i128::from(self.before.rss_bytes);
        i64::try_from(delta).unwrap_or(if delta > 0 { i64::MAX } else { i64::MIN })
    }
}

/// Samples memory and CPU of the current process
///
/// CPU usage is measured between consecutive samples, so the first sample
/// always reports 0%.
pub struct ResourceMonitor {
    system: System,
    pid: Option<Pid>,
}

impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceMonitor {
    /// Create a monitor for the current process
    #[must_use]
    pub fn new() -> Self {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| warn!("Resource sampling unavailable: {e}"))
            .ok();

        Self {
            system: System::new(),
            pid,
        }
    }

    /// Take a sample; returns zeros when the platform is unsupported
    pub fn sample(&mut self) -> ResourceSnapshot {
        let Some(pid) = self.pid else {
            return ResourceSnapshot::default();
        };
        if !self.system.refresh_process(pid) {
            return ResourceSnapshot::default();
        }

        self.system
            .process(pid)
            .map_or_else(ResourceSnapshot::default, |process| ResourceSnapshot {
                rss_bytes: process.memory(),
                cpu_percent: process.cpu_usage(),
            })
    }
}
