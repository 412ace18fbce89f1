//! Final summary of a run, computed from the aggregate counters only.

use std::fmt;

use crate::config::SimConfig;
use crate::distribution::Variate;
use crate::queues::device::DeviceId;
use crate::queues::request::SourceId;
use crate::sim::engine::Simulation;

#[derive(Clone, Debug, PartialEq)]
pub struct SourceRow {
    pub source: SourceId,
    pub requests: u64,
    pub rejected: u64,
    pub rejection_probability: f64,
    pub mean_total_time: f64,
    pub mean_waiting_time: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceRow {
    pub device: DeviceId,
    pub utilization: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub elapsed: f64,
    pub generated: u64,
    pub served: u64,
    pub rejected: u64,
    pub sources: Vec<SourceRow>,
    pub devices: Vec<DeviceRow>,
    pub current_packet: Option<SourceId>,
    pub buffer_len: usize,
    pub buffer_capacity: usize,
}

impl Report {
    pub fn new<S: Variate, D: Variate>(sim: &Simulation<S, D>) -> Self {
        let counters = sim.counters();
        let elapsed = sim.clock();
        Report {
            elapsed,
            generated: counters.generated,
            served: counters.served,
            rejected: counters.rejected,
            sources: counters
                .sources
                .iter()
                .enumerate()
                .map(|(i, s)| SourceRow {
                    source: SourceId(i),
                    requests: s.generated,
                    rejected: s.rejected,
                    rejection_probability: s.rejection_probability(),
                    mean_total_time: s.mean_total_time(),
                    mean_waiting_time: s.mean_waiting_time(),
                })
                .collect(),
            devices: counters
                .devices
                .iter()
                .enumerate()
                .map(|(i, d)| DeviceRow { device: DeviceId(i), utilization: d.utilization(elapsed) })
                .collect(),
            current_packet: sim.buffer().current_serving_source(),
            buffer_len: sim.buffer().len(),
            buffer_capacity: sim.buffer().capacity(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== SIMULATION RESULTS ===")?;
        writeln!(f, "Total simulation time: {:.3} units", self.elapsed)?;
        writeln!(f, "Requests generated: {}", self.generated)?;
        writeln!(f, "Requests served: {}", self.served)?;
        writeln!(f, "Requests rejected: {}", self.rejected)?;

        writeln!(f)?;
        writeln!(f, "--- SOURCE CHARACTERISTICS ---")?;
        writeln!(
            f,
            "{:>10}{:>12}{:>12}{:>12}{:>12}{:>12}",
            "Source", "Requests", "Rejected", "P_reject", "T_total", "T_wait"
        )?;
        for row in &self.sources {
            writeln!(
                f,
                "{:>10}{:>12}{:>12}{:>12.3}{:>12.2}{:>12.2}",
                row.source.to_string(),
                row.requests,
                row.rejected,
                row.rejection_probability,
                row.mean_total_time,
                row.mean_waiting_time
            )?;
        }

        writeln!(f)?;
        writeln!(f, "--- DEVICE CHARACTERISTICS ---")?;
        writeln!(f, "{:>10}{:>15}", "Device", "Utilization")?;
        for row in &self.devices {
            writeln!(f, "{:>10}{:>15.3}", row.device.to_string(), row.utilization)?;
        }

        writeln!(f)?;
        writeln!(f, "--- DISCIPLINE ANALYSIS ---")?;
        match self.current_packet {
            Some(source) => writeln!(f, "Packet service: Current packet = {}", source)?,
            None => writeln!(f, "Packet service: Current packet = none")?,
        }
        writeln!(f, "Rejections: Total rejected = {}", self.rejected)?;
        write!(
            f,
            "Buffer: Max size = {}, Current size = {}",
            self.buffer_capacity, self.buffer_len
        )
    }
}

/// Header printed before a run.
pub fn banner(config: &SimConfig) -> String {
    let lines = [
        "=== SIMULATION MODEL ===".to_owned(),
        "DISCIPLINES:".to_owned(),
        "- Infinite sources".to_owned(),
        "- Uniform request distribution".to_owned(),
        "- Exponential service time".to_owned(),
        "- Buffering in arrival order".to_owned(),
        "- Rejection by source priority".to_owned(),
        "- Packet service".to_owned(),
        "- Round-robin device selection".to_owned(),
        format!(
            "Parameters: {} sources, {} devices, buffer: {}",
            config.sources.len(),
            config.devices.len(),
            config.buffer_capacity
        ),
        format!("Max time: {} units", config.limits.max_time),
        format!("Max requests: {}", config.limits.max_served),
        "----------------------------------------".to_owned(),
    ];
    lines.join("\n")
}
