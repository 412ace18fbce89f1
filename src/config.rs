//! Run parameters. The defaults are the compiled-in model: three
//! uniform sources, two exponential devices, a buffer of three.

use crate::distribution::{ExponentialService, UniformInterval};
use crate::error::{Error, Result};

pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceParams {
    pub min_interval: f64,
    pub max_interval: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceParams {
    pub mean_service: f64,
}

/// When the event loop stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunLimits {
    pub max_time: f64,
    pub max_served: u64,
}

impl Default for RunLimits {
    fn default() -> Self {
        RunLimits { max_time: 1000., max_served: 1000 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    Fixed(u64),
    /// Fresh seed from the operating system, logged at start.
    Entropy,
}

impl Seed {
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Fixed(seed) => seed,
            Seed::Entropy => rand::random(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub sources: Vec<SourceParams>,
    pub devices: Vec<DeviceParams>,
    pub buffer_capacity: usize,
    pub limits: RunLimits,
    pub seed: Seed,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            sources: (0..3)
                .map(|i| SourceParams {
                    min_interval: 1.5 + 0.5 * i as f64,
                    max_interval: 2.5 + 0.5 * i as f64,
                })
                .collect(),
            devices: (0..2)
                .map(|i| DeviceParams { mean_service: 2.0 + 1.0 * i as f64 })
                .collect(),
            buffer_capacity: 3,
            limits: RunLimits::default(),
            seed: Seed::Fixed(DEFAULT_SEED),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::NoSources);
        }
        if self.devices.is_empty() {
            return Err(Error::NoDevices);
        }
        if self.buffer_capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !(self.limits.max_time > 0.) {
            return Err(Error::InvalidTimeLimit(self.limits.max_time));
        }
        self.source_variates()?;
        self.device_variates()?;
        Ok(())
    }

    pub fn source_variates(&self) -> Result<Vec<UniformInterval>> {
        self.sources
            .iter()
            .map(|p| UniformInterval::new(p.min_interval, p.max_interval))
            .collect()
    }

    pub fn device_variates(&self) -> Result<Vec<ExponentialService>> {
        self.devices
            .iter()
            .map(|p| ExponentialService::new(p.mean_service))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_model() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.sources[2], SourceParams { min_interval: 2.5, max_interval: 3.5 });
        assert_eq!(config.devices[1], DeviceParams { mean_service: 3.0 });
        assert_eq!(config.buffer_capacity, 3);
        assert_eq!(config.limits, RunLimits { max_time: 1000., max_served: 1000 });
        assert_eq!(config.seed, Seed::Fixed(DEFAULT_SEED));
    }

    #[test]
    fn rejects_broken_configs() {
        let mut config = SimConfig::default();
        config.buffer_capacity = 0;
        assert_eq!(config.validate(), Err(Error::ZeroCapacity));

        let mut config = SimConfig::default();
        config.sources.clear();
        assert_eq!(config.validate(), Err(Error::NoSources));

        let mut config = SimConfig::default();
        config.devices.clear();
        assert_eq!(config.validate(), Err(Error::NoDevices));

        let mut config = SimConfig::default();
        config.sources[1].max_interval = 0.5;
        assert_eq!(config.validate(), Err(Error::InvalidInterval { min: 2.0, max: 0.5 }));

        let mut config = SimConfig::default();
        config.devices[0].mean_service = 0.;
        assert_eq!(config.validate(), Err(Error::InvalidServiceMean(0.)));

        let mut config = SimConfig::default();
        config.limits.max_time = std::f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn fixed_seed_resolves_to_itself() {
        assert_eq!(Seed::Fixed(5).resolve(), 5);
    }
}
