//! Discrete-event simulation of requests from several prioritised
//! sources competing for a pool of devices through a bounded buffer.

extern crate ordered_float;
extern crate rand;
extern crate rand_distr;

pub mod config;
pub mod distribution;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod queues;
pub mod report;
pub mod sim;

pub use config::{RunLimits, Seed, SimConfig};
pub use error::{Error, Result};
pub use report::Report;
pub use sim::engine::{DefaultSimulation, Simulation, Termination};
