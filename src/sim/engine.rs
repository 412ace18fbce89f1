//! The event loop and its two handlers.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::config::{RunLimits, SimConfig};
use crate::distribution::{ExponentialService, UniformInterval, Variate};
use crate::error::Result;
use crate::queues::buffer::PacketBuffer;
use crate::queues::device::{DeviceId, DevicePool};
use crate::queues::request::{Request, RequestId, RequestPool, SourceId};
use crate::report::Report;
use crate::sim::calendar::Calendar;
use crate::sim::event::{Event, EventKind};
use crate::sim::stats::Counters;

pub type DefaultSimulation = Simulation<UniformInterval, ExponentialService>;

/// Why `run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Drained,
    TimeLimit,
    ServedLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Termination::Drained => f.write_str("calendar drained"),
            Termination::TimeLimit => f.write_str("time limit reached"),
            Termination::ServedLimit => f.write_str("served limit reached"),
        }
    }
}

pub struct Simulation<S, D> where S: Variate, D: Variate {
    clock: f64,
    seed: u64,
    rng: StdRng,
    calendar: Calendar,
    sources: Vec<S>,
    buffer: PacketBuffer,
    devices: DevicePool<D>,
    requests: RequestPool,
    counters: Counters,
}

impl DefaultSimulation {
    pub fn from_config(config: &SimConfig) -> Result<DefaultSimulation> {
        config.validate()?;
        let seed = config.seed.resolve();
        info!(seed, "seeding random stream");
        Ok(Simulation::new(
            config.source_variates()?,
            config.device_variates()?,
            config.buffer_capacity,
            seed,
        ))
    }
}

impl<S, D> Simulation<S, D> where S: Variate, D: Variate {
    /// Builds the model and schedules the first arrival of every source.
    pub fn new(sources: Vec<S>, services: Vec<D>, buffer_capacity: usize, seed: u64) -> Self {
        assert!(buffer_capacity > 0, "buffer capacity must be at least 1");
        let n_sources = sources.len();
        let n_devices = services.len();
        let mut sim = Simulation {
            clock: 0.,
            seed,
            rng: StdRng::seed_from_u64(seed),
            calendar: Calendar::new(),
            sources,
            buffer: PacketBuffer::new(buffer_capacity),
            devices: DevicePool::new(services),
            requests: RequestPool::new(),
            counters: Counters::new(n_sources, n_devices),
        };
        for source in 0..n_sources {
            sim.schedule_arrival(SourceId(source));
        }
        sim
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn buffer(&self) -> &PacketBuffer {
        &self.buffer
    }

    pub fn devices(&self) -> &DevicePool<D> {
        &self.devices
    }

    pub fn request(&self, id: RequestId) -> &Request {
        self.requests.get(id)
    }

    pub fn pending_events(&self) -> usize {
        self.calendar.len()
    }

    /// Requests generated but neither served nor rejected yet.
    pub fn in_flight(&self) -> usize {
        self.requests.len()
    }

    pub fn report(&self) -> Report {
        Report::new(self)
    }

    /// Processes the earliest pending event, if any.
    pub fn step(&mut self) -> Option<Event> {
        let event = self.calendar.pop_min()?;
        self.clock = event.time;
        trace!("{}", event);
        match event.kind {
            EventKind::Arrival { source } => self.on_arrival(source),
            EventKind::Departure { device, request } => self.on_departure(device, request),
        }
        Some(event)
    }

    pub fn run(&mut self, limits: RunLimits) -> Termination {
        info!(max_time = limits.max_time, max_served = limits.max_served, "starting run");
        let termination = loop {
            if self.calendar.is_empty() {
                break Termination::Drained;
            }
            if self.clock >= limits.max_time {
                break Termination::TimeLimit;
            }
            if self.counters.served >= limits.max_served {
                break Termination::ServedLimit;
            }
            self.step();
        };
        info!(
            clock = self.clock,
            generated = self.counters.generated,
            served = self.counters.served,
            rejected = self.counters.rejected,
            "run finished: {}",
            termination
        );
        termination
    }

    fn schedule_arrival(&mut self, source: SourceId) {
        let interval = self.sources[source.0].draw(&mut self.rng);
        self.calendar.push(Event::arrival(self.clock + interval, source));
    }

    fn begin_service(&mut self, device: DeviceId, id: RequestId) {
        let now = self.clock;
        let service = self.devices.device_mut(device).service_time(&mut self.rng);
        self.requests.get_mut(id).start_service(now);
        self.devices.device_mut(device).start_service(id);
        self.calendar.push(Event::departure(now + service, device, id));
    }

    fn on_arrival(&mut self, source: SourceId) {
        let sequence = self.counters.record_arrival(source.0);
        let id = self.requests.insert(Request::new(source, sequence, self.clock));
        self.schedule_arrival(source);

        if let Some(device) = self.devices.get_free_device() {
            self.begin_service(device, id);
            return;
        }

        if self.buffer.is_full() {
            if let Some(victim) = self.buffer.select_victim() {
                self.buffer.remove(victim);
                let rejected = self.requests.remove(victim);
                self.counters.record_rejection(rejected.source().0);
                debug!(
                    time = self.clock,
                    "{}#{} evicted by {}#{}",
                    rejected.source(),
                    rejected.sequence(),
                    source,
                    sequence
                );
            }
        }
        self.buffer.add(id, source);
    }

    fn on_departure(&mut self, device: DeviceId, request: RequestId) {
        let finished = match self.devices.device_mut(device).finish_service() {
            Some(id) => id,
            None => panic!("{} completed while free", device),
        };
        assert_eq!(finished, request, "{} completed an unexpected request", device);

        let mut done = self.requests.remove(finished);
        let timing = done.finish_service(self.clock);
        self.counters.record_departure(done.source().0, device.0, timing);

        if self.buffer.is_empty() {
            return;
        }
        let next = match self.buffer.select_next() {
            Some(id) => id,
            None => return,
        };
        // A device was just freed, so this only fails if the pool misbehaves.
        // The request then stays buffered instead of being lost.
        match self.devices.get_free_device() {
            Some(free) => {
                self.buffer.remove(next);
                self.begin_service(free, next);
            }
            None => debug!(time = self.clock, "no free device after departure; request stays buffered"),
        }
    }
}
