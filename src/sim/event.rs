use std::fmt;

use crate::queues::device::DeviceId;
use crate::queues::request::{RequestId, SourceId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
    /// The source emits a new request.
    Arrival { source: SourceId },
    /// The device completes `request`.
    Departure { device: DeviceId, request: RequestId },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub time: f64,
    pub kind: EventKind,
}

impl Event {
    #[inline]
    pub fn arrival(time: f64, source: SourceId) -> Event {
        Event { time, kind: EventKind::Arrival { source } }
    }

    #[inline]
    pub fn departure(time: f64, device: DeviceId, request: RequestId) -> Event {
        Event { time, kind: EventKind::Departure { device, request } }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            EventKind::Arrival { source } => write!(f, "{:10.3} arrival   {}", self.time, source),
            EventKind::Departure { device, .. } => write!(f, "{:10.3} departure {}", self.time, device),
        }
    }
}
