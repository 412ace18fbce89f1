use std::fmt;

use rand::Rng;

use crate::distribution::Variate;
use crate::queues::request::RequestId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub usize);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "D{}", self.0 + 1)
    }
}

/// A single service slot. Never queues: at most one request at a time.
#[derive(Debug)]
pub struct Device<D> where D: Variate {
    id: DeviceId,
    service: D,
    current: Option<RequestId>,
}

impl<D> Device<D> where D: Variate {
    pub fn new(id: DeviceId, service: D) -> Self {
        Device { id, service, current: None }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn is_free(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<RequestId> {
        self.current
    }

    pub fn service_time<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.service.draw(rng)
    }

    pub fn start_service(&mut self, request: RequestId) {
        assert!(self.current.is_none(), "{} is already busy", self.id);
        self.current = Some(request);
    }

    pub fn finish_service(&mut self) -> Option<RequestId> {
        self.current.take()
    }
}

/// Round-robin cursor over the device slots.
#[derive(Clone, Debug, Default)]
pub struct DeviceSelector {
    last_used: Option<usize>,
}

impl DeviceSelector {
    pub fn new() -> Self {
        DeviceSelector::default()
    }

    pub fn last_used(&self) -> Option<usize> {
        self.last_used
    }

    /// Scans from just after the last handed-out slot, wrapping around.
    /// The cursor only moves when a free device is found.
    pub fn select<D: Variate>(&mut self, devices: &[Device<D>]) -> Option<usize> {
        let n = devices.len();
        if n == 0 {
            return None;
        }
        let start = self.last_used.map_or(0, |last| (last + 1) % n);
        let found = (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&index| devices[index].is_free());
        if found.is_some() {
            self.last_used = found;
        }
        found
    }
}

#[derive(Debug)]
pub struct DevicePool<D> where D: Variate {
    devices: Vec<Device<D>>,
    selector: DeviceSelector,
}

impl<D> DevicePool<D> where D: Variate {
    pub fn new(services: Vec<D>) -> Self {
        DevicePool {
            devices: services
                .into_iter()
                .enumerate()
                .map(|(i, service)| Device::new(DeviceId(i), service))
                .collect(),
            selector: DeviceSelector::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device<D>> {
        self.devices.iter()
    }

    pub fn device(&self, id: DeviceId) -> &Device<D> {
        &self.devices[id.0]
    }

    pub fn device_mut(&mut self, id: DeviceId) -> &mut Device<D> {
        &mut self.devices[id.0]
    }

    pub fn get_free_device(&mut self) -> Option<DeviceId> {
        self.selector.select(&self.devices).map(DeviceId)
    }

    pub fn busy_count(&self) -> usize {
        self.devices.iter().filter(|d| !d.is_free()).count()
    }
}
