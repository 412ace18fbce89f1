use crate::queues::request::Timing;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceStats {
    pub generated: u64,
    pub rejected: u64,
    pub served: u64,
    pub total_time: f64,
    pub waiting_time: f64,
}

impl SourceStats {
    pub fn rejection_probability(&self) -> f64 {
        ratio(self.rejected as f64, self.generated as f64)
    }

    pub fn mean_total_time(&self) -> f64 {
        ratio(self.total_time, self.served as f64)
    }

    pub fn mean_waiting_time(&self) -> f64 {
        ratio(self.waiting_time, self.served as f64)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceStats {
    pub served: u64,
    pub busy_time: f64,
}

impl DeviceStats {
    pub fn utilization(&self, elapsed: f64) -> f64 {
        ratio(self.busy_time, elapsed)
    }
}

/// Aggregate counters of a run. Only the event handlers write here.
#[derive(Clone, Debug, PartialEq)]
pub struct Counters {
    pub generated: u64,
    pub served: u64,
    pub rejected: u64,
    pub sources: Vec<SourceStats>,
    pub devices: Vec<DeviceStats>,
}

impl Counters {
    pub fn new(sources: usize, devices: usize) -> Self {
        Counters {
            generated: 0,
            served: 0,
            rejected: 0,
            sources: vec![SourceStats::default(); sources],
            devices: vec![DeviceStats::default(); devices],
        }
    }

    pub fn record_arrival(&mut self, source: usize) -> u64 {
        self.generated += 1;
        let stats = &mut self.sources[source];
        stats.generated += 1;
        stats.generated
    }

    pub fn record_rejection(&mut self, source: usize) {
        self.rejected += 1;
        self.sources[source].rejected += 1;
    }

    pub fn record_departure(&mut self, source: usize, device: usize, timing: Timing) {
        self.served += 1;
        let s = &mut self.sources[source];
        s.served += 1;
        s.total_time += timing.total;
        s.waiting_time += timing.waiting;
        let d = &mut self.devices[device];
        d.served += 1;
        d.busy_time += timing.service;
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den > 0. { num / den } else { 0. }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_divide_by_served() {
        let mut counters = Counters::new(2, 1);
        assert_eq!(counters.record_arrival(0), 1);
        assert_eq!(counters.record_arrival(0), 2);
        assert_eq!(counters.record_arrival(1), 1);
        counters.record_rejection(0);
        counters.record_departure(0, 0, Timing { waiting: 1.0, service: 2.0, total: 3.0 });

        let s = counters.sources[0];
        assert_eq!(s.rejection_probability(), 0.5);
        assert_eq!(s.mean_total_time(), 3.0);
        assert_eq!(s.mean_waiting_time(), 1.0);
        assert_eq!(counters.devices[0].utilization(4.0), 0.5);
        assert_eq!(counters.generated, 3);
        assert_eq!(counters.served, 1);
        assert_eq!(counters.rejected, 1);
    }

    #[test]
    fn empty_denominators_give_zero() {
        let counters = Counters::new(1, 1);
        assert_eq!(counters.sources[0].rejection_probability(), 0.);
        assert_eq!(counters.sources[0].mean_total_time(), 0.);
        assert_eq!(counters.devices[0].utilization(0.), 0.);
    }
}
