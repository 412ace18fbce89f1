use std::fmt;

/// Index of a traffic source. Lower ids have higher priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(pub usize);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "S{}", self.0 + 1)
    }
}

/// Handle of a live request inside a `RequestPool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    source: SourceId,
    sequence: u64,
    arrival_time: f64,
    start_service_time: Option<f64>,
    finish_service_time: Option<f64>,
}

/// Durations of a completed request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub waiting: f64,
    pub service: f64,
    pub total: f64,
}

impl Request {
    pub fn new(source: SourceId, sequence: u64, arrival_time: f64) -> Self {
        Request {
            source,
            sequence,
            arrival_time,
            start_service_time: None,
            finish_service_time: None,
        }
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    /// 1-based, counted per source.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn start_service_time(&self) -> Option<f64> {
        self.start_service_time
    }

    pub fn finish_service_time(&self) -> Option<f64> {
        self.finish_service_time
    }

    pub fn start_service(&mut self, now: f64) {
        assert!(
            self.start_service_time.is_none(),
            "request {}#{} started twice",
            self.source,
            self.sequence
        );
        self.start_service_time = Some(now);
    }

    /// Stamps the departure and returns the request's timing.
    pub fn finish_service(&mut self, now: f64) -> Timing {
        let start = match self.start_service_time {
            Some(t) => t,
            None => panic!(
                "request {}#{} finished without being served",
                self.source, self.sequence
            ),
        };
        self.finish_service_time = Some(now);
        Timing {
            waiting: start - self.arrival_time,
            service: now - start,
            total: now - self.arrival_time,
        }
    }
}

/// Arena owning every request currently in the system.
#[derive(Debug, Default)]
pub struct RequestPool {
    slots: Vec<Option<Request>>,
    vacant: Vec<usize>,
    live: usize,
}

impl RequestPool {
    pub fn new() -> Self {
        RequestPool::default()
    }

    pub fn insert(&mut self, request: Request) -> RequestId {
        self.live += 1;
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(request);
                RequestId(index)
            }
            None => {
                self.slots.push(Some(request));
                RequestId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, id: RequestId) -> &Request {
        match self.slots.get(id.0) {
            Some(Some(request)) => request,
            _ => panic!("no live request at slot {}", id.0),
        }
    }

    pub fn get_mut(&mut self, id: RequestId) -> &mut Request {
        match self.slots.get_mut(id.0) {
            Some(Some(request)) => request,
            _ => panic!("no live request at slot {}", id.0),
        }
    }

    /// Ends the lifecycle of `id` and hands the request back.
    pub fn remove(&mut self, id: RequestId) -> Request {
        let request = match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(request) => request,
            None => panic!("no live request at slot {}", id.0),
        };
        self.vacant.push(id.0);
        self.live -= 1;
        request
    }

    /// Number of requests still alive.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_follows_stamps() {
        let mut r = Request::new(SourceId(1), 3, 2.0);
        r.start_service(2.5);
        let timing = r.finish_service(6.0);
        assert_eq!(timing, Timing { waiting: 0.5, service: 3.5, total: 4.0 });
        assert_eq!(r.finish_service_time(), Some(6.0));
        assert_eq!(r.sequence(), 3);
    }

    #[test]
    #[should_panic(expected = "without being served")]
    fn finishing_unserved_request_panics() {
        let mut r = Request::new(SourceId(0), 1, 0.0);
        r.finish_service(1.0);
    }

    #[test]
    fn pool_reuses_vacant_slots() {
        let mut pool = RequestPool::new();
        let a = pool.insert(Request::new(SourceId(0), 1, 0.0));
        let b = pool.insert(Request::new(SourceId(1), 1, 0.5));
        assert_eq!(pool.len(), 2);

        let removed = pool.remove(a);
        assert_eq!(removed.source(), SourceId(0));
        assert_eq!(pool.len(), 1);

        let c = pool.insert(Request::new(SourceId(2), 1, 1.0));
        assert_eq!(c, a);
        assert_eq!(pool.get(c).source(), SourceId(2));
        assert_eq!(pool.get(b).source(), SourceId(1));
    }

    #[test]
    #[should_panic(expected = "no live request")]
    fn double_remove_panics() {
        let mut pool = RequestPool::new();
        let a = pool.insert(Request::new(SourceId(0), 1, 0.0));
        pool.remove(a);
        pool.remove(a);
    }

    #[test]
    fn source_labels_are_one_based() {
        assert_eq!(SourceId(0).to_string(), "S1");
        assert_eq!(SourceId(2).to_string(), "S3");
    }
}
