//! Random variates driving the model: inter-arrival intervals of the
//! sources and service durations of the devices.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Exp;

use crate::error::Error;

/// A strictly positive random quantity, drawn from a shared stream.
pub trait Variate {
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64;
}

// Resample until the draw is usable as a time increment.
fn positive<F: FnMut() -> f64>(mut sample: F) -> f64 {
    loop {
        let v = sample();
        if v > 0. {
            return v;
        }
    }
}

/// Inter-arrival interval drawn uniformly from `[min, max]`.
#[derive(Clone, Debug)]
pub struct UniformInterval {
    dist: Uniform<f64>,
}

impl UniformInterval {
    pub fn new(min: f64, max: f64) -> Result<Self, Error> {
        if !(min > 0.) || !(max >= min) || !max.is_finite() {
            return Err(Error::InvalidInterval { min, max });
        }
        Ok(UniformInterval { dist: Uniform::new_inclusive(min, max) })
    }
}

impl Variate for UniformInterval {
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let dist = &self.dist;
        positive(|| dist.sample(&mut *rng))
    }
}

/// Service duration drawn from an exponential law of mean `mean`.
#[derive(Clone, Debug)]
pub struct ExponentialService {
    dist: Exp<f64>,
}

impl ExponentialService {
    pub fn new(mean: f64) -> Result<Self, Error> {
        if !(mean > 0.) || !mean.is_finite() {
            return Err(Error::InvalidServiceMean(mean));
        }
        let dist = Exp::new(1. / mean).map_err(|_| Error::InvalidServiceMean(mean))?;
        Ok(ExponentialService { dist })
    }
}

impl Variate for ExponentialService {
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let dist = &self.dist;
        positive(|| dist.sample(&mut *rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uniform_draws_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut interval = UniformInterval::new(1.5, 2.5).unwrap();
        for _ in 0..10_000 {
            let v = interval.draw(&mut rng);
            assert!(v >= 1.5 && v <= 2.5, "{} out of bounds", v);
        }
    }

    #[test]
    fn degenerate_interval_is_constant() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut interval = UniformInterval::new(2.0, 2.0).unwrap();
        assert_eq!(interval.draw(&mut rng), 2.0);
    }

    #[test]
    fn exponential_mean_is_close() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut service = ExponentialService::new(3.0).unwrap();
        let n = 200_000;
        let sum: f64 = (0..n).map(|_| service.draw(&mut rng)).sum();
        let mean = sum / n as f64;
        assert!((mean - 3.0).abs() < 0.05, "sample mean {}", mean);
    }

    #[test]
    fn exponential_draws_are_positive() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut service = ExponentialService::new(0.5).unwrap();
        assert!((0..10_000).all(|_| service.draw(&mut rng) > 0.));
    }

    #[test]
    fn invalid_parameters_are_refused() {
        assert!(UniformInterval::new(0.0, 1.0).is_err());
        assert!(UniformInterval::new(2.0, 1.0).is_err());
        assert!(UniformInterval::new(std::f64::NAN, 1.0).is_err());
        assert!(ExponentialService::new(0.0).is_err());
        assert!(ExponentialService::new(-1.0).is_err());
        assert!(ExponentialService::new(std::f64::INFINITY).is_err());
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let mut ia = UniformInterval::new(1.0, 4.0).unwrap();
        let mut ib = ia.clone();
        for _ in 0..100 {
            assert_eq!(ia.draw(&mut a), ib.draw(&mut b));
        }
    }
}
