// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::Path;

use crate::{Error, Sample};

/// Number of points on the ideal-scaling reference line.
const REFERENCE_POINTS: usize = 100;

/// An ordered set of study samples, sorted ascending by processor count.
pub struct Study {
    samples: Vec<Sample>,
}

impl Study {
    /// Load every input file, then sort by `nproc`. Any unreadable or
    /// malformed file aborts the whole load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, Error> {
        if paths.is_empty() {
            return Err(Error::NoInput);
        }
        let mut samples = Vec::with_capacity(paths.len());
        for path in paths {
            samples.push(Sample::load(path.as_ref())?);
        }
        Ok(Self::from_samples(samples))
    }

    /// The sort is stable: repeated measurements at one processor count
    /// stay in the order they were given.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|sample| sample.nproc());
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn nprocs(&self) -> Vec<u64> {
        self.samples.iter().map(Sample::nproc).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::execution_time).collect()
    }

    /// Measured points as (nproc, time) pairs for chart consumption.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|sample| (sample.nproc() as f64, sample.execution_time()))
            .collect()
    }

    pub fn max_nproc(&self) -> u64 {
        self.samples.last().map(Sample::nproc).unwrap_or(1)
    }

    /// Ideal inverse-proportional speedup anchored at the smallest-nproc
    /// sample: `y(x) = time0 * nproc0 / x`, with `x` spanning
    /// [1, max nproc] across a fixed number of evenly spaced points.
    pub fn reference_curve(&self) -> Vec<(f64, f64)> {
        let first = match self.samples.first() {
            Some(first) => first,
            None => return Vec::new(),
        };
        let anchor = first.execution_time() * first.nproc() as f64;
        let max = self.max_nproc() as f64;
        let step = (max - 1.0) / (REFERENCE_POINTS - 1) as f64;
        (0..REFERENCE_POINTS)
            .map(|i| {
                let x = 1.0 + step * i as f64;
                (x, anchor / x)
            })
            .collect()
    }
}
