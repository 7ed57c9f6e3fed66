//! Random workload generation.
//!
//! Produces valid process sets for experiments and invariant testing.
//! Processes are named `P1..Pn` in input order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for random process sets.
///
/// Bounds are clamped when drawing, so a deserialized configuration with a
/// zero burst bound or negative limits still yields a valid process set.
///
/// # Example
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let processes = WorkloadGenerator::new(5).with_max_burst(4).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    count: usize,
    /// Latest possible arrival tick (inclusive).
    max_arrival: i64,
    /// Longest possible burst (inclusive, at least 1).
    max_burst: i64,
    /// Priorities are drawn from `0..=max_priority` when set.
    max_priority: Option<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
            max_priority: None,
        }
    }

    /// Number of processes per draw.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Enables random priorities.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = Some(max_priority.max(0));
        self
    }

    /// Draws a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        (1..=self.count)
            .map(|n| {
                let process = Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                );
                match self.max_priority {
                    Some(max) => process.with_priority(rng.random_range(0..=max.max(0))),
                    None => process,
                }
            })
            .collect()
    }
}
