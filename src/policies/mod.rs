//! CPU scheduling policies.
//!
//! Each policy consumes an ordered process set and produces a per-process
//! timeline plus a completion map. Policies are pure: all simulation state
//! (clock, ready queue, remaining times) lives inside a single `run` call,
//! so policies can be invoked repeatedly or from several threads.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst among arrived |
//! | SRTF | yes | shortest remaining time among arrived |
//! | RR | yes | FIFO ready queue, fixed quantum |
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::policies::{PolicyKind, SchedulingPolicy};
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let policy = PolicyKind::RoundRobin { quantum: 2 }.policy().unwrap();
//! let outcome = policy.run(&processes);
//! assert_eq!(outcome.completions["P2"], 7);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::{fcfs, Fcfs};
pub use round_robin::{round_robin, RoundRobin};
pub use sjf::{sjf, Sjf};
pub use srtf::{srtf, Srtf};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::error::SimulationError;
use crate::models::{CompletionMap, Process, Timeline};
use crate::validation::validate_quantum;

/// Output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// Segments per process.
    pub timeline: Timeline,
    /// Completion tick per process.
    pub completions: CompletionMap,
}

impl PolicyOutcome {
    pub(crate) fn for_processes(processes: &[Process]) -> Self {
        Self {
            timeline: Timeline::for_processes(processes),
            completions: CompletionMap::with_capacity(processes.len()),
        }
    }

    pub(crate) fn complete(&mut self, process: &Process, time: i64) {
        self.completions.insert(process.id.clone(), time);
    }

    /// Splits the outcome into `(timeline, completions)`.
    pub fn into_parts(self) -> (Timeline, CompletionMap) {
        (self.timeline, self.completions)
    }
}

/// A CPU scheduling policy.
///
/// Implementations assume input that passed
/// [`validate_processes`](crate::validation::validate_processes).
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the process set on a single CPU.
    fn run(&self, processes: &[Process]) -> PolicyOutcome;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Serializable policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Round Robin with the given time quantum.
    RoundRobin {
        /// Maximum contiguous slice per turn (ticks).
        quantum: i64,
    },
}

impl PolicyKind {
    /// All four policies, Round Robin using `quantum`.
    pub fn all(quantum: i64) -> [PolicyKind; 4] {
        [
            PolicyKind::Fcfs,
            PolicyKind::Sjf,
            PolicyKind::Srtf,
            PolicyKind::RoundRobin { quantum },
        ]
    }

    /// Builds the policy.
    ///
    /// Fails only for a non-positive Round Robin quantum.
    pub fn policy(&self) -> Result<Box<dyn SchedulingPolicy>, SimulationError> {
        let policy: Box<dyn SchedulingPolicy> = match *self {
            PolicyKind::Fcfs => Box::new(Fcfs),
            PolicyKind::Sjf => Box::new(Sjf),
            PolicyKind::Srtf => Box::new(Srtf),
            PolicyKind::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
        };
        Ok(policy)
    }

    /// Checks the policy parameters without building it.
    pub fn validate(&self) -> Result<(), SimulationError> {
        match *self {
            PolicyKind::RoundRobin { quantum } => validate_quantum(quantum)
                .map_err(|e| SimulationError::InvalidConfiguration(vec![e])),
            _ => Ok(()),
        }
    }

    /// Chart title for the policy.
    pub fn title(&self) -> String {
        match self {
            PolicyKind::Fcfs => "FCFS Scheduling".to_string(),
            PolicyKind::Sjf => "SJF (Non-Preemptive) Scheduling".to_string(),
            PolicyKind::Srtf => "SRTF Scheduling".to_string(),
            PolicyKind::RoundRobin { quantum } => format!("Round Robin (q={quantum})"),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fcfs => write!(f, "FCFS"),
            PolicyKind::Sjf => write!(f, "SJF"),
            PolicyKind::Srtf => write!(f, "SRTF"),
            PolicyKind::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}

/// Earliest arrival strictly after `time` among unfinished processes.
///
/// Event-driven policies jump the clock here instead of idling tick by tick.
pub(crate) fn next_arrival_after(
    processes: &[Process],
    finished: &[bool],
    time: i64,
) -> Option<i64> {
    processes
        .iter()
        .zip(finished)
        .filter(|&(p, &done)| !done && p.arrival > time)
        .map(|(p, _)| p.arrival)
        .min()
}
