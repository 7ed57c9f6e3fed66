//! Process model.
//!
//! A process is one immutable input record of a simulation run: an
//! identifier, the tick at which it becomes eligible to run, and the total
//! CPU time it needs.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required (ticks).
    pub burst: i64,
    /// Scheduling priority. Carried through but not consulted by the
    /// built-in policies.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}

/// Input indices ordered by `(arrival, input position)`.
///
/// This is the stable arrival order shared by FCFS and Round Robin.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);
    order
}
