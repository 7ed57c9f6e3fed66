//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by `clock` to the tail of a FIFO
//!    ready queue, in arrival order (ties: input order).
//! 2. Dequeue the head and run it for `min(quantum, remaining)` ticks,
//!    recording one segment per turn.
//! 3. Admit processes that arrived during (or exactly at the end of) the
//!    slice, then re-enqueue the preempted process behind them.
//! 4. With an empty queue, jump the clock to the next arrival.
//!
//! Newly arrived processes always queue ahead of the process whose slice
//! just ended.

use std::collections::VecDeque;

use super::{PolicyOutcome, SchedulingPolicy};
use crate::error::SimulationError;
use crate::models::{arrival_order, Process};
use crate::validation::validate_quantum;

/// Round Robin policy.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    ///
    /// Fails with `InvalidConfiguration` for a non-positive quantum.
    pub fn new(quantum: i64) -> Result<Self, SimulationError> {
        validate_quantum(quantum).map_err(|e| SimulationError::InvalidConfiguration(vec![e]))?;
        Ok(Self { quantum })
    }

    /// Time quantum (ticks).
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> PolicyOutcome {
        simulate(processes, self.quantum)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Runs Round Robin over `processes` with the given quantum.
pub fn round_robin(
    processes: &[Process],
    quantum: i64,
) -> Result<PolicyOutcome, SimulationError> {
    Ok(RoundRobin::new(quantum)?.run(processes))
}

/// Feeds processes into the ready queue as the clock passes their arrival.
struct Arrivals<'a> {
    processes: &'a [Process],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a> Arrivals<'a> {
    fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            order: arrival_order(processes),
            cursor: 0,
        }
    }

    fn admit(&mut self, clock: i64, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.cursor) {
            if !self.processes[idx].has_arrived(clock) {
                break;
            }
            queue.push_back(idx);
            self.cursor += 1;
        }
    }

    fn next_time(&self) -> Option<i64> {
        self.order
            .get(self.cursor)
            .map(|&idx| self.processes[idx].arrival)
    }
}

fn simulate(processes: &[Process], quantum: i64) -> PolicyOutcome {
    let mut outcome = PolicyOutcome::for_processes(processes);
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut arrivals = Arrivals::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut unfinished = processes.len();
    let mut clock = 0;

    while unfinished > 0 {
        arrivals.admit(clock, &mut queue);

        let Some(idx) = queue.pop_front() else {
            match arrivals.next_time() {
                Some(t) => {
                    clock = clock.max(t);
                    continue;
                }
                None => break,
            }
        };

        let run = quantum.min(remaining[idx]);
        outcome.timeline.push(idx, clock, run);
        clock += run;
        remaining[idx] -= run;

        arrivals.admit(clock, &mut queue);

        if remaining[idx] > 0 {
            queue.push_back(idx);
        } else {
            unfinished -= 1;
            outcome.complete(&processes[idx], clock);
        }
    }

    log::debug!(
        "RR(q={}) scheduled {} processes in {} segments, makespan {}",
        quantum,
        processes.len(),
        outcome.timeline.segment_count(),
        clock
    );
    outcome
}
