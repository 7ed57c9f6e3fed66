//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! The running process is always the arrived, unfinished process with the
//! least remaining time (ties: earlier arrival, then earlier input position).
//! The choice can only change when a process arrives or the running process
//! completes, so the clock advances straight to the next of those two events
//! instead of one tick at a time:
//!
//! 1. Select the best ready process at `clock`. If none is ready, jump to
//!    the next arrival.
//! 2. Run it until it completes or the next process arrives.
//! 3. Extend its open segment if it already held the CPU at `clock`,
//!    otherwise open a new one.
//!
//! The produced segments are identical to a tick-by-tick simulation in which
//! consecutive ticks of the same process are merged.
//!
//! # Complexity
//! O(n^2): at most 2n decision points, each scanning all processes.

use super::{next_arrival_after, PolicyOutcome, SchedulingPolicy};
use crate::models::Process;

/// Shortest-Remaining-Time-First policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &[Process]) -> PolicyOutcome {
        srtf(processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive)"
    }
}

/// Runs SRTF over `processes`.
pub fn srtf(processes: &[Process]) -> PolicyOutcome {
    let n = processes.len();
    let mut outcome = PolicyOutcome::for_processes(processes);
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut finished = vec![false; n];
    let mut unfinished = n;
    let mut clock = 0;
    let mut last_run: Option<usize> = None;
    let mut preemptions = 0usize;

    while unfinished > 0 {
        let next = (0..n)
            .filter(|&i| !finished[i] && processes[i].has_arrived(clock))
            .min_by_key(|&i| (remaining[i], processes[i].arrival, i));

        let Some(idx) = next else {
            match next_arrival_after(processes, &finished, clock) {
                Some(t) => {
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        if let Some(prev) = last_run {
            if prev != idx && !finished[prev] {
                preemptions += 1;
            }
        }

        let run = match next_arrival_after(processes, &finished, clock) {
            Some(t) => (t - clock).min(remaining[idx]),
            None => remaining[idx],
        };

        outcome.timeline.extend(idx, clock, run);
        clock += run;
        remaining[idx] -= run;
        last_run = Some(idx);

        if remaining[idx] == 0 {
            finished[idx] = true;
            unfinished -= 1;
            outcome.complete(&processes[idx], clock);
        }
    }

    log::debug!(
        "SRTF scheduled {} processes in {} segments ({} preemptions), makespan {}",
        n,
        outcome.timeline.segment_count(),
        preemptions,
        clock
    );
    outcome
}
