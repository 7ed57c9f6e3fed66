//! First-Come-First-Served.
//!
//! Runs processes to completion in arrival order. Ties keep input order.
//! The CPU idles until the next process arrives when the queue is empty.

use super::{PolicyOutcome, SchedulingPolicy};
use crate::models::{arrival_order, Process};

/// First-Come-First-Served policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> PolicyOutcome {
        fcfs(processes)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Runs FCFS over `processes`.
pub fn fcfs(processes: &[Process]) -> PolicyOutcome {
    let mut outcome = PolicyOutcome::for_processes(processes);
    let mut clock = 0;

    for idx in arrival_order(processes) {
        let p = &processes[idx];
        let start = clock.max(p.arrival);
        outcome.timeline.push(idx, start, p.burst);
        clock = start + p.burst;
        outcome.complete(p, clock);
    }

    log::debug!(
        "FCFS scheduled {} processes, makespan {}",
        processes.len(),
        clock
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_fcfs_scenario() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let outcome = fcfs(&processes);
        assert_eq!(outcome.completions["P1"], 5);
        assert_eq!(outcome.completions["P2"], 8);
        assert_eq!(outcome.completions["P3"], 16);
        assert_eq!(outcome.timeline.segments("P2").unwrap(), &[Segment::new(5, 3)]);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![Process::new("late", 4, 2), Process::new("early", 0, 3)];
        let outcome = fcfs(&processes);
        assert_eq!(outcome.timeline.first_start("early"), Some(0));
        assert_eq!(outcome.timeline.first_start("late"), Some(4));
        // Timeline rows keep input order.
        assert_eq!(outcome.timeline.entries[0].process_id, "late");
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            Process::new("B", 0, 4),
            Process::new("A", 0, 1),
            Process::new("C", 0, 2),
        ];
        let outcome = fcfs(&processes);
        assert_eq!(outcome.completions["B"], 4);
        assert_eq!(outcome.completions["A"], 5);
        assert_eq!(outcome.completions["C"], 7);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("A", 3, 2), Process::new("B", 10, 1)];
        let outcome = fcfs(&processes);
        assert_eq!(outcome.timeline.segments("A").unwrap(), &[Segment::new(3, 2)]);
        assert_eq!(outcome.timeline.segments("B").unwrap(), &[Segment::new(10, 1)]);
        assert_eq!(outcome.completions["B"], 11);
    }
}
