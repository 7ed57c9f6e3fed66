//! Shortest-Job-First (non-preemptive).
//!
//! At every decision point the arrived, unfinished process with the
//! smallest burst runs to completion. Ties go to the earlier arrival, then
//! to the earlier input position.
//!
//! When nothing has arrived the clock jumps to the next arrival, which is
//! the same idle gap a tick-by-tick simulation would produce.

use super::{next_arrival_after, PolicyOutcome, SchedulingPolicy};
use crate::models::Process;

/// Shortest-Job-First policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> PolicyOutcome {
        sjf(processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}

/// Runs non-preemptive SJF over `processes`.
pub fn sjf(processes: &[Process]) -> PolicyOutcome {
    let mut outcome = PolicyOutcome::for_processes(processes);
    let mut finished = vec![false; processes.len()];
    let mut remaining = processes.len();
    let mut clock = 0;

    while remaining > 0 {
        let next = processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| !finished[i] && p.has_arrived(clock))
            .min_by_key(|&(i, p)| (p.burst, p.arrival, i))
            .map(|(i, _)| i);

        let Some(idx) = next else {
            match next_arrival_after(processes, &finished, clock) {
                Some(t) => {
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        let p = &processes[idx];
        outcome.timeline.push(idx, clock, p.burst);
        clock += p.burst;
        outcome.complete(p, clock);
        finished[idx] = true;
        remaining -= 1;
    }

    log::debug!(
        "SJF scheduled {} processes, makespan {}",
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
    fn test_sjf_scenario() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let outcome = sjf(&processes);
        assert_eq!(outcome.completions["P1"], 5);
        assert_eq!(outcome.completions["P2"], 8);
        assert_eq!(outcome.completions["P3"], 16);
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let processes = vec![
            Process::new("A", 0, 3),
            Process::new("B", 2, 6),
            Process::new("C", 4, 4),
            Process::new("D", 6, 5),
            Process::new("E", 8, 2),
        ];
        let outcome = sjf(&processes);
        // A 0..3, B 3..9, E 9..11, C 11..15, D 15..20
        assert_eq!(outcome.completions["A"], 3);
        assert_eq!(outcome.completions["B"], 9);
        assert_eq!(outcome.completions["E"], 11);
        assert_eq!(outcome.completions["C"], 15);
        assert_eq!(outcome.completions["D"], 20);
    }

    #[test]
    fn test_sjf_tie_breaks_on_arrival_then_input_order() {
        let processes = vec![
            Process::new("long", 0, 5),
            Process::new("late", 2, 2),
            Process::new("early", 1, 2),
            Process::new("early2", 1, 2),
        ];
        let outcome = sjf(&processes);
        assert_eq!(outcome.timeline.first_start("early"), Some(5));
        assert_eq!(outcome.timeline.first_start("early2"), Some(7));
        assert_eq!(outcome.timeline.first_start("late"), Some(9));
    }

    #[test]
    fn test_sjf_idles_until_first_arrival() {
        let processes = vec![Process::new("A", 3, 2), Process::new("B", 10, 1)];
        let outcome = sjf(&processes);
        assert_eq!(outcome.timeline.segments("A").unwrap(), &[Segment::new(3, 2)]);
        assert_eq!(outcome.timeline.segments("B").unwrap(), &[Segment::new(10, 1)]);
    }
}
