//! Per-process timing metrics.
//!
//! Derives the classical CPU scheduling measures from a policy's
//! completion map and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival (needs a timeline) |
//! | Makespan | latest completion |
//! | CPU utilization | sum of bursts / makespan |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SimulationError;
use crate::models::{CompletionMap, Process, Timeline};

/// Timing statistics of one policy run.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Turnaround time per process.
    pub turnaround: HashMap<String, i64>,
    /// Waiting time per process.
    pub waiting: HashMap<String, i64>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick over the makespan.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from processes and their completion times.
    ///
    /// # Errors
    /// - `MissingCompletion` if a process has no completion entry.
    /// - `NegativeWaiting` if a completion is earlier than arrival + burst,
    ///   which only an inconsistent policy run can produce.
    pub fn compute(
        processes: &[Process],
        completions: &CompletionMap,
    ) -> Result<Self, SimulationError> {
        let mut turnaround = HashMap::with_capacity(processes.len());
        let mut waiting = HashMap::with_capacity(processes.len());
        // Individual times fit in i64; their sums may not.
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_burst: i64 = 0;
        let mut makespan: i64 = 0;

        for p in processes {
            let completion = *completions.get(&p.id).ok_or_else(|| {
                SimulationError::MissingCompletion {
                    process_id: p.id.clone(),
                }
            })?;

            let tat = completion - p.arrival;
            let wt = tat - p.burst;
            if wt < 0 {
                return Err(SimulationError::NegativeWaiting {
                    process_id: p.id.clone(),
                    waiting: wt,
                });
            }

            turnaround.insert(p.id.clone(), tat);
            waiting.insert(p.id.clone(), wt);
            total_turnaround += i128::from(tat);
            total_waiting += i128::from(wt);
            total_burst += p.burst;
            makespan = makespan.max(completion);
        }

        let count = processes.len() as f64;
        let (avg_turnaround, avg_waiting) = if processes.is_empty() {
            (0.0, 0.0)
        } else {
            (total_turnaround as f64 / count, total_waiting as f64 / count)
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                total_burst as f64 / makespan as f64,
                count / makespan as f64,
            )
        };

        Ok(Self {
            turnaround,
            waiting,
            avg_turnaround,
            avg_waiting,
            makespan,
            cpu_utilization,
            throughput,
        })
    }

    /// Splits into `(turnaround, waiting, avg_turnaround, avg_waiting)`.
    pub fn into_summary(self) -> (HashMap<String, i64>, HashMap<String, i64>, f64, f64) {
        (
            self.turnaround,
            self.waiting,
            self.avg_turnaround,
            self.avg_waiting,
        )
    }
}

/// Response time (first run - arrival) of every process that ran.
pub fn response_times(processes: &[Process], timeline: &Timeline) -> HashMap<String, i64> {
    processes
        .iter()
        .filter_map(|p| {
            timeline
                .first_start(&p.id)
                .map(|start| (p.id.clone(), start - p.arrival))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    fn completions(pairs: &[(&str, i64)]) -> CompletionMap {
        pairs.iter().map(|&(id, t)| (id.to_string(), t)).collect()
    }

    #[test]
    fn test_metrics_fcfs_scenario() {
        let m = ScheduleMetrics::compute(
            &scenario(),
            &completions(&[("P1", 5), ("P2", 8), ("P3", 16)]),
        )
        .unwrap();
        assert_eq!(m.turnaround["P1"], 5);
        assert_eq!(m.turnaround["P2"], 7);
        assert_eq!(m.turnaround["P3"], 14);
        assert_eq!(m.waiting["P1"], 0);
        assert_eq!(m.waiting["P2"], 4);
        assert_eq!(m.waiting["P3"], 6);
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.makespan, 16);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_utilization_with_idle_time() {
        let processes = vec![Process::new("A", 3, 2), Process::new("B", 10, 1)];
        let m = ScheduleMetrics::compute(&processes, &completions(&[("A", 5), ("B", 11)]))
            .unwrap();
        assert_eq!(m.makespan, 11);
        assert!((m.cpu_utilization - 3.0 / 11.0).abs() < 1e-10);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_missing_completion() {
        let err = ScheduleMetrics::compute(&scenario(), &completions(&[("P1", 5), ("P2", 8)]))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::MissingCompletion {
                process_id: "P3".into()
            }
        );
    }

    #[test]
    fn test_metrics_negative_waiting() {
        let err = ScheduleMetrics::compute(
            &scenario(),
            &completions(&[("P1", 5), ("P2", 3), ("P3", 16)]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::NegativeWaiting { ref process_id, waiting: -1 } if process_id == "P2"
        ));
    }

    #[test]
    fn test_metrics_summary() {
        let m = ScheduleMetrics::compute(
            &scenario(),
            &completions(&[("P1", 5), ("P2", 8), ("P3", 16)]),
        )
        .unwrap();
        let (tat, wt, avg_tat, _avg_wt) = m.into_summary();
        assert_eq!(tat.len(), 3);
        assert_eq!(wt["P3"], 6);
        assert!(avg_tat > 8.0);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::compute(&[], &CompletionMap::new()).unwrap();
        assert_eq!(m.makespan, 0);
        assert!((m.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_response_times() {
        let processes = scenario();
        let mut timeline = Timeline::for_processes(&processes);
        timeline.push(0, 0, 1);
        timeline.push(1, 1, 3);
        timeline.push(0, 4, 4);
        let rt = response_times(&processes, &timeline);
        assert_eq!(rt["P1"], 0);
        assert_eq!(rt["P2"], 0);
        assert!(!rt.contains_key("P3"));
    }
}
