//! Simulation runner.
//!
//! Ties the pieces of a run together in the order a front end needs them:
//!
//! 1. Validate the process set and policy parameters.
//! 2. Run the selected policy.
//! 3. Verify the output (completeness always, full timeline checks when
//!    verification is enabled).
//! 4. Compute metrics.
//!
//! The resulting [`SimulationReport`] carries everything a text report or a
//! Gantt renderer consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SimulationError;
use crate::metrics::{response_times, ScheduleMetrics};
use crate::models::{CompletionMap, Process, Timeline};
use crate::policies::{PolicyKind, SchedulingPolicy};
use crate::validation::{validate_processes, verify_complete, verify_outcome};

fn default_verify() -> bool {
    true
}

/// Input container for one simulation.
///
/// Deserializable, so a workload and policy choice can come from a
/// configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<Process>,
    /// Policy to simulate.
    pub policy: PolicyKind,
    /// Run full output verification (default: on).
    #[serde(default = "default_verify")]
    pub verify: bool,
}

impl SimulationRequest {
    /// Creates a new request with verification enabled.
    pub fn new(processes: Vec<Process>, policy: PolicyKind) -> Self {
        Self {
            processes,
            policy,
            verify: true,
        }
    }

    /// Enables or disables full output verification.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Result of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Simulated policy.
    pub policy: PolicyKind,
    /// Chart title.
    pub title: String,
    /// Segments per process.
    pub timeline: Timeline,
    /// Completion tick per process.
    pub completions: CompletionMap,
    /// Turnaround/waiting statistics.
    pub metrics: ScheduleMetrics,
    /// Response time per process.
    pub response: HashMap<String, i64>,
}

/// Validates, runs, and measures simulations.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::policies::PolicyKind;
/// use cpu_schedule::simulator::{SimulationRequest, Simulator};
///
/// let processes = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
///     Process::new("P3", 2, 8),
/// ];
/// let request = SimulationRequest::new(processes, PolicyKind::Fcfs);
/// let report = Simulator::new().run(&request).unwrap();
/// assert_eq!(report.completions["P3"], 16);
/// assert_eq!(report.metrics.waiting["P2"], 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs one simulation.
    ///
    /// Invalid input is rejected before any policy runs.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
        Self::validate(request)?;

        let policy = request.policy.policy()?;
        let processes = &request.processes;
        let outcome = policy.run(processes);

        if request.verify {
            verify_outcome(policy.name(), processes, &outcome)?;
        } else {
            verify_complete(policy.name(), processes, &outcome)?;
        }

        let metrics = ScheduleMetrics::compute(processes, &outcome.completions)?;
        let response = response_times(processes, &outcome.timeline);

        log::info!(
            "{}: {} processes, makespan {}, avg turnaround {:.2}, avg waiting {:.2}",
            request.policy,
            processes.len(),
            metrics.makespan,
            metrics.avg_turnaround,
            metrics.avg_waiting
        );

        let (timeline, completions) = outcome.into_parts();
        Ok(SimulationReport {
            policy: request.policy,
            title: request.policy.title(),
            timeline,
            completions,
            metrics,
            response,
        })
    }

    /// Runs all four policies on the same process set.
    ///
    /// Reports are returned in FCFS, SJF, SRTF, RR order.
    pub fn compare(
        &self,
        processes: &[Process],
        quantum: i64,
    ) -> Result<Vec<SimulationReport>, SimulationError> {
        PolicyKind::all(quantum)
            .into_iter()
            .map(|kind| self.run(&SimulationRequest::new(processes.to_vec(), kind)))
            .collect()
    }

    fn validate(request: &SimulationRequest) -> Result<(), SimulationError> {
        let mut errors = validate_processes(&request.processes).err().unwrap_or_default();
        if let Err(SimulationError::InvalidConfiguration(mut policy_errors)) =
            request.policy.validate()
        {
            errors.append(&mut policy_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            log::warn!(
                "rejected {} request: {} configuration error(s)",
                request.policy,
                errors.len()
            );
            Err(SimulationError::InvalidConfiguration(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn scenario() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    #[test]
    fn test_run_fcfs() {
        let request = SimulationRequest::new(scenario(), PolicyKind::Fcfs);
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.title, "FCFS Scheduling");
        assert_eq!(report.completions["P1"], 5);
        assert_eq!(report.completions["P2"], 8);
        assert_eq!(report.completions["P3"], 16);
        assert_eq!(report.response["P3"], 6);
    }

    #[test]
    fn test_run_round_robin() {
        let request = SimulationRequest::new(scenario(), PolicyKind::RoundRobin { quantum: 2 });
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.title, "Round Robin (q=2)");
        assert_eq!(report.timeline.segments("P1").unwrap().len(), 3);
        assert_eq!(report.metrics.turnaround["P1"], 12);
        assert_eq!(report.metrics.waiting["P2"], 5);
    }

    #[test]
    fn test_run_rejects_invalid_processes() {
        let processes = vec![Process::new("P1", -1, 3), Process::new("P1", 0, 2)];
        let request = SimulationRequest::new(processes, PolicyKind::Sjf);
        match Simulator::new().run(&request) {
            Err(SimulationError::InvalidConfiguration(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateId));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_run_collects_quantum_and_process_errors() {
        let request = SimulationRequest::new(Vec::new(), PolicyKind::RoundRobin { quantum: 0 });
        match Simulator::new().run(&request) {
            Err(SimulationError::InvalidConfiguration(errors)) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
                assert_eq!(
                    kinds,
                    vec![
                        ValidationErrorKind::EmptyProcessSet,
                        ValidationErrorKind::NonPositiveQuantum
                    ]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_run_without_verification() {
        let request = SimulationRequest::new(scenario(), PolicyKind::Srtf).with_verification(false);
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.completions["P2"], 4);
    }

    #[test]
    fn test_compare_all_policies() {
        let reports = Simulator::new().compare(&scenario(), 2).unwrap();
        let titles: Vec<&str> = reports.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "FCFS Scheduling",
                "SJF (Non-Preemptive) Scheduling",
                "SRTF Scheduling",
                "Round Robin (q=2)"
            ]
        );
        // SRTF minimizes average waiting time.
        let srtf = &reports[2].metrics;
        assert!(reports
            .iter()
            .all(|r| srtf.avg_waiting <= r.metrics.avg_waiting + 1e-10));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": "P1", "arrival": 0, "burst": 5},
                {"id": "P2", "arrival": 1, "burst": 3, "priority": 2}
            ],
            "policy": {"round_robin": {"quantum": 2}}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert!(request.verify);
        assert_eq!(request.processes[1].priority, Some(2));
        assert_eq!(request.policy, PolicyKind::RoundRobin { quantum: 2 });

        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.completions["P2"], 7);
    }

    #[test]
    fn test_report_serializes() {
        let request = SimulationRequest::new(scenario(), PolicyKind::Sjf);
        let report = Simulator::new().run(&request).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["title"], "SJF (Non-Preemptive) Scheduling");
        assert_eq!(value["timeline"]["entries"][0]["process_id"], "P1");
        assert_eq!(value["metrics"]["makespan"], 16);
    }
}
