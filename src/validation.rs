//! Input validation and output verification for simulations.
//!
//! Input checks run before any policy and report every problem found:
//! - Empty process set
//! - Duplicate or empty process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quantum
//! - Clock overflow (latest arrival + total burst beyond `i64`)
//!
//! Output verification checks a finished policy run against the
//! single-CPU invariants: every process completes, receives exactly its
//! burst, never runs before arriving, and no two segments overlap.

use std::collections::HashSet;

use crate::error::SimulationError;
use crate::models::Process;
use crate::policies::PolicyOutcome;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process with empty ID",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst),
            ));
        }
    }

    // Every policy finishes by latest arrival + total burst.
    let horizon = processes
        .iter()
        .filter(|p| p.burst > 0)
        .try_fold(
            processes.iter().map(|p| p.arrival).max().unwrap_or(0).max(0),
            |acc, p| acc.checked_add(p.burst),
        );
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

/// Checks that every input process received a completion tick.
pub fn verify_complete(
    policy: &'static str,
    processes: &[Process],
    outcome: &PolicyOutcome,
) -> Result<(), SimulationError> {
    let missing: Vec<String> = processes
        .iter()
        .filter(|p| !outcome.completions.contains_key(&p.id))
        .map(|p| p.id.clone())
        .collect();

    if !missing.is_empty() {
        return Err(SimulationError::IncompleteSimulation { policy, missing });
    }

    let known: HashSet<&str> = processes.iter().map(|p| p.id.as_str()).collect();
    let mut unknown: Vec<&str> = outcome
        .completions
        .keys()
        .map(String::as_str)
        .filter(|id| !known.contains(id))
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(SimulationError::InconsistentTimeline {
            policy,
            message: format!("completions for unknown processes: {}", unknown.join(", ")),
        });
    }

    Ok(())
}

/// Verifies a finished policy run against the single-CPU invariants.
///
/// # Checks
/// 1. Every process has a completion tick.
/// 2. Segment durations of each process sum to its burst.
/// 3. No segment starts before its process arrives.
/// 4. Completion equals the end of the last segment.
/// 5. No two segments overlap.
pub fn verify_outcome(
    policy: &'static str,
    processes: &[Process],
    outcome: &PolicyOutcome,
) -> Result<(), SimulationError> {
    verify_complete(policy, processes, outcome)?;

    let inconsistent = |message: String| SimulationError::InconsistentTimeline { policy, message };

    for p in processes {
        let segments = outcome.timeline.segments(&p.id).unwrap_or(&[]);

        let ran: i64 = segments.iter().map(|s| s.duration).sum();
        if ran != p.burst {
            return Err(inconsistent(format!(
                "process '{}' ran {ran} ticks, burst is {}",
                p.id, p.burst
            )));
        }

        if let Some(first) = segments.first() {
            if first.start < p.arrival {
                return Err(inconsistent(format!(
                    "process '{}' starts at {} before arriving at {}",
                    p.id, first.start, p.arrival
                )));
            }
        }

        let completion = outcome.completions.get(&p.id).copied();
        let last_end = segments.last().map(|s| s.end());
        if completion != last_end {
            return Err(inconsistent(format!(
                "process '{}' completes at {completion:?} but last runs until {last_end:?}",
                p.id
            )));
        }
    }

    if let Some((a, b)) = outcome.timeline.find_overlap() {
        return Err(inconsistent(format!(
            "'{}' at {}..{} overlaps '{}' at {}..{}",
            a.process_id,
            a.segment.start,
            a.segment.end(),
            b.process_id,
            b.segment.start,
            b.segment.end()
        )));
    }

    Ok(())
}
