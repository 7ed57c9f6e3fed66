//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised while configuring, running, or measuring a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input rejected before any policy ran.
    InvalidConfiguration(Vec<ValidationError>),
    /// A policy finished without assigning a completion to every process.
    IncompleteSimulation {
        /// Policy name.
        policy: &'static str,
        /// Processes left without a completion tick.
        missing: Vec<String>,
    },
    /// A policy produced a timeline that breaks a single-CPU invariant.
    InconsistentTimeline {
        /// Policy name.
        policy: &'static str,
        /// What was wrong.
        message: String,
    },
    /// The metrics calculator found no completion for a process.
    MissingCompletion {
        /// Process without a completion entry.
        process_id: String,
    },
    /// The metrics calculator derived a negative waiting time.
    NegativeWaiting {
        /// Offending process.
        process_id: String,
        /// Computed waiting time.
        waiting: i64,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(errors) => {
                write!(f, "invalid configuration: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
            Self::IncompleteSimulation { policy, missing } => write!(
                f,
                "{policy} finished without completing: {}",
                missing.join(", ")
            ),
            Self::InconsistentTimeline { policy, message } => {
                write!(f, "{policy} produced an inconsistent timeline: {message}")
            }
            Self::MissingCompletion { process_id } => {
                write!(f, "no completion time for process '{process_id}'")
            }
            Self::NegativeWaiting {
                process_id,
                waiting,
            } => write!(
                f,
                "negative waiting time {waiting} for process '{process_id}'"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfiguration(errors)
    }
}
