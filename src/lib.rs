//! CPU process scheduling simulator.
//!
//! Simulates a static set of processes on a single CPU under the classical
//! scheduling policies and derives per-process timing statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Timeline`, `CompletionMap`
//! - **`policies`**: FCFS, SJF, SRTF, and Round Robin behind `SchedulingPolicy`
//! - **`metrics`**: Turnaround, waiting, and response times plus averages
//! - **`validation`**: Input checks and single-CPU output verification
//! - **`simulator`**: Validate → run → verify → measure in one call
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::metrics::ScheduleMetrics;
//! use cpu_schedule::models::Process;
//! use cpu_schedule::policies::srtf;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let outcome = srtf(&processes);
//! let metrics = ScheduleMetrics::compute(&processes, &outcome.completions).unwrap();
//! assert_eq!(outcome.completions["P2"], 4);
//! assert!((metrics.avg_waiting - 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
