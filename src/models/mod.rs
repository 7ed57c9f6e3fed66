//! Simulation domain models.
//!
//! Provides the input and output data types of a scheduling run.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Immutable input record (arrival, burst, priority) |
//! | Segment | One contiguous slice of CPU time |
//! | Timeline | Ordered segments per process |
//! | CompletionMap | Completion tick per process |

mod process;
mod timeline;

pub(crate) use process::arrival_order;
pub use process::Process;
pub use timeline::{CompletionMap, ProcessTimeline, Segment, Slice, Timeline};
