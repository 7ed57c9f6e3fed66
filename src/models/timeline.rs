//! Timeline (simulation output) model.
//!
//! A timeline records, for every process, the ordered slices of CPU time it
//! received. Together with the completion map it is the complete output of
//! one policy run, and the only input a Gantt-style renderer needs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Process;

/// Completion tick per process ID.
pub type CompletionMap = HashMap<String, i64>;

/// One contiguous slice of CPU time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Start tick.
    pub start: i64,
    /// Length in ticks.
    pub duration: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// End tick (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether two segments share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Segments belonging to a single process, ordered by start tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTimeline {
    /// Owning process ID.
    pub process_id: String,
    /// Segments in start order.
    pub segments: Vec<Segment>,
}

/// A segment paired with the process that ran in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice<'a> {
    /// Process that held the CPU.
    pub process_id: &'a str,
    /// When and for how long.
    pub segment: Segment,
}

/// Per-process execution timeline of a policy run.
///
/// Entries follow the input order of the processes, so a renderer can draw
/// one row per process in the order the caller supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// One entry per input process.
    pub entries: Vec<ProcessTimeline>,
}

impl Timeline {
    /// Creates a timeline with an empty row for every process.
    pub fn for_processes(processes: &[Process]) -> Self {
        Self {
            entries: processes
                .iter()
                .map(|p| ProcessTimeline {
                    process_id: p.id.clone(),
                    segments: Vec::new(),
                })
                .collect(),
        }
    }

    /// Appends a segment to the process at input position `index`.
    pub(crate) fn push(&mut self, index: usize, start: i64, duration: i64) {
        if duration > 0 {
            self.entries[index].segments.push(Segment::new(start, duration));
        }
    }

    /// Appends a segment, merging it into the previous one when the process
    /// kept the CPU without interruption.
    pub(crate) fn extend(&mut self, index: usize, start: i64, duration: i64) {
        if duration <= 0 {
            return;
        }
        let segments = &mut self.entries[index].segments;
        match segments.last_mut() {
            Some(last) if last.end() == start => last.duration += duration,
            _ => segments.push(Segment::new(start, duration)),
        }
    }

    /// Segments of the given process.
    pub fn segments(&self, process_id: &str) -> Option<&[Segment]> {
        self.entries
            .iter()
            .find(|e| e.process_id == process_id)
            .map(|e| e.segments.as_slice())
    }

    /// Total CPU time the process received.
    pub fn total_run_time(&self, process_id: &str) -> i64 {
        self.segments(process_id)
            .map(|segs| segs.iter().map(|s| s.duration).sum())
            .unwrap_or(0)
    }

    /// Tick at which the process first ran.
    pub fn first_start(&self, process_id: &str) -> Option<i64> {
        self.segments(process_id)?.first().map(|s| s.start)
    }

    /// Tick at which the process last stopped running.
    pub fn last_end(&self, process_id: &str) -> Option<i64> {
        self.segments(process_id)?.last().map(|s| s.end())
    }

    /// Latest segment end across all processes.
    pub fn makespan(&self) -> i64 {
        self.entries
            .iter()
            .filter_map(|e| e.segments.last())
            .map(|s| s.end())
            .max()
            .unwrap_or(0)
    }

    /// Number of segments across all processes.
    pub fn segment_count(&self) -> usize {
        self.entries.iter().map(|e| e.segments.len()).sum()
    }

    /// All segments flattened into CPU order (by start tick).
    pub fn slices(&self) -> Vec<Slice<'_>> {
        let mut slices: Vec<Slice<'_>> = self
            .entries
            .iter()
            .flat_map(|e| {
                e.segments.iter().map(move |&segment| Slice {
                    process_id: e.process_id.as_str(),
                    segment,
                })
            })
            .collect();
        slices.sort_by_key(|s| s.segment.start);
        slices
    }

    /// Finds the first pair of segments that occupy the CPU at the same time.
    pub fn find_overlap(&self) -> Option<(Slice<'_>, Slice<'_>)> {
        let slices = self.slices();
        slices
            .windows(2)
            .find(|w| w[0].segment.overlaps(&w[1].segment))
            .map(|w| (w[0], w[1]))
    }

    /// Total busy time across all processes.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .flat_map(|e| e.segments.iter())
            .map(|s| s.duration)
            .sum()
    }
}
