//! Gantt timeline model.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Tick};

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that ran.
    pub pid: ProcessId,
    /// First time unit of the interval.
    pub start: Tick,
    /// Time unit just after the interval (exclusive).
    pub stop: Tick,
}

impl TimeSlice {
    /// Creates a slice.
    pub fn new(pid: ProcessId, start: Tick, stop: Tick) -> Self {
        Self { pid, start, stop }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.stop - self.start
    }
}

/// Ordered sequence of [`TimeSlice`]s describing CPU occupancy.
///
/// Adjacent runs of the same process are merged, so a process that keeps
/// the CPU for several consecutive units shows up as a single slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran during `[start, stop)`.
    ///
    /// Empty intervals are ignored.
    pub fn push_run(&mut self, pid: ProcessId, start: Tick, stop: Tick) {
        if stop <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.slices.push(TimeSlice::new(pid, start, stop));
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Iterates over the slices.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlice> {
        self.slices.iter()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Stop time of the last slice.
    pub fn end(&self) -> Option<Tick> {
        self.slices.last().map(|s| s.stop)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, pid: ProcessId) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimeSlice;
    type IntoIter = std::slice::Iter<'a, TimeSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_runs_merge() {
        let mut t = Timeline::new();
        t.push_run(1, 0, 1);
        t.push_run(1, 1, 2);
        t.push_run(2, 2, 3);
        t.push_run(1, 3, 4);
        assert_eq!(
            t.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 3),
                TimeSlice::new(1, 3, 4),
            ]
        );
    }

    #[test]
    fn test_gap_prevents_merge() {
        let mut t = Timeline::new();
        t.push_run(1, 0, 2);
        t.push_run(1, 4, 5); // same process after an idle gap
        assert_eq!(t.len(), 2);
        assert_eq!(t.busy_time(), 3);
        assert_eq!(t.end(), Some(5));
    }

    #[test]
    fn test_empty_interval_ignored() {
        let mut t = Timeline::new();
        t.push_run(1, 3, 3);
        assert!(t.is_empty());
        assert_eq!(t.end(), None);
    }

    #[test]
    fn test_slices_for() {
        let mut t = Timeline::new();
        t.push_run(1, 0, 1);
        t.push_run(2, 1, 2);
        t.push_run(1, 2, 3);
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.slices_for(3).len(), 0);
    }
}
