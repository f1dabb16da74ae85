//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival time (input order breaks ties).
//! 2. Run each process to completion in that order, starting at
//!    `max(clock, arrival)`.
//!
//! The CPU idles when the next process has not arrived yet.

use tracing::{debug, info_span};

use super::{finish, prepare, Algorithm, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult, Tick, Timeline};

/// Non-preemptive first-come-first-served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstComeFirstServed;

impl FirstComeFirstServed {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        let _span = info_span!(
            "schedule",
            algorithm = %self.algorithm(),
            processes = processes.len()
        )
        .entered();

        let mut states = prepare(processes)?;
        let mut timeline = Timeline::new();
        let mut clock: Tick = 0;

        for state in &mut states {
            let start = clock.max(state.process().arrival_time);
            let burst = state.remaining();
            let ran = state.run_for(start, burst);
            timeline.push_run(state.id(), start, start + ran);
            debug!(pid = state.id(), start, stop = start + ran, "dispatched");
            clock = start + ran;
        }

        finish(self.algorithm(), &states, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    #[test]
    fn test_two_processes() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();

        let waits: Vec<Tick> = result.rows.iter().map(|r| r.wait).collect();
        let turnarounds: Vec<Tick> = result.rows.iter().map(|r| r.turnaround).collect();
        assert_eq!(waits, vec![0, 4]);
        assert_eq!(turnarounds, vec![5, 7]);
        assert_eq!(result.row_for(2).unwrap().exit, 8);
    }

    #[test]
    fn test_sorts_by_arrival() {
        // Supplied out of arrival order
        let processes = vec![Process::new(1, 4, 2), Process::new(2, 0, 3)];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();

        assert_eq!(
            result.timeline.slices(),
            &[TimeSlice::new(2, 0, 3), TimeSlice::new(1, 4, 6)]
        );
        assert_eq!(result.rows[0].pid, 2);
        assert_eq!(result.row_for(1).unwrap().wait, 0);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new(3, 0, 1),
            Process::new(1, 0, 1),
            Process::new(2, 0, 1),
        ];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();
        assert_eq!(result.completion_order(), vec![3, 1, 2]);
    }

    #[test]
    fn test_idle_cpu_until_arrival() {
        let processes = vec![Process::new(1, 3, 2)];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();

        let row = result.row_for(1).unwrap();
        assert_eq!(row.wait, 0);
        assert_eq!(row.exit, 5);
        assert!((result.metrics.throughput - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_one_slice_per_process() {
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 2, 2),
            Process::new(3, 3, 6),
        ];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();

        assert_eq!(result.timeline.len(), 3);
        for slice in result.timeline.iter() {
            let row = result.row_for(slice.pid).unwrap();
            assert_eq!(slice.duration(), row.burst);
            assert_eq!(slice.start - row.arrival, row.wait);
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        let err = FirstComeFirstServed.schedule(&[]).unwrap_err();
        assert!(matches!(err, ScheduleError::Invalid(_)));
    }
}
