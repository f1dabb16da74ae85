//! Single-CPU scheduling simulator.
//!
//! Runs a set of processes through four classic scheduling disciplines and
//! reports, per algorithm, a Gantt timeline and per-process timing metrics
//! (wait, turnaround, exit, response) with aggregates.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `Timeline`,
//!   `ScheduleRow`, `ScheduleResult`
//! - **`dispatching`**: Priority rules (FIFO, SPT, SRPT) and the rule engine
//!   used to pick the next process
//! - **`scheduler`**: The four algorithms behind the `Scheduler` trait, plus
//!   metric evaluation
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, zero
//!   bursts, time overflow)
//! - **`input`** / **`workload`**: Process sources (CSV file, seeded generator)
//! - **`report`**: Text and JSON rendering
//! - **`config`** / **`telemetry`**: Command-line parsing and tracing setup
//!   for the binary
//!
//! # Example
//!
//! ```
//! use schedsim::models::Process;
//! use schedsim::scheduler::{FirstComeFirstServed, Scheduler};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let result = FirstComeFirstServed::new().schedule(&processes).unwrap();
//!
//! assert_eq!(result.row_for(2).unwrap().wait, 4);
//! assert_eq!(result.metrics.average_turnaround, 6.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, InputError, ScheduleError};
pub use models::{Process, ProcessId, ScheduleResult, Tick};
pub use scheduler::{run_all, Algorithm, Scheduler};
