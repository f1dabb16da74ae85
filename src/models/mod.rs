//! Scheduling domain models.
//!
//! Provides the data types shared by every scheduling algorithm: the
//! immutable input [`Process`], the per-run [`ProcessState`], the
//! [`Timeline`] of CPU occupancy, and the [`ScheduleResult`] handed to
//! renderers.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated | Lifetime |
//! |------|---------|---------|----------|
//! | Process | at load time | never | whole program |
//! | ProcessState | per algorithm run | during simulation | one run |
//! | Timeline | per algorithm run | during simulation | until rendered |
//! | ScheduleResult | end of a run | never | until rendered |

mod process;
mod schedule;
mod state;
mod timeline;

pub use process::{Process, ProcessId, Tick};
pub use schedule::{ScheduleResult, ScheduleRow};
pub use state::ProcessState;
pub use timeline::{TimeSlice, Timeline};
