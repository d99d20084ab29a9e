//! Simulation domain models.
//!
//! Provides the typed records exchanged with the scheduling engines:
//! the input workload and the per-process output.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated |
//! |------|-----------|---------|
//! | `Process` | caller / workload generator | never |
//! | `ScheduleResult` | engine | never |
//! | `ExecutionSlice` | Round-Robin engine | never |
//! | `Schedule` | engine | never after return |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ExecutionSlice, Schedule, ScheduleResult};
