// Run domain module
// Per-card response buffer and its Idle/Running/Errored state machine

#![allow(clippy::module_inception)]

pub mod events;
pub mod run;
pub mod value_objects;

pub use events::RunEvent;
pub use run::{CardRun, RunSnapshot};
pub use value_objects::RunStatus;
