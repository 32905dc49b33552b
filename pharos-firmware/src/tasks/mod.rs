//! Embassy async tasks
//!
//! The main cycle runs in the executor's main task; these are the two
//! periodic collaborators that interleave with it.

pub mod heartbeat;
pub mod tick;

pub use heartbeat::heartbeat_task;
pub use tick::{take_elapsed_ms, tick_task};
