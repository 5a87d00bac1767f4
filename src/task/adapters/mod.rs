//! Storage adapters for the task board.
//!
//! - [`memory::InMemoryTaskStore`]: the process-local store backing a board
//!   session.

pub mod memory;
