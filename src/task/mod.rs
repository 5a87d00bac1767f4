//! Task board: tasks moving across the `todo`, `in-progress` and `done`
//! columns.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, validation and projections in [`domain`]
//! - The store contract in [`ports`]
//! - The in-memory store in [`adapters`]
//! - Command handlers and feedback values in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
