//! Taskboard: a single-user kanban task board core.
//!
//! This crate holds the state and rules behind a three-column task board:
//! creating, editing, deleting and moving tasks, validating submissions, and
//! projecting the collection into columns. Rendering is left to the caller,
//! which receives plain data and [`Notification`] values to display.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task model, store, and board commands
//!
//! [`Notification`]: task::services::Notification

pub mod task;
