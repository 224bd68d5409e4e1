//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{BoardPolicy, FormMode, Model};
pub use update::{Message, update};

use crate::store::IdPolicy;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Default)]
pub struct App {
    id_policy: IdPolicy,
    policy: BoardPolicy,
}

impl App {
    /// Create an application with default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how new notes get their ids.
    pub const fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    /// Set save-validation and delete-while-editing behavior.
    pub const fn with_policy(mut self, policy: BoardPolicy) -> Self {
        self.policy = policy;
        self
    }
}
