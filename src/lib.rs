// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::NoteStore)
    clippy::module_name_repetitions
)]

//! # Noteboard
//!
//! A terminal note board.
//!
//! Write a title and some content, press Ctrl-S, and the note appears as
//! a card at the front of the grid. Click (or press Enter on) a card to
//! edit it, click its `[x]` to delete it. Notes live in memory only.
//!
//! ## Architecture
//!
//! Noteboard uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`store`]: The ordered note collection
//! - [`form`]: Draft text buffers and focus
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag files and policies

pub mod app;
pub mod config;
pub mod form;
pub mod store;
pub mod ui;
