//! Application layer coordinating state, events, and actions.
//!
//! This module is the search coordinator: it sits between the plugin runtime
//! (`main.rs`) and the catalog/UI layers, owning the submitted query, the
//! current page, and the selected movie, and deriving every display flag the
//! renderer consumes.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Settled Fetch Outcomes ──────┘
//! ```
//!
//! Fetch actions emitted here are executed by the runtime shim; their settled
//! outcomes come back as events carrying the request they answer, so the
//! handler can discard results a newer request has superseded.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and search lifecycle phase types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, NO_RESULTS_NOTICE};
pub use modes::{InputMode, SearchPhase};
pub use state::AppState;
