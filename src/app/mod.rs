//! App layer - central state management and action dispatch
//!
//! The App actor receives UI events and actions emitted by coordinators,
//! reduces them into state, publishes the new state to the saga runtime
//! and emits render state.

pub mod actor;
pub mod reducer;
pub mod state;

pub use actor::{startup_actions, AppActor};
pub use state::AppState;
