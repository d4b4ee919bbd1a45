//! Saga layer - effect coordinators
//!
//! A coordinator is an async function bound to one triggering action type. It
//! reads state through a [`SagaContext`], calls the external APIs and emits
//! follow-up actions. The [`SagaRuntime`] spawns one task per triggering action.

pub mod bet;
pub mod context;
pub mod event;
pub mod outcome;
pub mod registry;
pub mod runtime;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::SagaContext;
pub use outcome::{settle, SagaOutcome};
pub use registry::{Registry, SagaError};
pub use runtime::SagaRuntime;
