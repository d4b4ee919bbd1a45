//! # Wagerdesk
//!
//! A terminal front-end for a betting / prediction-market REST API.
//!
//! ## Features
//! - Event listings with category and text filters
//! - Per-bet history charts, outcome prices, placing and pulling out of bets
//! - Trade history and open positions
//! - News ticker and the Elon game promo
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer - owns the state and reduces every action
//! - Saga Layer (Tokio runtime) - effect coordinators reacting to actions

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod sagas;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::{Config, EmptyResponsePolicy};
pub use messages::{Action, ActionCreator, RenderState, UiEvent};
pub use models::{Bet, Event, NewsArticle, Trade, User};
pub use network::{ApiError, HttpApi, MarketApi, NewsClient, NewsProvider};
pub use sagas::{Registry, SagaContext, SagaOutcome, SagaRuntime};
