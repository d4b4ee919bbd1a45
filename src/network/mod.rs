//! Network layer - clients for the betting REST API and the news provider
//!
//! Sagas talk to these through the [`MarketApi`] and [`NewsProvider`] traits.

pub mod api;
pub mod client;
pub mod error;
pub mod news;

pub use api::{ApiResult, MarketApi, NewsProvider, QueryParams};
pub use client::{create_client, HttpApi};
pub use error::ApiError;
pub use news::NewsClient;
