//! Content-based movie recommendation lookup service.
//!
//! A precomputed similarity matrix and a movie metadata table are loaded once
//! at startup into an [`assets::AssetStore`]; requests resolve titles against
//! it, rank similar movies and offer fuzzy suggestions for unknown titles.

pub mod assets;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
