//! # BizCard Types
//!
//! Core models and view-state logic for the BizCard app.
//!
//! - **`models`** - Domain models (Profile, PortfolioItem, CardViewState)
//!
//! ## Architecture Role
//!
//! `bizcard-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     bizcard-types (this crate)
//!             │
//!             ▼
//!     bizcard-leptos (frontend)
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for embedding and export
//! - **Clone** for cheap sharing into reactive closures
//! - **PartialEq** for testing and comparison

pub mod models;

// Re-export core model types
pub use models::{CardViewState, PortfolioItem, Profile};
