//! Core domain models for BizCard.
//!
//! This module contains the data structures shared across the BizCard app.

mod portfolio;
mod profile;
mod view_state;

// Re-export all models
pub use portfolio::{PortfolioItem, ITEM_DESCRIPTION};
pub use profile::{Profile, DEFAULT_AVATAR};
pub use view_state::CardViewState;
