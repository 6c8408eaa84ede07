//! Shared types re-exported from bizcard-types crate

pub use bizcard_types::models::{CardViewState, PortfolioItem, Profile};
