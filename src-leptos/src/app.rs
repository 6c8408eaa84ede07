//! Main App component

use crate::pages::CardPage;
use crate::types::{PortfolioItem, Profile};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

/// Global application state
///
/// Plain data, not signals: everything here is a compile-time literal and
/// never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub profile: Profile,
    pub portfolio: Vec<PortfolioItem>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            profile: Profile::new("Stanislav Kniazev", "UI Engineer", "Stasvitalich"),
            portfolio: ["Project1", "Project2", "Project3", "Project 4"]
                .into_iter()
                .map(PortfolioItem::new)
                .collect(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Create global state
    let state = AppState::new();
    let title = state.profile.name.clone();
    provide_context(state);

    view! {
        <Title text=title />
        <div class="app-container">
            <main class="main-content">
                <CardPage />
            </main>
        </div>
    }
}
