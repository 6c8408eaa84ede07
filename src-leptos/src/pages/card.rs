//! Business card page

use crate::app::AppState;
use crate::components::{Button, ButtonVariant, Portfolio, ProfileImage};
use crate::formatters::{avatar_alt, format_handle};
use crate::types::CardViewState;
use leptos::prelude::*;

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn CardPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // The only view state: whether the portfolio section is mounted
    let view_state = RwSignal::new(CardViewState::default());

    let profile = state.profile;
    let items = state.portfolio;
    let portrait_alt = avatar_alt(&profile.name);
    let handle = format_handle(&profile.handle);
    let row_avatar = profile.avatar.clone();

    view! {
        <div class="page card-page">
            <div class="biz-card">
                <ProfileImage src=profile.avatar.clone() alt=portrait_alt />

                <div class="divider"></div>

                <div class="biz-card__info">
                    <h1 class="biz-card__name">{profile.name.clone()}</h1>
                    <p class="biz-card__title">{profile.title.clone()}</p>
                    <p class="biz-card__handle">{handle}</p>
                </div>

                <Button
                    text="Portfolio"
                    variant=ButtonVariant::Primary
                    on_click=move || view_state.update(|s| s.toggle())
                />

                // Mounted, not hidden: collapsed state renders no portfolio
                // subtree at all
                <Show when=move || view_state.get().portfolio_mounted()>
                    <div class="portfolio-surface">
                        <Portfolio items=items.clone() avatar=row_avatar.clone() />
                    </div>
                </Show>

                <span class="version">{format!("v{}", VERSION)}</span>
            </div>
        </div>
    }
}
