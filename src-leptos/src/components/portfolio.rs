//! Portfolio list component

use crate::components::{ProfileImage, ProfileImageSize};
use crate::types::PortfolioItem;
use leptos::prelude::*;

/// Stateless list of portfolio rows.
///
/// One row per item, in input order; rows are keyed by label.
#[component]
pub fn Portfolio(
    /// Items to render
    items: Vec<PortfolioItem>,
    /// Portrait shown beside each row
    #[prop(into)]
    avatar: String,
) -> impl IntoView {
    let is_empty = items.is_empty();

    view! {
        <div class="portfolio-list">
            <For
                each=move || items.clone()
                key=|item| item.label.clone()
                children=move |item| {
                    view! {
                        <div class="portfolio-row">
                            <ProfileImage
                                src=avatar.clone()
                                alt=item.label.clone()
                                size=ProfileImageSize::Small
                            />
                            <div class="portfolio-row__text">
                                <span class="portfolio-row__label">{item.label.clone()}</span>
                                <span class="portfolio-row__description">
                                    {item.description.clone()}
                                </span>
                            </div>
                        </div>
                    }
                }
            />
            <Show when=move || is_empty>
                <p class="empty-text">"No projects yet"</p>
            </Show>
        </div>
    }
}
