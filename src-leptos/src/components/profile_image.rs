//! Circular framed portrait component

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ProfileImageSize {
    /// Card header portrait
    #[default]
    Large,
    /// Portfolio row portrait
    Small,
}

impl ProfileImageSize {
    pub fn class(&self) -> &'static str {
        match self {
            ProfileImageSize::Large => "profile-image--lg",
            ProfileImageSize::Small => "profile-image--sm",
        }
    }
}

#[component]
pub fn ProfileImage(
    /// Asset path of the portrait
    #[prop(into)]
    src: String,
    /// Alt text for the portrait
    #[prop(into)]
    alt: String,
    /// Frame size variant
    #[prop(optional)]
    size: ProfileImageSize,
) -> impl IntoView {
    // A missing asset falls back to the browser's broken-image rendering
    // plus the alt text; nothing to handle here.
    view! {
        <div class=format!("profile-image {}", size.class())>
            <img class="profile-image__photo" src=src alt=alt />
        </div>
    }
}
