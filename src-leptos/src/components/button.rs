//! Button component with variants

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Ghost => "btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    /// Button text content
    #[prop(into)]
    text: String,
    /// Button variant
    #[prop(optional)]
    variant: ButtonVariant,
    /// Whether button is disabled
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    /// Click handler
    on_click: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let variant_class = variant.class();

    view! {
        <button
            class=format!("btn {} {}", variant_class, class)
            disabled=disabled
            on:click=move |_| on_click()
        >
            {text}
        </button>
    }
}
