//! Link button used across the site.

use leptos::prelude::*;

/// Button scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Tiny,
    Small,
    #[default]
    Regular,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            Self::Tiny => "button-tiny",
            Self::Small => "button-small",
            Self::Regular => "button-regular",
        }
    }
}

/// Which side the inline icon sits on; controls the hover nudge direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSide {
    Left,
    #[default]
    Right,
}

impl IconSide {
    fn class(&self) -> &'static str {
        match self {
            Self::Left => "icon-left",
            Self::Right => "icon-right",
        }
    }
}

fn button_class(size: ButtonSize, icon: IconSide) -> String {
    format!("button {} {}", size.class(), icon.class())
}

/// An anchor styled as a button. External links open in a new tab.
#[component]
pub fn Button(
    /// Link target.
    #[prop(into)]
    href: String,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] icon: IconSide,
    /// Whether `href` leaves the site.
    #[prop(optional)]
    external: bool,
    #[prop(optional, into)] rel: Option<String>,
    children: Children,
) -> impl IntoView {
    let target = external.then_some("_blank");
    let rel = rel.or_else(|| external.then(|| "noopener noreferrer".to_string()));

    view! {
      <a class=button_class(size, icon) href=href target=target rel=rel>
        {children()}
      </a>
    }
}
