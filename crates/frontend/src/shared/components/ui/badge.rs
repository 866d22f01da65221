use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Active / suspended marker for an account
#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    let (color, label) = if active {
        (BadgeColor::Success, "Activa")
    } else {
        (BadgeColor::Danger, "Suspendida")
    };

    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}
