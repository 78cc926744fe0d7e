use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pill badge; `variant` picks the colour set ("accent" or neutral).
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "accent" => "bg-accent-500/20 text-accent-300 border border-accent-400/30",
        _ => "bg-slate-700 text-slate-300 border border-slate-600",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!(
            "inline-flex items-center px-2 py-1 rounded-full text-xs font-medium {} {}",
            variant_class(),
            additional_class(),
        )>
            {children()}
        </span>
    }
}

/// Star badge next to a featured project's name. Its `inline-flex
/// items-center` classes are what the markup fallback recognizes.
#[component]
pub fn FeaturedBadge() -> impl IntoView {
    view! {
        <Badge variant="accent" class="featured ml-2 animate-pulse">
            {icon("star")}
            "Featured"
        </Badge>
    }
}
