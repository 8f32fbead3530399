use crate::shared::icons::icon;
use crate::shared::number_format::{format_change_caption, NOT_AVAILABLE};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Formatted primary value (None = not computable)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Change % relative to the previous quarter
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let change_view = move || {
        let pct = change_percent.get();
        let cls = match pct {
            Some(p) if p > 0.0 => "stat-card__change stat-card__change--up",
            Some(p) if p < 0.0 => "stat-card__change stat-card__change--down",
            _ => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=cls>{format_change_caption(pct)}</span> }
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
            </div>
        </div>
    }
}
