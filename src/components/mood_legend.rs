use leptos::prelude::*;
use moodmap_core::color::mood_color;
use moodmap_core::types::Mood;

/// Color key for the five mood clusters.
#[component]
pub fn MoodLegend() -> impl IntoView {
    view! {
        <div class="mood-legend">
            {Mood::CANONICAL.iter().map(|mood| {
                let swatch = format!("background: {};", mood_color(mood).to_css());
                view! {
                    <div class="mood-legend-item">
                        <span class="mood-swatch" style=swatch></span>
                        <span>{format!("{} - {}", mood.label(), mood.description())}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
