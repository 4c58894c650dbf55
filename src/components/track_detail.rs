use leptos::prelude::*;
use moodmap_core::color::mood_color;
use moodmap_core::types::Track;
use crate::state::AppState;

#[component]
pub fn TrackDetail(track: Track) -> impl IntoView {
    let state = expect_context::<AppState>();
    let accent = mood_color(&track.mood).to_css();
    let summary = track.summary();
    let has_preview = track.preview_url.is_some();

    let bars = track.features.rows().into_iter().map(|row| {
        let fill = format!("width: {:.1}%; background: {};", row.fraction * 100.0, accent);
        view! {
            <div class="feature-row">
                <div class="feature-row-head">
                    <span>{row.label}</span>
                    <span>{row.value}</span>
                </div>
                <div class="feature-bar">
                    <div class="feature-bar-fill" style=fill></div>
                </div>
            </div>
        }
    }).collect_view();

    view! {
        <div class="track-detail">
            <div class="track-detail-head">
                <div>
                    <div class="track-detail-title">{track.title.clone()}</div>
                    <div class="track-detail-artist">{track.artist.clone()}</div>
                </div>
                <button
                    class="track-detail-close"
                    title="Close"
                    on:click=move |_| state.clear_selection()
                >"✕"</button>
            </div>

            <div class="track-detail-meta">
                <img class="track-detail-art" src=track.album_art.clone() alt=track.album.clone() />
                <div>
                    <p>"Album: "{track.album.clone()}</p>
                    <p>"Year: "{track.year}</p>
                    <p>"Genre: "{track.genre.clone()}</p>
                    <div class="badges">
                        <span class="mood-badge" style=format!("background: {};", accent)>
                            {track.mood.key().to_string()}
                        </span>
                        <span class="badge-outline">{track.time_of_day.key()}</span>
                        <span class="badge-outline">{track.season.key()}</span>
                    </div>
                </div>
            </div>

            {has_preview.then(|| view! { <p class="track-detail-preview">"Preview available"</p> })}

            <div class="feature-rows">{bars}</div>

            <p class="track-detail-summary">{summary}</p>
        </div>
    }
}
