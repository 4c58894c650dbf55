use leptos::prelude::*;
use moodmap_core::types::Track;
use crate::components::mood_legend::MoodLegend;
use crate::components::mood_map::MoodMap;
use crate::components::playlist_card::PlaylistCard;
use crate::components::track_detail::TrackDetail;
use crate::state::{AppState, Tab};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    let tab_class = move |tab: Tab| {
        if state.active_tab.get() == tab { "tab active" } else { "tab" }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Music Mood Map"</h1>
                <p>"Explore music through the lens of emotion and data"</p>
            </header>
            <nav class="tabs">
                <button class=move || tab_class(Tab::Map)
                    on:click=move |_| state.active_tab.set(Tab::Map)
                >"Mood Map"</button>
                <button class=move || tab_class(Tab::Playlists)
                    on:click=move |_| state.active_tab.set(Tab::Playlists)
                >"Playlists"</button>
            </nav>
            <main>
                {move || match state.active_tab.get() {
                    Tab::Map => view! { <MapTab /> }.into_any(),
                    Tab::Playlists => view! { <PlaylistsTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn MapTab() -> impl IntoView {
    let state = expect_context::<AppState>();
    let on_select = Callback::new(move |track: Track| state.select_track(track));
    let has_selection = move || state.selected_track.with(|t| t.is_some());

    view! {
        <div class=move || if has_selection() { "map-layout with-detail" } else { "map-layout" }>
            <section class="map-area">
                <h2>"Visual Music Mood Map"</h2>
                <p class="muted">
                    "Each point is a track positioned by its emotional qualities. Click on any point to discover more."
                </p>
                <MoodMap
                    tracks=state.tracks
                    selected=state.selected_track
                    on_select=on_select
                />
            </section>
            {move || state.selected_track.get().map(|track| view! {
                <aside class="detail-area">
                    <h2>"Track Details"</h2>
                    <TrackDetail track=track />
                </aside>
            })}
        </div>
        <section class="map-help">
            <h2>"Understanding the Music Mood Map"</h2>
            <p class="muted">
                "Horizontal axis: valence (musical positiveness), from melancholy on the left to joyful on the right. "
                "Vertical axis: energy level, from calm to energetic."
            </p>
            <MoodLegend />
        </section>
    }
}

#[component]
fn PlaylistsTab() -> impl IntoView {
    let state = expect_context::<AppState>();
    let ids: Vec<String> = state
        .catalog
        .with_value(|c| c.playlists.iter().map(|p| p.id.clone()).collect());

    view! {
        <h2>"Curated Mood Playlists"</h2>
        <div class="playlist-grid">
            {ids.into_iter().map(|id| view! { <PlaylistCard playlist_id=id /> }).collect_view()}
        </div>
    }
}
