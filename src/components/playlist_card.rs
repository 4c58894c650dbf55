use leptos::prelude::*;
use moodmap_core::color::mood_color;
use moodmap_core::types::TimeOfDay;
use crate::state::AppState;

fn time_badge_class(time: TimeOfDay) -> &'static str {
    match time {
        TimeOfDay::Morning => "time-badge morning",
        TimeOfDay::Afternoon => "time-badge afternoon",
        TimeOfDay::Evening => "time-badge evening",
        TimeOfDay::Night => "time-badge night",
    }
}

#[component]
pub fn PlaylistCard(playlist_id: String) -> impl IntoView {
    let state = expect_context::<AppState>();
    let found = state.catalog.with_value(|c| {
        c.playlist(&playlist_id).map(|p| {
            let first = c.playlist_tracks(p).next().map(|t| t.id.clone());
            let count = c.playlist_tracks(p).count();
            (p.clone(), count, first)
        })
    });
    let Some((playlist, count, first_track)) = found else {
        log::warn!("unknown playlist {playlist_id}");
        return ().into_any();
    };

    let tint = mood_color(&playlist.mood);
    let style = format!(
        "background: linear-gradient(to bottom, {}, {}); border-color: {};",
        tint.with_alpha(0.5).to_css(),
        tint.with_alpha(0.1).to_css(),
        tint.with_alpha(0.3).to_css(),
    );

    let on_explore = move |_| {
        if let Some(id) = &first_track {
            state.select_track_by_id(id);
        }
    };

    view! {
        <div class="playlist-card" style=style>
            <div class="playlist-cover">
                <img src=playlist.cover_image.clone() alt=playlist.name.clone() />
                <span class=time_badge_class(playlist.time_of_day)>{playlist.time_of_day.key()}</span>
            </div>
            <div class="playlist-name">{playlist.name.clone()}</div>
            <div class="playlist-description">{playlist.description.clone()}</div>
            <div class="playlist-count">{format!("{count} tracks")}</div>
            <button class="playlist-explore" on:click=on_explore>"Explore Playlist"</button>
        </div>
    }
    .into_any()
}
