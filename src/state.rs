use std::sync::Arc;
use leptos::prelude::*;
use moodmap_core::catalog::Catalog;
use moodmap_core::types::Track;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Map,
    Playlists,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: StoredValue<Catalog>,
    /// Replaced wholesale when the list changes; the map resets its hover
    /// state whenever this `Arc` changes identity.
    pub tracks: RwSignal<Arc<Vec<Track>>>,
    /// Owned here, not by the map.
    pub selected_track: RwSignal<Option<Track>>,
    pub active_tab: RwSignal<Tab>,
}

impl AppState {
    pub fn new() -> Self {
        let catalog = Catalog::sample();
        let tracks = Arc::new(catalog.tracks.clone());
        Self {
            catalog: StoredValue::new(catalog),
            tracks: RwSignal::new(tracks),
            selected_track: RwSignal::new(None),
            active_tab: RwSignal::new(Tab::Map),
        }
    }

    pub fn select_track(&self, track: Track) {
        log::info!("selected \"{}\" by {}", track.title, track.artist);
        self.selected_track.set(Some(track));
    }

    pub fn clear_selection(&self) {
        self.selected_track.set(None);
    }

    /// Select a catalog track by id and bring the map into view.
    pub fn select_track_by_id(&self, id: &str) {
        let found = self.catalog.with_value(|c| c.find_track(id).cloned());
        match found {
            Some(track) => {
                self.select_track(track);
                self.active_tab.set(Tab::Map);
            }
            None => log::warn!("no track with id {id}"),
        }
    }
}
