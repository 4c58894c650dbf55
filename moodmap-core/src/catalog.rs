//! Bundled sample catalog: tracks plus mood-based playlists.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::types::{Mood, TimeOfDay, Track};

const SAMPLE_JSON: &str = include_str!("../data/catalog.json");

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_image: String,
    /// Mood used for the card's color theme.
    pub mood: Mood,
    pub time_of_day: TimeOfDay,
    /// A track belongs to the playlist when its mood is listed here.
    pub moods: Vec<Mood>,
}

impl Playlist {
    pub fn contains(&self, track: &Track) -> bool {
        self.moods.contains(&track.mood)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        log::debug!(
            "loaded catalog: {} tracks, {} playlists",
            catalog.tracks.len(),
            catalog.playlists.len()
        );
        Ok(catalog)
    }

    /// The bundled sample catalog. Falls back to an empty catalog if the
    /// embedded data fails to parse.
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_JSON).unwrap_or_else(|e| {
            log::warn!("bundled catalog is invalid: {e}");
            Catalog::default()
        })
    }

    pub fn find_track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Tracks in `playlist`, in catalog order.
    pub fn playlist_tracks<'a>(&'a self, playlist: &'a Playlist) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| playlist.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataPoint, Season};

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = Catalog::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(catalog.tracks.len(), 15);
        assert_eq!(catalog.playlists.len(), 5);

        let first = &catalog.tracks[0];
        assert_eq!(first.title, "Blue in Green");
        assert_eq!(first.mood, Mood::Chill);
        assert_eq!(first.coordinates, DataPoint::new(-0.7, -0.5));
        assert_eq!(first.season, Season::Fall);
        assert!(first.preview_url.is_some());
    }

    #[test]
    fn test_sample_coordinates_in_unit_square() {
        for t in Catalog::sample().tracks {
            assert!((-1.0..=1.0).contains(&t.coordinates.x), "{}", t.id);
            assert!((-1.0..=1.0).contains(&t.coordinates.y), "{}", t.id);
            assert!(!matches!(t.mood, Mood::Other(_)), "{}", t.id);
        }
    }

    #[test]
    fn test_find_track() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find_track("10").map(|t| t.title.as_str()), Some("Creep"));
        assert!(catalog.find_track("nope").is_none());
    }

    #[test]
    fn test_playlist_membership() {
        let catalog = Catalog::sample();
        let midnight = catalog.playlist("midnight-flow").unwrap();
        let ids: Vec<&str> = catalog.playlist_tracks(midnight).map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "13", "14", "15"]);

        let sunset = catalog.playlist("sunset-beats").unwrap();
        assert_eq!(sunset.time_of_day, TimeOfDay::Evening);
        assert_eq!(catalog.playlist_tracks(sunset).count(), 3);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(Catalog::from_json("{"), Err(MapError::Catalog(_))));
    }

    #[test]
    fn test_playlists_are_optional() {
        let json = r#"{"tracks":[{"id":"a","title":"T","artist":"A","coordinates":{"x":0,"y":0},"mood":"focus"}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.tracks.len(), 1);
        assert!(catalog.playlists.is_empty());
    }
}
