use std::fmt;
use serde::{Deserialize, Serialize};

/// Point in normalized data space, both axes in [-1, 1].
/// `x` is valence, `y` is energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in data space.
    pub fn distance(self, other: DataPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Point in surface pixel space, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: PixelPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn offset(self, dx: f64, dy: f64) -> PixelPoint {
        PixelPoint::new(self.x + dx, self.y + dy)
    }
}

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Used until the hosting container is first measured.
pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions { width: 800, height: 600 };

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// From an element's client size, as reported by the DOM. Negative
    /// values collapse to zero.
    pub fn from_client(width: i32, height: i32) -> Self {
        Self::new(width.max(0) as u32, height.max(0) as u32)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        DEFAULT_DIMENSIONS
    }
}

// ── Mood ──────────────────────────────────────────────────────────────────────

/// Emotional category of a track.
///
/// Unrecognized keys are kept verbatim in `Other` so they still cluster under
/// their literal name; they render with the fallback color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Chill,
    Energetic,
    Happy,
    Melancholy,
    Focus,
    Other(String),
}

impl Mood {
    /// Canonical iteration order for clustering and tie-breaking.
    pub const CANONICAL: [Mood; 5] = [
        Mood::Chill,
        Mood::Energetic,
        Mood::Happy,
        Mood::Melancholy,
        Mood::Focus,
    ];

    pub fn key(&self) -> &str {
        match self {
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Happy => "happy",
            Mood::Melancholy => "melancholy",
            Mood::Focus => "focus",
            Mood::Other(key) => key,
        }
    }

    /// Capitalized display name, e.g. "Melancholy".
    pub fn label(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Chill => "relaxed, smooth",
            Mood::Energetic => "upbeat, intense",
            Mood::Happy => "uplifting, positive",
            Mood::Melancholy => "reflective, sad",
            Mood::Focus => "instrumental, calm",
            Mood::Other(_) => "",
        }
    }

    /// Position in `CANONICAL`; unrecognized moods sort after all of them.
    pub fn rank(&self) -> usize {
        Mood::CANONICAL
            .iter()
            .position(|m| m == self)
            .unwrap_or(Mood::CANONICAL.len())
    }
}

impl From<String> for Mood {
    fn from(key: String) -> Self {
        match key.as_str() {
            "chill" => Mood::Chill,
            "energetic" => Mood::Energetic,
            "happy" => Mood::Happy,
            "melancholy" => Mood::Melancholy,
            "focus" => Mood::Focus,
            _ => Mood::Other(key),
        }
    }
}

impl From<&str> for Mood {
    fn from(key: &str) -> Self {
        Mood::from(key.to_string())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn key(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn key(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

// ── Track ─────────────────────────────────────────────────────────────────────

/// Audio descriptors shown in the detail panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Beats per minute.
    pub tempo: f64,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
}

/// Tempo bars are drawn as a fraction of this.
pub const TEMPO_SCALE_BPM: f64 = 200.0;

/// One bar in the detail panel: label, fill fraction (0..=1), value text.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub label: &'static str,
    pub fraction: f64,
    pub value: String,
}

impl AudioFeatures {
    pub fn rows(&self) -> Vec<FeatureRow> {
        let pct = |label, v: f64| FeatureRow {
            label,
            fraction: v.clamp(0.0, 1.0),
            value: format!("{}%", (v * 100.0).round() as i64),
        };
        vec![
            FeatureRow {
                label: "Tempo",
                fraction: (self.tempo / TEMPO_SCALE_BPM).clamp(0.0, 1.0),
                value: format!("{} BPM", self.tempo.round() as i64),
            },
            pct("Energy", self.energy),
            pct("Valence", self.valence),
            pct("Danceability", self.danceability),
            pct("Acousticness", self.acousticness),
        ]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Position in data space. Assumed to lie in [-1, 1]²; not clamped.
    pub coordinates: DataPoint,
    pub mood: Mood,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub album_art: String,
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub features: AudioFeatures,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub season: Season,
}

impl Track {
    /// Minimal track with only the fields the map needs.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        coordinates: DataPoint,
        mood: Mood,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            coordinates,
            mood,
            album: String::new(),
            album_art: String::new(),
            year: 0,
            genre: String::new(),
            features: AudioFeatures::default(),
            preview_url: None,
            time_of_day: TimeOfDay::default(),
            season: Season::default(),
        }
    }

    pub fn same_track(&self, other: &Track) -> bool {
        self.id == other.id
    }

    pub fn summary(&self) -> String {
        format!(
            "This {} track is perfect for {} listening during {}.",
            self.mood,
            self.time_of_day.key(),
            self.season.key()
        )
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.same_track(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_round_trips_through_strings() {
        assert_eq!(Mood::from("happy"), Mood::Happy);
        assert_eq!(String::from(Mood::Focus), "focus");
        assert_eq!(Mood::from("ambient"), Mood::Other("ambient".into()));
        assert_eq!(String::from(Mood::Other("ambient".into())), "ambient");
    }

    #[test]
    fn test_mood_label_capitalizes() {
        assert_eq!(Mood::Melancholy.label(), "Melancholy");
        assert_eq!(Mood::Other("lofi".into()).label(), "Lofi");
        assert_eq!(Mood::Other(String::new()).label(), "");
    }

    #[test]
    fn test_dimensions_from_client_size() {
        assert_eq!(Dimensions::from_client(640, 600), Dimensions::new(640, 600));
        assert_eq!(Dimensions::from_client(-4, 600), Dimensions::new(0, 600));
        assert!(Dimensions::from_client(0, 600).is_degenerate());
    }

    #[test]
    fn test_unknown_mood_ranks_last() {
        assert_eq!(Mood::Chill.rank(), 0);
        assert_eq!(Mood::Focus.rank(), 4);
        assert_eq!(Mood::Other("x".into()).rank(), 5);
    }

    #[test]
    fn test_track_deserializes_with_missing_metadata() {
        let json = r#"{"id":"a","title":"T","artist":"A","coordinates":{"x":0.5,"y":-0.25},"mood":"chill"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.mood, Mood::Chill);
        assert_eq!(track.coordinates, DataPoint::new(0.5, -0.25));
        assert!(track.preview_url.is_none());
        assert_eq!(track.year, 0);
    }

    #[test]
    fn test_feature_rows() {
        let features = AudioFeatures {
            tempo: 100.0,
            energy: 0.25,
            valence: 0.5,
            danceability: 1.0,
            acousticness: 0.0,
            instrumentalness: 0.3,
        };
        let rows = features.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].value, "100 BPM");
        assert!((rows[0].fraction - 0.5).abs() < 1e-12);
        assert_eq!(rows[1].value, "25%");
        assert_eq!(rows[3].label, "Danceability");
    }

    #[test]
    fn test_default_dimensions() {
        assert_eq!(Dimensions::default(), Dimensions::new(800, 600));
        assert!(Dimensions::new(0, 600).is_degenerate());
        assert!(!Dimensions::new(1, 1).is_degenerate());
    }
}
