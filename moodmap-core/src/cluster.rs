//! Groups tracks by mood and derives each group's centroid and halo radius.
//!
//! The centroid is averaged in data space so it does not depend on the surface
//! size. The radius is measured in pixels: the farthest member's on-screen
//! distance from the centroid plus a fixed pixel margin.

use crate::coords::to_pixel;
use crate::types::{DataPoint, Dimensions, Mood, PixelPoint, Track};

/// Pixel margin added around the farthest member.
pub const CLUSTER_PADDING: f64 = 40.0;

#[derive(Clone, Debug)]
pub struct Cluster<'a> {
    pub mood: Mood,
    /// Input order, filtered by mood.
    pub members: Vec<&'a Track>,
    pub centroid: DataPoint,
    /// Halo radius in pixels, always >= `CLUSTER_PADDING`.
    pub radius: f64,
}

impl Cluster<'_> {
    pub fn pixel_centroid(&self, dims: Dimensions) -> PixelPoint {
        to_pixel(self.centroid, dims)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Moods to cluster, in drawing order: the canonical five first, then any
/// unrecognized moods in the order they first appear.
fn mood_order(tracks: &[Track]) -> Vec<Mood> {
    let mut order: Vec<Mood> = Mood::CANONICAL.to_vec();
    for track in tracks {
        if let Mood::Other(_) = track.mood {
            if !order.contains(&track.mood) {
                order.push(track.mood.clone());
            }
        }
    }
    order
}

fn build_cluster<'a>(mood: Mood, members: Vec<&'a Track>, dims: Dimensions) -> Cluster<'a> {
    let n = members.len() as f64;
    let (sum_x, sum_y) = members
        .iter()
        .fold((0.0, 0.0), |(sx, sy), t| (sx + t.coordinates.x, sy + t.coordinates.y));
    let centroid = DataPoint::new(sum_x / n, sum_y / n);

    let center_px = to_pixel(centroid, dims);
    let spread = members
        .iter()
        .map(|t| to_pixel(t.coordinates, dims).distance(center_px))
        .fold(0.0f64, f64::max);

    Cluster {
        mood,
        members,
        centroid,
        radius: spread + CLUSTER_PADDING,
    }
}

/// Cluster `tracks` for a surface of size `dims`. Moods without members are
/// omitted.
pub fn aggregate(tracks: &[Track], dims: Dimensions) -> Vec<Cluster<'_>> {
    mood_order(tracks)
        .into_iter()
        .filter_map(|mood| {
            let members: Vec<&Track> = tracks.iter().filter(|t| t.mood == mood).collect();
            if members.is_empty() {
                return None;
            }
            Some(build_cluster(mood, members, dims))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, x: f64, y: f64, mood: Mood) -> Track {
        Track::new(id, id, "artist", DataPoint::new(x, y), mood)
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[], Dimensions::new(800, 600)).is_empty());
    }

    #[test]
    fn test_centroid_and_radius() {
        let tracks = vec![
            track("a", 0.0, 0.0, Mood::Happy),
            track("b", 0.1, 0.0, Mood::Happy),
        ];
        let dims = Dimensions::new(800, 600);
        let clusters = aggregate(&tracks, dims);
        assert_eq!(clusters.len(), 1);

        let c = &clusters[0];
        assert!((c.centroid.x - 0.05).abs() < 1e-12);
        assert!(c.centroid.y.abs() < 1e-12);

        // Members land at x = 400 and 440, the centroid at 420.
        let center = c.pixel_centroid(dims);
        let farthest = tracks
            .iter()
            .map(|t| to_pixel(t.coordinates, dims).distance(center))
            .fold(0.0, f64::max);
        assert!((farthest - 20.0).abs() < 1e-9);
        assert!((c.radius - (farthest + CLUSTER_PADDING)).abs() < 1e-9);
    }

    #[test]
    fn test_single_member_radius_is_padding() {
        let tracks = vec![track("a", 0.3, -0.6, Mood::Focus)];
        let clusters = aggregate(&tracks, Dimensions::new(800, 600));
        assert_eq!(clusters[0].radius, CLUSTER_PADDING);
        assert_eq!(clusters[0].centroid, DataPoint::new(0.3, -0.6));
    }

    #[test]
    fn test_canonical_order_and_member_order() {
        let tracks = vec![
            track("f1", 0.0, 0.0, Mood::Focus),
            track("c1", 0.1, 0.1, Mood::Chill),
            track("f2", 0.2, 0.2, Mood::Focus),
            track("h1", 0.3, 0.3, Mood::Happy),
            track("c2", 0.4, 0.4, Mood::Chill),
        ];
        let clusters = aggregate(&tracks, Dimensions::new(800, 600));
        let moods: Vec<&Mood> = clusters.iter().map(|c| &c.mood).collect();
        assert_eq!(moods, vec![&Mood::Chill, &Mood::Happy, &Mood::Focus]);

        let chill_ids: Vec<&str> = clusters[0].members.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(chill_ids, vec!["c1", "c2"]);
        let focus_ids: Vec<&str> = clusters[2].members.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(focus_ids, vec!["f1", "f2"]);
    }

    #[test]
    fn test_unrecognized_mood_keeps_literal_key() {
        let tracks = vec![
            track("x", 0.0, 0.0, Mood::from("dreamy")),
            track("c", 0.5, 0.5, Mood::Chill),
            track("y", 0.2, 0.0, Mood::from("dreamy")),
        ];
        let clusters = aggregate(&tracks, Dimensions::new(800, 600));
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].mood, Mood::Chill);
        assert_eq!(clusters[1].mood.key(), "dreamy");
        assert_eq!(clusters[1].len(), 2);
    }

    #[test]
    fn test_radius_rescales_with_surface() {
        let tracks = vec![
            track("a", -0.5, -0.5, Mood::Chill),
            track("b", 0.5, 0.5, Mood::Chill),
        ];
        let big = aggregate(&tracks, Dimensions::new(800, 600));
        let small = aggregate(&tracks, Dimensions::new(400, 300));
        assert_eq!(big[0].centroid, small[0].centroid);

        let big_spread = big[0].radius - CLUSTER_PADDING;
        let small_spread = small[0].radius - CLUSTER_PADDING;
        assert!((big_spread - 2.0 * small_spread).abs() < 1e-9);
    }
}
