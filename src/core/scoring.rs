use std::collections::HashSet;

use crate::core::distance::haversine_distance_km;
use crate::models::{CompatibilityScore, Profile, ScoringWeights};

/// Music sub-weights: artists and genres dominate, tracks are a tiebreaker.
const ARTISTS_WEIGHT: f64 = 0.4;
const GENRES_WEIGHT: f64 = 0.4;
const TRACKS_WEIGHT: f64 = 0.2;

/// Jaccard similarity of two label sets: |intersection| / |union| over the
/// distinct labels. Order and duplicates are irrelevant; 0.0 when either
/// side is empty.
pub fn set_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

/// Music-taste similarity in [0, 100], unrounded.
///
/// 0.0 when either profile has no linked music data; no partial credit is
/// imputed.
pub fn music_score(a: &Profile, b: &Profile) -> f64 {
    let (ma, mb) = match (&a.music, &b.music) {
        (Some(ma), Some(mb)) => (ma, mb),
        _ => return 0.0,
    };

    let artists = set_similarity(&ma.top_artists, &mb.top_artists);
    let genres = set_similarity(&ma.top_genres, &mb.top_genres);
    let tracks = set_similarity(&ma.top_tracks, &mb.top_tracks);

    (artists * ARTISTS_WEIGHT + genres * GENRES_WEIGHT + tracks * TRACKS_WEIGHT) * 100.0
}

/// Shared-interest similarity in [0, 100], unrounded.
pub fn interest_score(a: &Profile, b: &Profile) -> f64 {
    set_similarity(&a.interests, &b.interests) * 100.0
}

/// Proximity score in [0, 100], unrounded. Linear falloff: 100 at zero
/// distance, 0 at the larger of the two profiles' maximum distances and
/// beyond. A non-positive maximum distance scores 0 rather than dividing
/// by zero.
pub fn location_score(a: &Profile, b: &Profile) -> f64 {
    let max_distance = a
        .preferences
        .max_distance_km
        .max(b.preferences.max_distance_km);
    if max_distance <= 0.0 {
        return 0.0;
    }

    let distance = haversine_distance_km(&a.location, &b.location);
    if distance > max_distance {
        return 0.0;
    }

    ((1.0 - distance / max_distance) * 100.0).max(0.0)
}

/// Combine the per-axis scores with the given weights and round each field
/// to an integer in [0, 100]. This is the only place rounding happens;
/// `overall` is computed from the unrounded components.
pub fn calculate_compatibility_with(
    a: &Profile,
    b: &Profile,
    weights: &ScoringWeights,
) -> CompatibilityScore {
    let music = music_score(a, b);
    let interests = interest_score(a, b);
    let location = location_score(a, b);

    let overall =
        music * weights.music + interests * weights.interests + location * weights.location;

    CompatibilityScore {
        overall: round_score(overall),
        music: round_score(music),
        interests: round_score(interests),
        location: round_score(location),
    }
}

/// Compatibility with the production weights: music 0.35, interests 0.35,
/// location 0.30.
pub fn calculate_compatibility(a: &Profile, b: &Profile) -> CompatibilityScore {
    calculate_compatibility_with(a, b, &ScoringWeights::default())
}

#[inline]
fn round_score(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}
