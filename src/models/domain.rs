use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::MatchError;

/// Geographic position in decimal degrees, plus optional display fields
/// carried through from the profile store. Scoring reads only the coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Linked music-streaming data. Absent when the user has not connected
/// a streaming account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicProfile {
    #[serde(rename = "topArtists", default)]
    pub top_artists: Vec<String>,
    #[serde(rename = "topGenres", default)]
    pub top_genres: Vec<String>,
    #[serde(rename = "topTracks", default)]
    pub top_tracks: Vec<String>,
}

/// What the user is looking for on the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookingFor {
    Dating,
    Friends,
    Both,
}

/// Matching preferences attached to a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Preferences {
    /// Inclusive [min, max] acceptable candidate age.
    #[serde(rename = "ageRange")]
    pub age_range: (u8, u8),
    /// Maximum acceptable distance in kilometers.
    #[serde(rename = "maxDistance")]
    #[validate(range(min = 0.0))]
    pub max_distance_km: f64,
    /// Gender labels the user is interested in. Empty means no one matches.
    #[serde(rename = "interestedIn", default)]
    pub interested_in: Vec<String>,
    #[serde(rename = "lookingFor")]
    pub looking_for: LookingFor,
}

/// A user profile as supplied by the persistence layer.
///
/// `gender` is an open label, compared only by set membership against
/// `interested_in` lists. Fields like `name`, `bio` and `photos` pass
/// through the engine untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[validate(range(min = 13, max = 120))]
    pub age: u8,
    pub gender: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub location: Location,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, alias = "spotify")]
    pub music: Option<MusicProfile>,
    pub preferences: Preferences,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    /// Check the profile against the documented data shape.
    ///
    /// The raw scoring functions assume well-formed input; the `Matcher`
    /// entry points call this so malformed rows surface as a typed
    /// `InvalidProfile` error instead of a nonsense score.
    pub fn ensure_valid(&self) -> Result<(), MatchError> {
        self.validate()
            .and_then(|_| self.preferences.validate())
            .map_err(|e| self.invalid(e.to_string()))?;

        let (min_age, max_age) = self.preferences.age_range;
        if min_age > max_age {
            return Err(self.invalid("age range minimum exceeds maximum".to_string()));
        }

        // Rejects NaN as well: range containment is false for NaN.
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(self.invalid(format!(
                "latitude {} out of range",
                self.location.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(self.invalid(format!(
                "longitude {} out of range",
                self.location.longitude
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> MatchError {
        MatchError::InvalidProfile {
            id: self.id.clone(),
            reason,
        }
    }
}

/// Per-axis compatibility scores, each rounded to an integer in [0, 100].
///
/// `overall` is always the weighted combination of the other three,
/// computed before rounding. Results live only for the ranking pass that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: u8,
    pub music: u8,
    pub interests: u8,
    pub location: u8,
}

/// A candidate profile with its compatibility scores attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub profile: Profile,
    pub compatibility: CompatibilityScore,
}

/// Weights for combining the per-axis scores into `overall`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub music: f64,
    pub interests: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            music: 0.35,
            interests: 0.35,
            location: 0.30,
        }
    }
}
