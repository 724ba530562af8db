//! Duet Match - compatibility scoring and candidate ranking for the Duet dating app.
//!
//! Given a requesting user's profile and a set of candidate profiles, the
//! engine filters candidates to those mutually eligible under both sides'
//! preferences, scores each survivor on music taste, shared interests and
//! geographic proximity, and returns them sorted by descending overall
//! compatibility.
//!
//! The engine is a pure, synchronous library: it performs no I/O, holds no
//! state between calls, and never mutates its inputs. The surrounding
//! application loads profiles, calls [`find_potential_matches`], and decides
//! what to do with the ranked results.

pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    calculate_compatibility, find_potential_matches, haversine_distance_km, Matcher,
};
pub use crate::error::MatchError;
pub use crate::models::{
    CompatibilityScore, Location, LookingFor, MusicProfile, Preferences, Profile, RankedMatch,
    ScoringWeights,
};
