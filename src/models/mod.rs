// Model exports
pub mod domain;

pub use domain::{
    CompatibilityScore, Location, LookingFor, MusicProfile, Preferences, Profile, RankedMatch,
    ScoringWeights,
};
