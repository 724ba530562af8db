// Core algorithm exports
pub mod distance;
pub mod eligibility;
pub mod matcher;
pub mod scoring;

pub use distance::haversine_distance_km;
pub use eligibility::is_eligible;
pub use matcher::{calculate_compatibility, find_potential_matches, Matcher};
pub use scoring::{interest_score, location_score, music_score, set_similarity};
