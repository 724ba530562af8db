use tracing::{debug, warn};

use crate::core::eligibility::is_eligible;
use crate::core::scoring::calculate_compatibility_with;
use crate::error::MatchError;
use crate::models::{CompatibilityScore, Profile, RankedMatch, ScoringWeights};

/// Ranking pipeline: validate, filter by mutual eligibility, score, sort.
///
/// The matcher holds only the scoring weights; every call is independent
/// and side-effect free, so a single instance may be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single pair after validating both profiles.
    pub fn calculate_compatibility(
        &self,
        a: &Profile,
        b: &Profile,
    ) -> Result<CompatibilityScore, MatchError> {
        a.ensure_valid()?;
        b.ensure_valid()?;

        Ok(calculate_compatibility_with(a, b, &self.weights))
    }

    /// Rank `candidates` for `current`.
    ///
    /// The current profile must be well formed; a malformed current profile
    /// fails the whole call. Malformed candidates are skipped with a warning
    /// so one bad row from the store cannot sink the pass. The candidate
    /// matching `current.id` is always excluded.
    ///
    /// Results are sorted by descending overall score; ties are broken by
    /// candidate id ascending, so output order is deterministic and callers
    /// may rely on it.
    pub fn find_potential_matches(
        &self,
        current: &Profile,
        candidates: &[Profile],
    ) -> Result<Vec<RankedMatch>, MatchError> {
        current.ensure_valid()?;

        let total_candidates = candidates.len();

        let mut matches: Vec<RankedMatch> = candidates
            .iter()
            .filter(|candidate| candidate.id != current.id)
            .filter(|candidate| match candidate.ensure_valid() {
                Ok(()) => true,
                Err(e) => {
                    warn!(candidate = %candidate.id, error = %e, "skipping invalid candidate");
                    false
                }
            })
            .filter(|candidate| is_eligible(current, candidate))
            .map(|candidate| RankedMatch {
                compatibility: calculate_compatibility_with(current, candidate, &self.weights),
                profile: candidate.clone(),
            })
            .collect();

        matches.sort_by(|a, b| {
            b.compatibility
                .overall
                .cmp(&a.compatibility.overall)
                .then_with(|| a.profile.id.cmp(&b.profile.id))
        });

        debug!(
            user = %current.id,
            total_candidates,
            matched = matches.len(),
            "ranking pass complete"
        );

        Ok(matches)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score a single pair with the production weights.
pub fn calculate_compatibility(
    a: &Profile,
    b: &Profile,
) -> Result<CompatibilityScore, MatchError> {
    Matcher::with_default_weights().calculate_compatibility(a, b)
}

/// Rank candidates for `current` with the production weights.
pub fn find_potential_matches(
    current: &Profile,
    candidates: &[Profile],
) -> Result<Vec<RankedMatch>, MatchError> {
    Matcher::with_default_weights().find_potential_matches(current, candidates)
}
