use crate::core::distance::haversine_distance_km;
use crate::models::Profile;

/// Decide whether two profiles may be matched at all, before any scoring.
///
/// All three checks must pass:
/// - each profile's age falls inside the other's preferred age range
///   (inclusive on both ends);
/// - each profile's gender appears in the other's `interested_in` list,
///   so an empty list on either side rejects the pair;
/// - the great-circle distance between them does not exceed the larger
///   of the two stated maximum distances.
pub fn is_eligible(a: &Profile, b: &Profile) -> bool {
    within_age_preferences(a, b) && mutual_gender_interest(a, b) && within_distance(a, b)
}

#[inline]
fn within_age_preferences(a: &Profile, b: &Profile) -> bool {
    let (a_min, a_max) = a.preferences.age_range;
    let (b_min, b_max) = b.preferences.age_range;

    b.age >= a_min && b.age <= a_max && a.age >= b_min && a.age <= b_max
}

#[inline]
fn mutual_gender_interest(a: &Profile, b: &Profile) -> bool {
    a.preferences.interested_in.contains(&b.gender)
        && b.preferences.interested_in.contains(&a.gender)
}

#[inline]
fn within_distance(a: &Profile, b: &Profile) -> bool {
    let max_distance = a
        .preferences
        .max_distance_km
        .max(b.preferences.max_distance_km);

    haversine_distance_km(&a.location, &b.location) <= max_distance
}
