// End-to-end tests: profiles deserialized from store-shaped JSON, ranked,
// and serialized back with compatibility attached.

use duet_match::{find_potential_matches, Matcher, Profile, ScoringWeights};
use serde_json::json;

fn store_profile(id: &str, age: u8, gender: &str, lat: f64, lon: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("User {}", id),
        "age": age,
        "gender": gender,
        "bio": "hello",
        "photos": ["photo-1.jpg"],
        "location": {
            "latitude": lat,
            "longitude": lon,
            "city": "New York",
            "country": "US"
        },
        "interests": ["hiking", "live music"],
        "spotify": {
            "topArtists": ["Radiohead", "Bjork"],
            "topGenres": ["Indie Rock", "Art Pop"],
            "topTracks": ["Creep"]
        },
        "preferences": {
            "ageRange": [20, 35],
            "maxDistance": 50.0,
            "interestedIn": ["male", "female"],
            "lookingFor": "dating"
        },
        "isVerified": true,
        "createdAt": "2026-01-15T12:00:00Z"
    })
}

#[test]
fn profiles_round_trip_from_store_json() {
    let profile: Profile =
        serde_json::from_value(store_profile("u1", 25, "female", 40.7128, -74.0060)).unwrap();

    assert_eq!(profile.id, "u1");
    assert_eq!(profile.preferences.age_range, (20, 35));
    assert_eq!(profile.preferences.interested_in, vec!["male", "female"]);
    let music = profile.music.as_ref().unwrap();
    assert_eq!(music.top_genres, vec!["Indie Rock", "Art Pop"]);
    assert!(profile.is_verified);
    assert!(profile.created_at.is_some());
}

#[test]
fn minimal_profile_deserializes_with_defaults() {
    let profile: Profile = serde_json::from_value(json!({
        "id": "bare",
        "name": "Bare",
        "age": 30,
        "gender": "non-binary",
        "location": { "latitude": 52.52, "longitude": 13.405 },
        "preferences": {
            "ageRange": [25, 40],
            "maxDistance": 25.0,
            "lookingFor": "friends"
        }
    }))
    .unwrap();

    assert!(profile.music.is_none());
    assert!(profile.interests.is_empty());
    assert!(profile.preferences.interested_in.is_empty());
    assert!(!profile.is_verified);
}

#[test]
fn full_ranking_pass_over_store_profiles() {
    let current: Profile =
        serde_json::from_value(store_profile("current", 25, "female", 40.7128, -74.0060)).unwrap();

    let candidates: Vec<Profile> = vec![
        serde_json::from_value(store_profile("near", 27, "male", 40.7200, -74.0100)).unwrap(),
        serde_json::from_value(store_profile("far", 27, "male", 40.9800, -74.3500)).unwrap(),
        serde_json::from_value(store_profile("too-old", 50, "male", 40.7200, -74.0100)).unwrap(),
    ];

    let matches = find_potential_matches(&current, &candidates).unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "far"]);

    // Identical tastes, so only proximity separates them.
    assert_eq!(matches[0].compatibility.music, matches[1].compatibility.music);
    assert!(matches[0].compatibility.location > matches[1].compatibility.location);
}

#[test]
fn invalid_store_rows_are_skipped() {
    // Run with RUST_LOG=duet_match=warn to see the skipped-row warnings.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let current: Profile =
        serde_json::from_value(store_profile("current", 25, "female", 40.7128, -74.0060)).unwrap();
    let mut bad: Profile =
        serde_json::from_value(store_profile("bad", 25, "male", 40.7200, -74.0100)).unwrap();
    bad.location.latitude = 999.0;
    let good: Profile =
        serde_json::from_value(store_profile("good", 25, "male", 40.7200, -74.0100)).unwrap();

    let matches = find_potential_matches(&current, &[bad, good]).unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["good"]);
}

#[test]
fn ranked_match_serializes_profile_fields_inline() {
    let current: Profile =
        serde_json::from_value(store_profile("current", 25, "female", 40.7128, -74.0060)).unwrap();
    let candidate: Profile =
        serde_json::from_value(store_profile("near", 27, "male", 40.7200, -74.0100)).unwrap();

    let matches = find_potential_matches(&current, &[candidate]).unwrap();
    let value = serde_json::to_value(&matches[0]).unwrap();

    // The UI expects the profile fields and the scores side by side.
    assert_eq!(value["id"], "near");
    assert_eq!(value["isVerified"], true);
    let overall = value["compatibility"]["overall"].as_u64().unwrap();
    assert!(overall <= 100);
}

#[test]
fn custom_weights_change_the_ranking() {
    let current: Profile =
        serde_json::from_value(store_profile("current", 25, "female", 40.7128, -74.0060)).unwrap();

    // "near" shares nothing musically; "twin" is far away but identical taste.
    let mut near: Profile =
        serde_json::from_value(store_profile("near", 27, "male", 40.7140, -74.0070)).unwrap();
    near.music = None;
    near.interests.clear();
    let twin: Profile =
        serde_json::from_value(store_profile("twin", 27, "male", 40.9000, -74.2000)).unwrap();

    let location_heavy = Matcher::new(ScoringWeights {
        music: 0.0,
        interests: 0.0,
        location: 1.0,
    });
    let ranked = location_heavy
        .find_potential_matches(&current, &[near.clone(), twin.clone()])
        .unwrap();
    assert_eq!(ranked[0].profile.id, "near");

    let taste_heavy = Matcher::new(ScoringWeights {
        music: 0.5,
        interests: 0.5,
        location: 0.0,
    });
    let ranked = taste_heavy
        .find_potential_matches(&current, &[near, twin])
        .unwrap();
    assert_eq!(ranked[0].profile.id, "twin");
}
