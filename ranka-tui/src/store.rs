use rand::Rng;
use ranka_types::{MetricsDelta, Profile};

/// How many profiles the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 10;

// Offset ranges for simulated refreshes. Half-open on the high end: a draw
// lands in [min, max).
const FOLLOWER_OFFSET_MIN: i64 = -500_000;
const FOLLOWER_OFFSET_MAX: i64 = 500_000;
const LIKES_OFFSET_MIN: i64 = -250_000;
const LIKES_OFFSET_MAX: i64 = 250_000;
const VIEWS_OFFSET_MIN: i64 = -500_000;
const VIEWS_OFFSET_MAX: i64 = 500_000;

/// In-memory profile collection plus the derivations the dashboard needs:
/// follower ranking, substring search, and simulated metric refreshes.
///
/// The collection is fixed-cardinality: profiles are seeded once and only
/// ever mutated in place, never inserted or removed.
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up the canonical entry for a username (case-sensitive).
    pub fn get(&self, username: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.username == username)
    }

    /// The top `limit` profiles by follower count, descending.
    ///
    /// `sort_by` is stable, so profiles with equal follower counts keep
    /// their seed order. Recomputed on every call; ranking is never stored.
    pub fn top_profiles(&self, limit: usize) -> Vec<Profile> {
        let mut ranked = self.profiles.clone();
        ranked.sort_by(|a, b| b.followers.cmp(&a.followers));
        ranked.truncate(limit);
        ranked
    }

    /// Profiles whose username or display name contains `query`,
    /// case-insensitively. An empty query means "no active search" and
    /// returns nothing rather than the full collection.
    pub fn search(&self, query: &str) -> Vec<Profile> {
        let query_lower = query.to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }
        self.profiles
            .iter()
            .filter(|p| p.matches_query(&query_lower))
            .cloned()
            .collect()
    }

    /// Mean follower count across the store, rounded to the nearest whole
    /// number. Zero for an empty store.
    pub fn average_followers(&self) -> i64 {
        if self.profiles.is_empty() {
            return 0;
        }
        let total: i64 = self.profiles.iter().map(|p| p.followers).sum();
        (total as f64 / self.profiles.len() as f64).round() as i64
    }

    /// Perturb every profile in place with an independently drawn delta.
    pub fn refresh_all(&mut self, rng: &mut impl Rng) {
        for profile in &mut self.profiles {
            let delta = draw_delta(rng);
            *profile = profile.apply_delta(&delta);
        }
    }

    /// Perturb a single profile, re-derived from the canonical store entry.
    ///
    /// Returns the perturbed snapshot without touching the store, or `None`
    /// when the username is absent (callers treat that as a silent no-op).
    pub fn refresh_profile(&self, username: &str, rng: &mut impl Rng) -> Option<Profile> {
        let canonical = self.get(username)?;
        let delta = draw_delta(rng);
        Some(canonical.apply_delta(&delta))
    }
}

/// Draw one full set of metric offsets.
fn draw_delta(rng: &mut impl Rng) -> MetricsDelta {
    MetricsDelta {
        followers: rng.random_range(FOLLOWER_OFFSET_MIN..FOLLOWER_OFFSET_MAX),
        latest_post_likes: rng.random_range(LIKES_OFFSET_MIN..LIKES_OFFSET_MAX),
        latest_post_views: rng.random_range(VIEWS_OFFSET_MIN..VIEWS_OFFSET_MAX),
    }
}
