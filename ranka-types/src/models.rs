use serde::{Deserialize, Serialize};

/// A ranked, searchable social profile with engagement metrics.
///
/// `username` is the unique key within a store; metrics are signed because
/// simulated refreshes apply raw offsets with no floor at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
    pub latest_post_likes: i64,
    /// Views on the latest post, `None` when the account has no view data.
    #[serde(default)]
    pub latest_post_views: Option<i64>,
}

/// Full set of metric offsets for one simulated refresh.
///
/// A delta always carries every perturbable field so applying it produces
/// the complete next record in one step. The views offset is drawn even when
/// a profile has no view data; `apply` ignores it in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsDelta {
    pub followers: i64,
    pub latest_post_likes: i64,
    pub latest_post_views: i64,
}

impl Profile {
    /// Construct the next record from this one plus a metrics delta.
    ///
    /// Identity fields and non-perturbed counts carry over unchanged. A
    /// profile without view data stays without view data regardless of the
    /// delta's views offset.
    pub fn apply_delta(&self, delta: &MetricsDelta) -> Profile {
        Profile {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            followers: self.followers + delta.followers,
            following: self.following,
            posts: self.posts,
            latest_post_likes: self.latest_post_likes + delta.latest_post_likes,
            latest_post_views: self
                .latest_post_views
                .map(|views| views + delta.latest_post_views),
        }
    }

    /// Case-insensitive substring match against username or display name.
    ///
    /// The query is expected to be already lowercased by the caller; an
    /// empty query never matches (empty means "no active search").
    pub fn matches_query(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return false;
        }
        self.username.to_lowercase().contains(query_lower)
            || self.display_name.to_lowercase().contains(query_lower)
    }
}
