//! Verified Badges
//!
//! Some users get a badge next to their name in the friends list. Which ones
//! is configuration, see `ListConfig::verified_user_ids`.

use std::collections::HashSet;

/// Set of user IDs that carry the verified badge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedBadges {
    ids: HashSet<String>,
}

impl VerifiedBadges {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `id` should show the badge
    pub fn is_verified(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
