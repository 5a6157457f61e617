use std::fmt;
use std::fmt::{Display, Formatter};
use std::slice;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::AuthorTag;
use crate::block::ContentBlock;

/// The authoring-time primary key. Assigned by hand, not generated, which is
/// exactly why the collection has to check it for collisions.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One addressable unit of content: metadata plus an ordered body of
/// content blocks. Immutable once constructed; the post owns its blocks,
/// while the author is a shared reference into the closed registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    /// Markdown summary shown in listings, distinct from the body.
    pub blurb: String,
    pub author: AuthorTag,
    /// Epoch-second precision. May be in the future for scheduled posts.
    pub published_at: DateTime<Utc>,
    pub cover_image: Option<String>,
    /// Drafts stay addressable by id but are hidden from public listings.
    pub draft: bool,
    pub blocks: Vec<ContentBlock>,
}

impl BlogPost {
    pub fn summary(&self) -> &str {
        &self.blurb
    }

    /// Ordered body for rendering. Restartable: posts are read many times.
    pub fn blocks(&self) -> slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }

    pub fn is_scheduled(&self, now: DateTime<Utc>) -> bool {
        self.published_at > now
    }
}

impl Display for BlogPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, author={}\ntitle={}\nblocks={}",
               self.id,
               self.published_at.format("%Y-%m-%d %H:%M:%S"),
               self.author,
               self.title,
               self.blocks.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::test_data::sample_post;

    use super::*;

    #[test]
    fn test_summary_is_blurb() {
        let post = sample_post(1, 1589950800, "A post");
        assert_eq!(post.summary(), "A short summary");
    }

    #[test]
    fn test_blocks_iterator_restarts() {
        let post = sample_post(1, 1589950800, "A post");
        assert_eq!(post.blocks().count(), 2);
        // A second pass sees the same sequence
        assert_eq!(post.blocks().count(), 2);
    }

    #[test]
    fn test_scheduled() {
        let post = sample_post(1, 1589950800, "A post");
        let before = Utc.timestamp_opt(1589950799, 0).unwrap();
        let after = Utc.timestamp_opt(1589950801, 0).unwrap();
        assert!(post.is_scheduled(before));
        assert!(!post.is_scheduled(after));
    }
}
