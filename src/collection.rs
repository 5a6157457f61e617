use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::errors::ContentError;
use crate::post::{BlogPost, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    OldestFirst,
    NewestFirst,
}

/// The full keyed set of posts. Build-then-freeze: the loader inserts every
/// post at startup, after which the collection is only read. Shared
/// references across request handlers need no locking.
#[derive(Debug)]
pub struct PostCollection {
    // id, post
    posts: HashMap<PostId, BlogPost>,
    // Kept sorted by (date, id) ascending at all times
    date_index: Vec<(DateTime<Utc>, PostId)>,
}

impl PostCollection {
    pub fn new() -> PostCollection {
        PostCollection {
            posts: Default::default(),
            date_index: Default::default(),
        }
    }

    /// Inserts a post, rejecting id collisions. Uniqueness lives here, not
    /// in the post constructor: only the collection sees all ids.
    pub fn insert(&mut self, post: BlogPost) -> Result<(), ContentError> {
        if self.posts.contains_key(&post.id) {
            return Err(ContentError::DuplicateId(post.id));
        }

        let key = (post.published_at, post.id);
        let pos = self.date_index.partition_point(|entry| *entry < key);
        self.date_index.insert(pos, key);
        self.posts.insert(post.id, post);

        Ok(())
    }

    /// O(1) primary-key lookup. A missing id is a normal outcome, not an
    /// error.
    pub fn by_id(&self, id: PostId) -> Option<&BlogPost> {
        self.posts.get(&id)
    }

    /// Every post, drafts included, ordered by publication date. Ties break
    /// by ascending id in both directions, so listings are deterministic.
    pub fn ordered_by_date(&self, order: Order) -> Vec<&BlogPost> {
        let lookup = |entry: &(DateTime<Utc>, PostId)| &self.posts[&entry.1];
        match order {
            Order::OldestFirst => self.date_index.iter().map(lookup).collect(),
            // Reverse whole timestamps only; equal-timestamp runs keep
            // their ascending id order
            Order::NewestFirst => self.date_index
                .chunk_by(|a, b| a.0 == b.0)
                .rev()
                .flatten()
                .map(lookup)
                .collect(),
        }
    }

    /// The public listing: no drafts, no posts scheduled after `now`.
    pub fn published_as_of(&self, now: DateTime<Utc>, order: Order) -> Vec<&BlogPost> {
        self.ordered_by_date(order)
            .into_iter()
            .filter(|post| !post.draft && !post.is_scheduled(now))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for PostCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::test_data::sample_post;

    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut collection = PostCollection::new();
        collection.insert(sample_post(7, 1589950800, "First")).unwrap();

        let post = collection.by_id(PostId(7)).unwrap();
        assert_eq!(post.title, "First");
        // Repeated queries return the same post
        let again = collection.by_id(PostId(7)).unwrap();
        assert_eq!(again, post);
    }

    #[test]
    fn test_lookup_missing_is_none() {
        let collection = PostCollection::new();
        assert!(collection.by_id(PostId(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        // Mirrors the duplicate id 43 found in real content data: same id,
        // same timestamp, different titles.
        let mut collection = PostCollection::new();
        collection.insert(sample_post(43, 1589950800, "Original")).unwrap();

        let res = collection.insert(sample_post(43, 1589950800, "Corrected"));
        assert_eq!(res, Err(ContentError::DuplicateId(PostId(43))));

        // The first post is untouched
        assert_eq!(collection.by_id(PostId(43)).unwrap().title, "Original");
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_ordering_is_stable_on_ties() {
        let mut collection = PostCollection::new();
        // Inserted out of order on purpose; 20 and 10 share a timestamp
        collection.insert(sample_post(20, 1589950800, "Tie, higher id")).unwrap();
        collection.insert(sample_post(5, 1600000000, "Latest")).unwrap();
        collection.insert(sample_post(10, 1589950800, "Tie, lower id")).unwrap();
        collection.insert(sample_post(1, 1500000000, "Earliest")).unwrap();

        let oldest_first: Vec<u32> = collection
            .ordered_by_date(Order::OldestFirst)
            .iter()
            .map(|post| post.id.0)
            .collect();
        assert_eq!(oldest_first, [1, 10, 20, 5]);

        // Ties keep their ascending id order in both directions
        let newest_first: Vec<u32> = collection
            .ordered_by_date(Order::NewestFirst)
            .iter()
            .map(|post| post.id.0)
            .collect();
        assert_eq!(newest_first, [5, 10, 20, 1]);
    }

    #[test]
    fn test_newest_first_keeps_ascending_ids_on_ties() {
        let mut collection = PostCollection::new();
        collection.insert(sample_post(20, 1589950800, "Second by id")).unwrap();
        collection.insert(sample_post(10, 1589950800, "First by id")).unwrap();

        let ids: Vec<u32> = collection
            .ordered_by_date(Order::NewestFirst)
            .iter()
            .map(|post| post.id.0)
            .collect();
        assert_eq!(ids, [10, 20]);
    }

    #[test]
    fn test_published_as_of_hides_scheduled_and_drafts() {
        let mut collection = PostCollection::new();
        collection.insert(sample_post(1, 1589950800, "Published")).unwrap();
        collection.insert(sample_post(2, 1893456000, "Scheduled")).unwrap();

        let mut draft = sample_post(3, 1589950000, "Draft");
        draft.draft = true;
        collection.insert(draft).unwrap();

        let now = Utc.timestamp_opt(1600000000, 0).unwrap();
        let public: Vec<u32> = collection
            .published_as_of(now, Order::NewestFirst)
            .iter()
            .map(|post| post.id.0)
            .collect();
        assert_eq!(public, [1]);

        // Drafts and scheduled posts stay addressable by id
        assert!(collection.by_id(PostId(2)).is_some());
        assert!(collection.by_id(PostId(3)).is_some());
    }
}
