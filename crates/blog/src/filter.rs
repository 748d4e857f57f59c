use blog_core::PostListPage;
use chrono::{DateTime, SecondsFormat, Utc};

/// Query parameters accepted by the post listing.
///
/// Everything is optional; the backend applies its own defaults (25 posts per
/// page, starting from the first post).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub page_size: Option<u32>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
    pub updated_at_from: Option<DateTime<Utc>>,
    pub updated_at_to: Option<DateTime<Utc>>,
    pub deleted: Option<bool>,
    pub deleted_at_from: Option<DateTime<Utc>>,
    pub deleted_at_to: Option<DateTime<Utc>>,
    /// Id of the last post of the previous page.
    pub last_seen: Option<String>,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = Some(deleted);
        self
    }

    pub fn with_last_seen(mut self, last_seen: impl Into<String>) -> Self {
        self.last_seen = Some(last_seen.into());
        self
    }

    pub fn created_between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.created_at_from = Some(from);
        self.created_at_to = Some(to);
        self
    }

    pub fn updated_between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.updated_at_from = Some(from);
        self.updated_at_to = Some(to);
        self
    }

    pub fn deleted_between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.deleted_at_from = Some(from);
        self.deleted_at_to = Some(to);
        self
    }

    /// The same filter positioned after `page`, or `None` on the last page.
    pub fn after(&self, page: &PostListPage) -> Option<Self> {
        if !page.has_more() || page.metadata.last_seen.is_empty() {
            return None;
        }
        Some(self.clone().with_last_seen(page.metadata.last_seen.clone()))
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(id) = &self.id {
            pairs.push(("id", id.clone()));
        }
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }

        let dates = [
            ("created_at_from", self.created_at_from),
            ("created_at_to", self.created_at_to),
            ("updated_at_from", self.updated_at_from),
            ("updated_at_to", self.updated_at_to),
            ("deleted_at_from", self.deleted_at_from),
            ("deleted_at_to", self.deleted_at_to),
        ];
        for (key, value) in dates {
            if let Some(date) = value {
                pairs.push((key, date.to_rfc3339_opts(SecondsFormat::Secs, true)));
            }
        }

        if let Some(deleted) = self.deleted {
            pairs.push(("deleted", deleted.to_string()));
        }
        if let Some(last_seen) = &self.last_seen {
            pairs.push(("last_seen", last_seen.clone()));
        }

        pairs
    }
}
