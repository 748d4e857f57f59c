use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Access/refresh token pair issued by the auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            request_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_empty()
    }
}

/// A blog post as returned by the backend.
///
/// Snapshots are never modified locally; an update yields a new `Post` from
/// the server's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: String,
    title: String,
    content: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted: bool,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted(&self) -> bool {
        self.deleted
    }

    /// `None` while the post has never been soft deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Continuation marker of a listing.
///
/// The backend reports a boolean "more pages" flag; older deployments send an
/// opaque string cursor instead. Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NextCursor {
    Flag(bool),
    Token(String),
}

impl NextCursor {
    pub fn has_more(&self) -> bool {
        match self {
            NextCursor::Flag(more) => *more,
            NextCursor::Token(token) => !token.is_empty(),
        }
    }
}

impl Default for NextCursor {
    fn default() -> Self {
        NextCursor::Token(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_seen: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next: NextCursor,
    #[serde(default)]
    pub response_length: usize,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a post listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostListPage {
    pub data: Vec<Post>,
    pub metadata: Metadata,
}

impl PostListPage {
    pub fn has_more(&self) -> bool {
        self.metadata.next.has_more()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<ListResponse<Post>> for PostListPage {
    fn from(response: ListResponse<Post>) -> Self {
        Self {
            data: response.data,
            metadata: response.metadata,
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub published: bool,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>, published: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            published,
        }
    }
}

/// Partial update of a post. Fields left as `None` are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl PostPatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
            published: None,
            deleted: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = Some(deleted);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOptions {
    pub id: String,
    pub purge: bool,
}

/// Request envelope: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Single resource response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse<T> {
    #[serde(default)]
    pub request_id: Option<String>,
    pub data: T,
}

/// Listing response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub request_id: Option<String>,
    pub data: Vec<T>,
    #[serde(default)]
    pub metadata: Metadata,
}
