use crate::filter::PostFilter;
use auth::Interceptor;
use blog_core::transport::decode;
use blog_core::{
    ClientConfig, DataBody, DataResponse, DeleteOptions, ListResponse, Post, PostInput,
    PostListPage, PostPatch, RequestFailure,
};
use std::sync::Arc;

const POSTS_PATH: &str = "/api/v1/blog/post";

/// Client for the `/api/v1/blog/post` resource.
///
/// Reads carry the session's bearer token when there is one. Writes need a
/// logged in session and fail with [`RequestFailure::MissingCredentials`]
/// without touching the network otherwise.
#[derive(Clone)]
pub struct BlogClient {
    config: ClientConfig,
    interceptor: Arc<Interceptor>,
}

impl BlogClient {
    pub fn new(config: ClientConfig, interceptor: Arc<Interceptor>) -> Self {
        Self {
            config,
            interceptor,
        }
    }

    pub async fn get(&self, id: &str) -> Result<Post, RequestFailure> {
        tracing::info!("Retrieving blogpost {}", id);
        let url = self
            .config
            .endpoint(&format!("{}/{}", POSTS_PATH, urlencoding::encode(id)));

        let response = self
            .interceptor
            .send(|http| http.get(&url))
            .await?;
        let body: DataResponse<Post> = decode(response).await?;
        Ok(body.data)
    }

    /// First page with the backend's default page size.
    pub async fn list(&self) -> Result<PostListPage, RequestFailure> {
        self.list_page(&PostFilter::default()).await
    }

    pub async fn list_page(&self, filter: &PostFilter) -> Result<PostListPage, RequestFailure> {
        tracing::info!("Listing blogposts");
        let url = self.config.endpoint(POSTS_PATH);
        let query = filter.query_pairs();

        let response = self
            .interceptor
            .send(|http| http.get(&url).query(&query))
            .await?;
        let body: ListResponse<Post> = decode(response).await?;

        tracing::info!("Blogposts listed ({} returned)", body.data.len());
        Ok(body.into())
    }

    pub async fn post(&self, input: &PostInput) -> Result<Post, RequestFailure> {
        tracing::info!("Creating blogpost {:?}", input.title);
        let url = self.config.endpoint(POSTS_PATH);
        let body = DataBody::new(input);

        let response = self
            .interceptor
            .send_authorized(|http| http.post(&url).json(&body))
            .await?;
        let created: DataResponse<Post> = decode(response).await?;

        tracing::info!("Blogpost created ({})", created.data.id());
        Ok(created.data)
    }

    pub async fn patch(&self, patch: &PostPatch) -> Result<Post, RequestFailure> {
        tracing::info!("Updating blogpost {}", patch.id);
        let url = self.config.endpoint(POSTS_PATH);
        let body = DataBody::new(patch);

        let response = self
            .interceptor
            .send_authorized(|http| http.patch(&url).json(&body))
            .await?;
        let updated: DataResponse<Post> = decode(response).await?;

        tracing::info!("Blogpost updated");
        Ok(updated.data)
    }

    /// `purge` removes the post permanently instead of soft deleting it.
    pub async fn delete(&self, id: &str, purge: bool) -> Result<Post, RequestFailure> {
        tracing::info!("Deleting blogpost {} (purge: {})", id, purge);
        let url = self.config.endpoint(POSTS_PATH);
        let body = DataBody::new(DeleteOptions {
            id: id.to_string(),
            purge,
        });

        let response = self
            .interceptor
            .send_authorized(|http| http.delete(&url).json(&body))
            .await?;
        let deleted: DataResponse<Post> = decode(response).await?;

        tracing::info!("Blogpost deleted");
        Ok(deleted.data)
    }
}
