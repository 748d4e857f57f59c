pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use config::ClientConfig;
pub use error::{classify, FailureOutcome, RequestFailure};
pub use models::{
    DataBody, DataResponse, DeleteOptions, ListResponse, Metadata, NextCursor, Post,
    PostInput, PostListPage, PostPatch, TokenPair,
};
