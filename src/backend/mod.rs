pub mod http;

pub use http::HttpBackend;

use crate::error::ClientError;
use crate::models::{CreateVoteRecord, UserVoteRecord, VoteRecord, VoteResponse};
use async_trait::async_trait;

/// Remote vote service. Owns storage, identity and tallying; the client only
/// asks and renders.
#[async_trait]
pub trait VoteBackend: Send + Sync {
    async fn get_vote(&self, hash: &str) -> Result<VoteResponse, ClientError>;

    async fn vote(&self, hash: &str, index: usize) -> Result<VoteResponse, ClientError>;

    async fn get_public_vote(&self) -> Result<Vec<VoteRecord>, ClientError>;

    async fn get_my_vote(&self) -> Result<UserVoteRecord, ClientError>;

    async fn create_vote(&self, request: &CreateVoteRecord) -> Result<VoteRecord, ClientError>;

    /// Principal the backend sees for this caller.
    async fn whoami(&self) -> Result<String, ClientError>;
}
