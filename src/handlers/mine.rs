use crate::backend::VoteBackend;
use crate::handlers::Tip;
use crate::models::UserVoteRecord;
use log::warn;

/// Votes the caller owns or took part in.
#[derive(Debug, Clone, Default)]
pub struct MinePage {
    pub votes: Option<UserVoteRecord>,
    pub tip: Option<Tip>,
}

impl MinePage {
    pub async fn load(backend: &dyn VoteBackend) -> Self {
        match backend.get_my_vote().await {
            Ok(votes) => Self {
                votes: Some(votes),
                tip: None,
            },
            Err(e) => {
                warn!("Failed to load my votes: {}", e);
                Self {
                    votes: None,
                    tip: Some(Tip::error(e.display_message())),
                }
            }
        }
    }
}
