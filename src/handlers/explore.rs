use crate::backend::VoteBackend;
use crate::handlers::Tip;
use crate::models::VoteRecord;
use log::{info, warn};

/// Public votes anyone can open.
#[derive(Debug, Clone, Default)]
pub struct ExplorePage {
    pub votes: Option<Vec<VoteRecord>>,
    pub tip: Option<Tip>,
}

impl ExplorePage {
    pub async fn load(backend: &dyn VoteBackend) -> Self {
        match backend.get_public_vote().await {
            Ok(votes) => {
                info!("Loaded {} public vote(s)", votes.len());
                let votes = votes.into_iter().filter(|vote| vote.public).collect();
                Self {
                    votes: Some(votes),
                    tip: None,
                }
            }
            Err(e) => {
                warn!("Failed to load public votes: {}", e);
                Self {
                    votes: None,
                    tip: Some(Tip::error(e.display_message())),
                }
            }
        }
    }
}
