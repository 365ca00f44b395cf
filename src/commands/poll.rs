use crate::backend::VoteBackend;
use crate::error::ClientError;
use crate::handlers::{Route, VotePage};
use crate::models::CreateVoteRecord;
use crate::render;
use crate::tasks::watch_vote;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub async fn show_or_cast(
    backend: Arc<dyn VoteBackend>,
    logged_in: bool,
    hash: String,
    option: Option<usize>,
) -> String {
    let page = VotePage::new(backend, hash, logged_in);
    page.load().await;

    if let Some(index) = option {
        let outcome = page.cast(index).await;
        info!("Cast on {} for option {}: {:?}", page.hash(), index, outcome);
    }

    let (view, tip) = page.snapshot();
    render::vote(view.as_ref(), tip.as_ref(), Utc::now())
}

pub async fn create(
    backend: &dyn VoteBackend,
    title: String,
    names: Vec<String>,
) -> Result<String, ClientError> {
    let request = CreateVoteRecord::new(title, names);
    let record = backend.create_vote(&request).await?;
    info!("Created vote {} with {} option(s)", record.hash, record.items.len());

    let link = Route::Vote {
        hash: record.hash.clone(),
    }
    .link(None);
    Ok(format!("Created \"{}\" -> {}\n", record.title, link))
}

pub async fn watch(backend: Arc<dyn VoteBackend>, hash: String, period: Duration) {
    let (tx, mut rx) = mpsc::channel(1);
    let task = tokio::spawn(watch_vote(backend, hash, period, tx));

    while let Some(view) = rx.recv().await {
        print!("{}", render::vote(Some(&view), None, Utc::now()));
    }

    if let Err(e) = task.await {
        warn!("Watch task ended abnormally: {}", e);
    }
}
