pub mod poll;

use crate::backend::VoteBackend;
use crate::config::Config;
use crate::handlers;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "dvote", author, version, about = "Browse and cast D-Vote polls")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List public votes
    Explore,
    /// List votes you created or took part in
    Mine,
    /// Show a vote, optionally casting a choice first
    Vote {
        hash: String,
        #[arg(short, long)]
        option: Option<usize>,
    },
    /// Follow a vote's results as they change
    Watch { hash: String },
    /// Create a vote with the given option names
    Create {
        title: String,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Open a page path such as /vote/<hash>
    Open { path: String },
    /// Print the principal the backend sees
    Whoami,
}

pub async fn run(
    command: Command,
    backend: Arc<dyn VoteBackend>,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let logged_in = config.logged_in();
    match command {
        Command::Explore => Ok(handlers::handle_path(backend, logged_in, "/").await),
        Command::Mine => Ok(handlers::handle_path(backend, logged_in, "/mine").await),
        Command::Open { path } => Ok(handlers::handle_path(backend, logged_in, &path).await),
        Command::Vote { hash, option } => {
            Ok(poll::show_or_cast(backend, logged_in, hash, option).await)
        }
        Command::Watch { hash } => {
            poll::watch(backend, hash, config.refresh_interval).await;
            Ok(String::new())
        }
        Command::Create { title, names } => {
            Ok(poll::create(backend.as_ref(), title, names).await?)
        }
        Command::Whoami => Ok(format!("{}\n", backend.whoami().await?)),
    }
}
