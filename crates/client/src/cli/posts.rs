//! Post CLI commands.

use clap::{Parser, Subcommand};

/// Post management commands.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub action: PostsAction,
}

/// Available post actions.
#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// List all posts.
    List,
    /// Create a new post.
    Create {
        /// Author of the post.
        #[arg(long)]
        user_id: String,
        /// Post content.
        #[arg(long)]
        content: String,
    },
    /// Replace a post's content.
    Update {
        /// Post ID.
        id: String,
        /// New content.
        #[arg(long)]
        content: String,
    },
    /// Delete post by ID.
    Delete {
        /// Post ID.
        id: String,
    },
}
