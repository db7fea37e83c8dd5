//! posts-client CLI entry point.

use clap::Parser;
use posts_client::cli::health::HealthAction;
use posts_client::cli::posts::PostsAction;
use posts_client::cli::{Cli, Commands, OutputFormat};
use posts_client::client::PostsClient;
use posts_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = PostsClient::new(&cli.base_url);

    match cli.command {
        Commands::Posts(posts_cmd) => match posts_cmd.action {
            PostsAction::List => {
                let posts = client.list_posts().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&posts, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_posts(&posts)),
                }
            }
            PostsAction::Create { user_id, content } => {
                let post = client.create_post(&user_id, &content).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&post, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_post(&post))
                    }
                }
            }
            PostsAction::Update { id, content } => {
                let post = client.update_post(&id, &content).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&post, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Updated:\n{}", pretty::format_post(&post))
                    }
                }
            }
            PostsAction::Delete { id } => {
                client.delete_post(&id).await?;
                if !cli.quiet {
                    println!("Deleted post {}", id);
                }
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                client.livez().await?;
                if !cli.quiet {
                    println!("{} is live", client.base_url());
                }
            }
        },
    }

    Ok(())
}
