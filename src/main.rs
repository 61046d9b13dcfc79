use anyhow::Result;
use clap::Parser;

use heroscout::{find_tallest_hero, FilterCriteria, HeroApiClient};

#[derive(Parser)]
#[command(name = "heroscout")]
#[command(about = "Find the tallest superhero by gender and employment status", long_about = None)]
struct Cli {
    /// Gender to match, case-insensitive (e.g. "Male", "female")
    #[arg(long)]
    gender: String,

    /// Only match heroes with an occupation listed
    #[arg(long, default_value = "false")]
    employed: bool,

    /// Override the hero dataset URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let client = match cli.api_url {
        Some(url) => HeroApiClient::with_url(&url),
        None => HeroApiClient::new(),
    };
    let criteria = FilterCriteria {
        gender: cli.gender,
        has_work: cli.employed,
    };

    match find_tallest_hero(&client, &criteria).await? {
        Some(hero) => println!("{}", serde_json::to_string_pretty(&hero)?),
        None => println!("No matching hero found."),
    }

    Ok(())
}
