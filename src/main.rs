//! gist CLI - instant article summaries
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use gist::client::GeminiGenerator;
use gist::{client, format, ui, Config};

#[derive(Parser)]
#[command(name = "gist")]
#[command(author, version, about = "Instant article summaries, key takeaways and insights", long_about = None)]
struct Cli {
    /// URL of the article to summarize
    url: Option<String>,

    /// Show the raw model reply instead of formatted output
    #[arg(long)]
    raw: bool,

    /// Override the configured Gemini model
    #[arg(long)]
    model: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "gist", &mut std::io::stdout());
        return Ok(());
    }

    let url = cli.url.unwrap_or_default();

    let config = Config::load()?;
    let model = cli.model.unwrap_or_else(|| config.agent.model.clone());
    let generator = GeminiGenerator::new(config.api_key().map(str::to_string), model)?;

    ui::banner();
    if !url.trim().is_empty() {
        ui::loading(&url);
    }

    // One request per invocation; a failure is terminal, rerun to retry.
    match client::summarize(&url, &generator).await {
        Ok(reply) => {
            if cli.raw {
                println!("{}", reply);
            } else {
                ui::render_blocks(&format::format_content(&reply));
            }
        }
        Err(e) => {
            ui::render_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
