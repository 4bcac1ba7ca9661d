//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, GenerateOptions};
use crate::domain::{ContextField, GenerationResult, ProjectContext};

const BANNER_RULE: &str = "==============================";

#[derive(Parser)]
#[command(name = "tpgen")]
#[command(version)]
#[command(about = "AI test plan generator: compose a QA planning prompt and send it to an LLM", long_about = None)]
struct Cli {
    /// Project name
    #[arg(long)]
    project: String,
    /// Application type (Web/Mobile/API)
    #[arg(long = "type", value_name = "TYPE")]
    app_type: String,
    /// Comma-separated features
    #[arg(long)]
    features: String,
    /// Tech stack
    #[arg(long)]
    tech: String,
    /// Team size
    #[arg(long)]
    team: String,
    /// Timeline
    #[arg(long)]
    time: String,
    /// Environment (e.g., Staging)
    #[arg(long, default_value = "Staging")]
    env: String,
    /// LLM API key (falls back to OPENAI_API_KEY)
    #[arg(long = "api-key", visible_alias = "api_key", value_name = "KEY")]
    api_key: Option<String>,
    /// Model identifier, overrides the settings file
    #[arg(long)]
    model: Option<String>,
    /// Settings file [default: tpgen.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_options(self) -> GenerateOptions {
        let context = ProjectContext::new()
            .with(ContextField::ProjectName, self.project)
            .with(ContextField::AppType, self.app_type)
            .with(ContextField::Features, self.features)
            .with(ContextField::TechStack, self.tech)
            .with(ContextField::TeamSize, self.team)
            .with(ContextField::Timeline, self.time)
            .with(ContextField::Environment, self.env);

        GenerateOptions { context, api_key: self.api_key, model: self.model, config: self.config }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init_cli();

    match api::generate(cli.into_options()) {
        Ok(result) => print_result(&result),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_result(result: &GenerationResult) {
    println!("\n\n{} AGENT OUTPUT {}", BANNER_RULE, BANNER_RULE);
    println!("{}", result);
}
