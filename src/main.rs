//! github-users - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use github_users::{Cli, Exporter, GitHubClient, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting github-users v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={}, format={}, output={:?}, fields={:?}, api_url={}, jobs={}",
        cli.org_name, cli.output_format, cli.output, cli.field_names, cli.api_url, cli.jobs
    );

    match run(&cli).await {
        Ok(count) => {
            info!("Exported {} members of '{}'", count, cli.org_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<usize> {
    let client = GitHubClient::authenticate(&cli.github_token, &cli.api_url).await?;

    let exporter = Exporter::new(client)
        .with_prefetch(usize::from(cli.jobs))
        .with_progress(!cli.quiet);

    exporter.export(&cli.export_request()).await
}
