use actbills::{create_report, resolve_repository, sink, GitHubApi};
use clap::Parser;

/// Generates a markdown table of billable execution times for the workflows
/// of a GitHub repository, aggregated by runner OS (Ubuntu, Windows, macOS).
///
/// The report is appended to $GITHUB_STEP_SUMMARY, or printed to stdout.
#[derive(Parser)]
#[command(name = "actbills", version)]
struct Args {
    /// GitHub repository as owner/name (default $GITHUB_REPOSITORY)
    #[arg(long)]
    repo: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let repo = resolve_repository(args.repo.as_deref())?;
    log::info!("Collecting billable time for {repo}");

    let api = GitHubApi::from_env()?;
    create_report(&api, &repo, &sink::output_path()).await?;
    Ok(())
}
