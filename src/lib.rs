use std::fmt::{Display, Formatter};
use std::path::Path;

pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod repository;
pub mod sink;
pub mod usage;

pub use client::GitHubApi;
pub use error::{Error, Result};
pub use report::{render_report, ReportText};
pub use repository::resolve_repository;
pub use usage::{collect_usage, ReportData, RunnerOs, WorkflowUsage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
}

/// Fetches billable minutes of every workflow and appends the markdown report to `output`.
///
/// Nothing is written unless all workflows were fetched successfully.
pub async fn create_report(api: &GitHubApi, repo: &RepositoryId, output: &Path) -> Result<()> {
    let workflows = api.list_workflows(repo).await?;
    log::info!("Found {} workflows in {repo}", workflows.len());

    let data = collect_usage(api, repo, &workflows).await?;
    let report = render_report(&data, &ReportText::default());

    sink::append_to_file(output, &report)?;
    log::info!("Report written to {}", output.display());
    Ok(())
}
