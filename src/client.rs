use std::collections::HashMap;

use octocrab::Octocrab;

use crate::config::{env_value, API_URL_VAR, TOKEN_VAR};
use crate::error::{Error, Result};
use crate::{RepositoryId, Workflow};

const WORKFLOWS_PER_PAGE: u8 = 100;

pub struct GitHubApi {
    pub client: Octocrab,
}

impl GitHubApi {
    /// Builds a client from `GITHUB_TOKEN` and `GITHUB_API_URL`.
    ///
    /// Without a token the client is anonymous and gets the lower rate limit.
    /// No request is made here.
    pub fn from_env() -> Result<Self> {
        Self::new(env_value(API_URL_VAR).as_deref(), env_value(TOKEN_VAR))
    }

    pub fn new(api_url: Option<&str>, token: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(url) = api_url {
            builder = builder.base_uri(url).map_err(Error::Client)?;
        }
        match token {
            Some(token) => {
                log::info!("Using authenticated GitHub client");
                builder = builder.personal_token(token);
            }
            None => log::info!("{TOKEN_VAR} is not set, using anonymous GitHub client"),
        }
        let client = builder.build().map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Lists every workflow of the repository, page by page.
    ///
    /// Listing ends once `total_count` workflows were collected, or, if the
    /// response carries no count, at the first page shorter than a full one.
    /// Any failed page fails the whole listing.
    pub async fn list_workflows(&self, repo: &RepositoryId) -> Result<Vec<Workflow>> {
        let mut workflows = vec![];

        let mut page = 1u32;
        loop {
            let response: WorkflowsPage = self
                .client
                .get(
                    format!("/repos/{}/{}/actions/workflows", repo.owner, repo.name),
                    Some(&PageParams {
                        per_page: WORKFLOWS_PER_PAGE,
                        page,
                    }),
                )
                .await
                .map_err(|source| Error::UpstreamApi {
                    context: format!("Cannot list workflows of {repo} (page {page})"),
                    source,
                })?;
            let fetched = response.workflows.len();
            workflows.extend(response.workflows);
            log::info!("Fetched {fetched} workflows from page {page}");

            let done = match response.total_count {
                Some(total) => workflows.len() as u64 >= total,
                None => fetched < usize::from(WORKFLOWS_PER_PAGE),
            };
            if done || fetched == 0 {
                break;
            }
            page += 1;
        }
        Ok(workflows)
    }

    /// Returns the billable milliseconds of a workflow keyed by runner OS label
    /// (`UBUNTU`, `WINDOWS`, `MACOS`, or a larger-runner label).
    pub async fn get_workflow_usage(
        &self,
        repo: &RepositoryId,
        workflow: &Workflow,
    ) -> Result<HashMap<String, u64>> {
        let usage: UsageResponse = self
            .client
            .get(
                format!(
                    "/repos/{}/{}/actions/workflows/{}/timing",
                    repo.owner, repo.name, workflow.id
                ),
                None::<&()>,
            )
            .await
            .map_err(|source| Error::UpstreamApi {
                context: format!("Cannot download usage of workflow {}", workflow.name),
                source,
            })?;

        Ok(usage
            .billable
            .platforms
            .into_iter()
            .map(|(platform, bill)| (platform, bill.total_ms))
            .collect())
    }
}

#[derive(serde::Serialize, Debug)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(serde::Deserialize, Debug)]
struct WorkflowsPage {
    total_count: Option<u64>,
    workflows: Vec<Workflow>,
}

#[derive(serde::Deserialize, Debug)]
struct PlatformBill {
    #[serde(default)]
    total_ms: u64,
}

#[derive(serde::Deserialize, Debug, Default)]
struct BillablePlatforms {
    #[serde(flatten)]
    platforms: HashMap<String, PlatformBill>,
}

#[derive(serde::Deserialize, Debug)]
struct UsageResponse {
    #[serde(default)]
    billable: BillablePlatforms,
}
