use std::collections::{BTreeMap, HashMap};
use std::iter::Sum;
use std::ops::Add;

use crate::client::GitHubApi;
use crate::error::Result;
use crate::{RepositoryId, Workflow};

const MILLIS_PER_MINUTE: u64 = 60_000;

/// Hosted runner operating systems included in the report.
/// Larger runners have their own labels and are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerOs {
    Ubuntu,
    Windows,
    Macos,
}

impl RunnerOs {
    /// Key of this OS in the billable usage response.
    pub fn label(self) -> &'static str {
        match self {
            RunnerOs::Ubuntu => "UBUNTU",
            RunnerOs::Windows => "WINDOWS",
            RunnerOs::Macos => "MACOS",
        }
    }
}

/// Billable whole minutes of one workflow, per runner OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowUsage {
    pub ubuntu: u64,
    pub windows: u64,
    pub macos: u64,
}

impl WorkflowUsage {
    pub fn new(ubuntu: u64, windows: u64, macos: u64) -> Self {
        Self {
            ubuntu,
            windows,
            macos,
        }
    }

    /// Partial minutes are dropped, a missing OS counts as zero.
    pub fn from_billable_millis(billable: &HashMap<String, u64>) -> Self {
        let minutes = |os: RunnerOs| {
            billable
                .get(os.label())
                .map_or(0, |millis| millis / MILLIS_PER_MINUTE)
        };
        Self {
            ubuntu: minutes(RunnerOs::Ubuntu),
            windows: minutes(RunnerOs::Windows),
            macos: minutes(RunnerOs::Macos),
        }
    }
}

impl Add for WorkflowUsage {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            ubuntu: self.ubuntu + rhs.ubuntu,
            windows: self.windows + rhs.windows,
            macos: self.macos + rhs.macos,
        }
    }
}

impl Sum for WorkflowUsage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Usage keyed by workflow name. Iterates in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    workflows: BTreeMap<String, WorkflowUsage>,
}

impl ReportData {
    pub fn insert(&mut self, name: impl Into<String>, usage: WorkflowUsage) {
        self.workflows.insert(name.into(), usage);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkflowUsage)> {
        self.workflows.iter().map(|(name, usage)| (name.as_str(), usage))
    }

    /// Element-wise sum over all workflows.
    pub fn total(&self) -> WorkflowUsage {
        self.workflows.values().copied().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, WorkflowUsage)> for ReportData {
    fn from_iter<I: IntoIterator<Item = (S, WorkflowUsage)>>(iter: I) -> Self {
        let mut data = Self::default();
        for (name, usage) in iter {
            data.insert(name, usage);
        }
        data
    }
}

/// Fetches usage of each workflow in turn. The first failed fetch aborts the whole collection.
pub async fn collect_usage(
    api: &GitHubApi,
    repo: &RepositoryId,
    workflows: &[Workflow],
) -> Result<ReportData> {
    let mut data = ReportData::default();
    for workflow in workflows {
        let billable = api.get_workflow_usage(repo, workflow).await?;
        let usage = WorkflowUsage::from_billable_millis(&billable);
        log::debug!("{}: {usage:?}", workflow.name);
        data.insert(workflow.name.clone(), usage);
    }
    Ok(data)
}
