use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("repository name not provided and GITHUB_REPOSITORY environment variable not set")]
    MissingRepository,

    #[error("invalid repository name format: {0} (expected owner/name)")]
    InvalidFormat(String),

    #[error("cannot create GitHub client")]
    Client(#[source] octocrab::Error),

    #[error("{context}")]
    UpstreamApi {
        context: String,
        #[source]
        source: octocrab::Error,
    },

    #[error("cannot write report to {}", path.display())]
    SinkIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
