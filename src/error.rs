use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort suite preparation.
///
/// Missing configuration is not an error: a source without a plan simply
/// yields nothing. Everything in here means the run must not start with a
/// partial or wrong inventory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("test plan entry {selector:?} has no id")]
    MissingPlanId { selector: Option<String> },

    #[error("test plan id {value:?} is not a positive integer")]
    InvalidPlanId {
        value: String,
        source: ParseIntError,
    },

    #[error("case id {value:?} of {class_name}::{method_name} is not a positive integer")]
    InvalidCaseId {
        class_name: String,
        method_name: String,
        value: String,
        source: ParseIntError,
    },

    #[error("no target package configured for test discovery")]
    MissingTargetPackage,

    #[error("failed to read inventory manifest {}", .path.display())]
    Discovery { path: PathBuf, source: io::Error },

    #[error("failed to parse inventory manifest {}", .path.display())]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },
}
