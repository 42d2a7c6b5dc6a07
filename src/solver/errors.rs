use thiserror::Error;

use crate::solver::table::GroupId;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("No group was built for numbers {0:?}")]
    MissingGroup(Vec<u64>),
    #[error("Unknown group id {0}")]
    UnknownGroup(GroupId),
}
