// Domain errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("unknown deploy stage '{0}', expected one of DEV, TEST, QA, PROD-EXTERNAL")]
    UnknownDeployStage(String),

    #[error("no function lookup entry named '{0}'")]
    MissingLookup(String),
}
