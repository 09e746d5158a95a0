use thiserror::Error;

use super::ReportError;
use crate::state::TransitionError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
