use thiserror::Error;

use crate::model::SelectionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
