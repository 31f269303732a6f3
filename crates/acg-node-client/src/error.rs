use thiserror::Error;

use acg_core::error::ResolveError;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
