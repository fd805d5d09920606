use dynadmin_core::remote::{input_error_to_status_code, remote_error_to_status_code, RemoteError};
use dynadmin_core::InputError;
use thiserror::Error;

/// Failure of a dispatcher operation: either the input was rejected before
/// any remote call, or the remote call failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl DispatchError {
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::Input(e) => input_error_to_status_code(e),
            DispatchError::Remote(e) => remote_error_to_status_code(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
