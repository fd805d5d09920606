use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dynadmin_core::remote::{input_error_to_status_code, remote_error_to_status_code, RemoteError};
use dynadmin_core::InputError;

use crate::error::DispatchError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(e) = self.0.downcast_ref::<DispatchError>() {
            e.status_code()
        } else if let Some(e) = self.0.downcast_ref::<RemoteError>() {
            remote_error_to_status_code(e)
        } else if let Some(e) = self.0.downcast_ref::<InputError>() {
            input_error_to_status_code(e)
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
