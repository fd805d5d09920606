//! SDK error mapping.
//!
//! Maps AWS SDK errors to `RemoteError` from `dynadmin_core::remote`. Service
//! errors are classified by error code and keep the service message verbatim.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use dynadmin_core::remote::RemoteError;

/// Map any operation's SDK error to RemoteError.
pub fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> RemoteError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let mapped = match &err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            RemoteError::from_service(service_err.code(), service_err.message())
        }
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            RemoteError::Connection(DisplayErrorContext(&err).to_string())
        }
        _ => RemoteError::Service {
            code: "Unknown".to_string(),
            message: DisplayErrorContext(&err).to_string(),
        },
    };

    tracing::debug!(operation, error = %mapped, "Remote call failed");
    mapped
}
