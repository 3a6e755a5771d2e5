//! Errors raised while managing cron jobs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Cron job management failures.
#[derive(Error, Debug)]
pub enum CronError {
    /// No job registered under the name
    #[error("No cron job named {0:?} is registered")]
    UnknownJob(String),
    /// Job schedule is not a valid cron expression
    #[error("Cron job {name:?} has an invalid schedule {schedule:?}: {reason}")]
    InvalidSchedule {
        /// Job name
        name: String,
        /// Rejected cron expression
        schedule: String,
        /// Parser message
        reason: String,
    },
}

impl IntoResponse for CronError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownJob(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::InvalidSchedule { .. } => InternalServerError(self).into_response(),
        }
    }
}
