//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use reqwest::Error as HttpError;
use rolodex_domain::RolodexError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RolodexError);

impl From<InfraError> for RolodexError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RolodexError> for InfraError {
    fn from(value: RolodexError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRolodexError {
    fn into_rolodex(self) -> RolodexError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → RolodexError */
/* -------------------------------------------------------------------------- */

impl IntoRolodexError for IoError {
    fn into_rolodex(self) -> RolodexError {
        match self.kind() {
            ErrorKind::NotFound => RolodexError::Storage(format!("path not found: {self}")),
            ErrorKind::PermissionDenied => {
                RolodexError::Storage(format!("permission denied: {self}"))
            }
            _ => RolodexError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_rolodex())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → RolodexError */
/* -------------------------------------------------------------------------- */

impl IntoRolodexError for JsonError {
    fn into_rolodex(self) -> RolodexError {
        RolodexError::Serialization(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_rolodex())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RolodexError */
/* -------------------------------------------------------------------------- */

impl IntoRolodexError for HttpError {
    fn into_rolodex(self) -> RolodexError {
        if self.is_timeout() {
            return RolodexError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return RolodexError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return RolodexError::Network(format!("invalid HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            return RolodexError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        RolodexError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_rolodex())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
