use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::net::AddrParseError;
use thiserror::Error as ThisError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeError {
    #[error("address not found")]
    NotFound,
    #[error("geocoding service unavailable")]
    ServiceUnavailable,
    #[error("address is ambiguous")]
    Ambiguous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[serde(rename_all = "snake_case")]
pub enum RouteError {
    #[error("directions service unavailable")]
    Unavailable,
    #[error("no walking path found")]
    NoPathFound,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanError {
    #[error("at least two waypoints are needed to plan a route")]
    InsufficientWaypoints,
    #[error("leg {leg_index} failed: {cause}")]
    LegFailed { leg_index: usize, cause: RouteError },
    /// The run was overtaken by a newer run or a reset before it could publish.
    #[error("planning run {run} was superseded")]
    Superseded { run: u64 },
}

#[derive(Debug, ThisError)]
#[error("{message} (code {code})")]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_upstream_error(&self) -> bool {
        self.code == 4
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<AddrParseError> for Error {
    fn from(_: AddrParseError) -> Self {
        config_error("invalid listen address")
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<GeocodeError> for Error {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound => Error {
                code: 101,
                message: err.to_string(),
            },
            GeocodeError::Ambiguous => Error {
                code: 102,
                message: err.to_string(),
            },
            GeocodeError::ServiceUnavailable => upstream_error(),
        }
    }
}

impl From<PlanError> for Error {
    fn from(err: PlanError) -> Self {
        let code = match err {
            PlanError::InsufficientWaypoints => 100,
            PlanError::LegFailed { .. } => 103,
            PlanError::Superseded { .. } => 104,
        };

        Error {
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            4 => (StatusCode::BAD_GATEWAY, "Upstream Error"),
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            100 | 104 | 105 => (StatusCode::CONFLICT, self.message.as_str()),
            101 | 102 => (StatusCode::UNPROCESSABLE_ENTITY, self.message.as_str()),
            103 => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn discarded_error() -> Error {
    Error {
        code: 105,
        message: "address submission discarded by reset".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn config_error(message: &str) -> Error {
    Error {
        code: 2,
        message: message.into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn server_error() -> Error {
    Error {
        code: 5,
        message: "server error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

#[test]
fn geocode_error_mapping_test() {
    assert!(Error::from(GeocodeError::NotFound).is_invalid_input_error());
    assert_eq!(Error::from(GeocodeError::Ambiguous).code, 102);
    assert!(Error::from(GeocodeError::ServiceUnavailable).is_upstream_error());
}

#[test]
fn plan_error_mapping_test() {
    let err = Error::from(PlanError::LegFailed {
        leg_index: 1,
        cause: RouteError::NoPathFound,
    });

    assert_eq!(err.code, 103);
    assert_eq!(err.message, "leg 1 failed: no walking path found");
    assert_eq!(Error::from(PlanError::InsufficientWaypoints).code, 100);
    assert_eq!(Error::from(PlanError::Superseded { run: 3 }).code, 104);
}

#[test]
fn internal_errors_hide_message_test() {
    let response = env_var_error(env::VarError::NotPresent).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = Error::from(PlanError::InsufficientWaypoints).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn unresolvable_address_is_unprocessable_test() {
    let response = Error::from(GeocodeError::NotFound).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = Error::from(GeocodeError::Ambiguous).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = Error::from(GeocodeError::ServiceUnavailable).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
