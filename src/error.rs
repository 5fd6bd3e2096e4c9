/*
 * Responsibility
 * - App-wide ApiError definition
 * - IntoResponse (HTTP status / JSON error body)
 * - Convert claim / role / gate / repo errors into one response shape
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::middleware::auth::GateError;
use crate::repos::error::RepoError;
use crate::services::auth::ClaimsError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Internal(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimsError> for AppError {
    fn from(e: ClaimsError) -> Self {
        AppError::Unauthorized(e.to_string())
    }
}

impl From<GateError> for AppError {
    fn from(e: GateError) -> Self {
        match e {
            GateError::Unauthenticated(e) => e.into(),
            // A token without a usable roles claim is a 403, not a 401.
            // Kept as-is until the product owner confirms the asymmetry.
            GateError::CannotDetermineRoles(_) | GateError::InsufficientRole(_) => {
                AppError::Forbidden(e.to_string())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(_: RepoError) -> Self {
        AppError::Internal("database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::RoleError;

    #[test]
    fn taxonomy_maps_to_status() {
        let cases = [
            (GateError::from(ClaimsError::missing_header()), StatusCode::UNAUTHORIZED),
            (
                GateError::Unauthenticated(ClaimsError::UndecodableToken("x".into())),
                StatusCode::UNAUTHORIZED,
            ),
            (
                GateError::CannotDetermineRoles(RoleError::RolesClaimMissing),
                StatusCode::FORBIDDEN,
            ),
            (GateError::InsufficientRole("admin".into()), StatusCode::FORBIDDEN),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }

        let db = AppError::from(RepoError::InvalidCollection("x y".into()));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.to_string(), "database error");
    }

    #[test]
    fn messages() {
        assert_eq!(
            AppError::from(GateError::CannotDetermineRoles(RoleError::RolesClaimMissing))
                .to_string(),
            "cannot determine roles"
        );
        assert_eq!(
            AppError::from(GateError::InsufficientRole("admin".into())).to_string(),
            "missing role: admin"
        );
        assert_eq!(
            AppError::from(ClaimsError::missing_header()).to_string(),
            "missing Authorization header"
        );
    }
}
