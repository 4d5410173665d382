//! HTTP status classification for backend failures

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Best-effort mapping used when a backend only reports a status.
    ///
    /// 502/503/504 are reported as transport failures since the backend
    /// itself never answered.
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => Self::NetworkError,
            s if s.is_server_error() => Self::InternalError,
            s if s.is_client_error() => Self::InvalidRequest,
            _ => Self::Unknown,
        }
    }
}
