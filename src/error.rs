// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the Strava client and pipeline.

/// Errors raised by the token manager and activity fetcher.
///
/// Row-level data problems never surface here: the normalizer degrades
/// unparseable fields to absent values instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Token exchange was rejected by Strava or could not reach it.
    #[error("Strava authentication failed{}: {message}", fmt_status(.status))]
    Auth {
        status: Option<u16>,
        message: String,
    },

    /// An activity listing request failed after a credential was obtained.
    #[error("Strava activity fetch failed on page {page}{}: {message}", fmt_status(.status))]
    Fetch {
        page: u32,
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl AppError {
    /// HTTP status returned by Strava, if the failure had one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. } | AppError::Fetch { status, .. } => *status,
            AppError::InvalidArgument(_) | AppError::Internal(_) => None,
        }
    }

    /// Strava answered 429. Nothing in this crate retries; callers decide.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Strava answered 401 (revoked or invalid credentials).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for the client and pipeline.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_when_present() {
        let err = AppError::Fetch {
            page: 3,
            status: Some(500),
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Strava activity fetch failed on page 3 (HTTP 500): boom"
        );

        let err = AppError::Auth {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Strava authentication failed: connection refused"
        );
    }

    #[test]
    fn test_rate_limit_and_unauthorized_flags() {
        let err = AppError::Fetch {
            page: 1,
            status: Some(429),
            message: String::new(),
        };
        assert!(err.is_rate_limited());
        assert!(!err.is_unauthorized());

        let err = AppError::Auth {
            status: Some(401),
            message: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_rate_limited());

        let err = AppError::InvalidArgument("page_size".to_string());
        assert_eq!(err.status(), None);
    }
}
