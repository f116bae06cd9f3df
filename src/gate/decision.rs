//! Gate decision value.

use serde::Serialize;

/// Machine-readable body returned with an unauthorized rejection.
#[derive(Debug, Serialize)]
struct UnauthorizedBody {
    error: &'static str,
}

/// The gate's decision for a request, applied by the hosting pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through unmodified.
    Pass,

    /// Redirect the client, preserving the original origin.
    Redirect {
        /// Absolute URL to redirect to.
        location: String,
    },

    /// Reject with a status and body.
    Reject {
        /// HTTP status code.
        status: u16,
        /// Response body, JSON.
        body: String,
    },
}

impl Decision {
    /// The 401 rejection used for unauthenticated API requests.
    pub fn unauthorized() -> Self {
        let body = serde_json::to_string(&UnauthorizedBody {
            error: "Unauthorized",
        })
        .unwrap_or_else(|_| r#"{"error":"Unauthorized"}"#.to_string());
        Decision::Reject { status: 401, body }
    }

    /// Whether the decision lets the request through.
    pub fn is_pass(&self) -> bool {
        matches!(self, Decision::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_shape() {
        let decision = Decision::unauthorized();
        match decision {
            Decision::Reject { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, r#"{"error":"Unauthorized"}"#);
            }
            other => panic!("expected Reject, got {:?}", other),
        }
    }

    #[test]
    fn test_is_pass() {
        assert!(Decision::Pass.is_pass());
        assert!(!Decision::unauthorized().is_pass());
        assert!(!Decision::Redirect {
            location: "https://x/login".to_string()
        }
        .is_pass());
    }
}
