//! Wire DTOs for the seqrview auth API.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field for field so serde can
//! decode responses without adaptation layers. Optional profile fields stay
//! `Option` rather than defaulting, matching a backend that omits or nulls
//! them freely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `user_type` value marking an exam-scoped administrator account.
pub const USER_TYPE_EXAM_ADMIN: &str = "EXAM_ADMIN";

/// Credential pair issued by `POST /auth/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived token attached to API calls.
    pub access: String,
    /// Longer-lived token exchanged for fresh access tokens.
    pub refresh: String,
}

/// Response of `POST /auth/token/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedAccess {
    pub access: String,
}

/// The signed-in account as returned by `GET /auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable account identifier (UUID string).
    pub uid: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// One of `OPERATOR`, `CLIENT_ADMIN`, `CLIENT_VIEWER`, `INTERNAL_ADMIN`,
    /// `EXAM_ADMIN`. Kept as a string so new backend roles do not break
    /// decoding.
    pub user_type: String,
    pub status: Option<String>,
    pub mobile_primary: Option<String>,
    /// Media URL of the account photo, if one was captured.
    pub photo: Option<String>,
    /// Exam code an `EXAM_ADMIN` account is scoped to; absent for all other
    /// roles (and for older backend revisions that never sent it).
    #[serde(default)]
    pub exam: Option<String>,
}

impl UserProfile {
    /// True for accounts that operate a single exam rather than the whole
    /// console.
    pub fn is_exam_admin(&self) -> bool {
        self.user_type == USER_TYPE_EXAM_ADMIN
    }

    /// Name shown in the shell header: the full name when present, the
    /// username otherwise.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Error envelope the backend wraps failures in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, e.g. `"Token is invalid or expired"`.
    pub detail: Option<String>,
    /// Machine-readable code, e.g. `"token_not_valid"`.
    pub code: Option<String>,
}
