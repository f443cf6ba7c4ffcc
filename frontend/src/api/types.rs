use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create account";

/// Input names used by the sign-up form and the signup payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Email,
    Username,
    FullName,
    Password,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::Email,
        SignupField::Username,
        SignupField::FullName,
        SignupField::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Username => "username",
            SignupField::FullName => "fullName",
            SignupField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignupField::Email => "Email",
            SignupField::Username => "Username",
            SignupField::FullName => "Full Name",
            SignupField::Password => "Password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

/// Created-user payload returned by the signup and `me` endpoints.
///
/// The server owns this schema, so the body is kept as-is: any JSON value
/// decodes, and the accessors below read the few keys the pages display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub Value);

impl UserProfile {
    /// `id`, falling back to Mongo-style `_id`. Numeric ids are rendered as text.
    pub fn id(&self) -> Option<String> {
        ["id", "_id"]
            .into_iter()
            .filter_map(|key| self.0.get(key))
            .find_map(|value| match value {
                Value::String(id) => Some(id.clone()),
                Value::Number(id) => Some(id.to_string()),
                _ => None,
            })
    }

    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    pub fn full_name(&self) -> Option<&str> {
        self.text("fullName")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    /// A `null` body carries no user at all.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn display_name(&self) -> String {
        self.full_name()
            .filter(|name| !name.trim().is_empty())
            .or(self.username())
            .unwrap_or("unknown user")
            .to_string()
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Stable classification of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    Validation,
    Conflict,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    Server,
    Other,
}

impl RejectionKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "VALIDATION_ERROR" | "BAD_REQUEST" => Some(Self::Validation),
            "CONFLICT" => Some(Self::Conflict),
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            "FORBIDDEN" => Some(Self::Forbidden),
            "NOT_FOUND" => Some(Self::NotFound),
            "RATE_LIMITED" | "TOO_MANY_REQUESTS" => Some(Self::RateLimited),
            "INTERNAL_SERVER_ERROR" => Some(Self::Server),
            _ => None,
        }
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }

    /// A machine-readable `code` wins over the status line.
    pub fn classify(status: u16, code: Option<&str>) -> Self {
        code.and_then(Self::from_code)
            .unwrap_or_else(|| Self::from_status(status))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{} is required", .0.label())]
    MissingField(SignupField),
    #[error("{0}")]
    Network(String),
    #[error("Invalid JSON response")]
    InvalidResponse,
    #[error("{message}")]
    Rejected {
        status: u16,
        kind: RejectionKind,
        message: String,
    },
}

impl ApiError {
    /// Builds a rejection from a parsed non-2xx body.
    pub fn rejected(status: u16, body: &Value, fallback: &str) -> Self {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(fallback)
            .to_string();
        let code = body.get("code").and_then(Value::as_str);
        Self::Rejected {
            status,
            kind: RejectionKind::classify(status, code),
            message,
        }
    }

    pub fn kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Rejected { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Text shown to the user, both inline and in the error toast.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
