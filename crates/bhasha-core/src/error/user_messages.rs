//! User-facing error messages
//!
//! The add-in speaks Bengali to its users; technical detail stays in the
//! `Display` output and the logs.

use super::types::{BhashaError, ErrorKind};

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credential or permission problems
    Authentication,
    /// Rate limiting / server overload
    RateLimit,
    /// Network connectivity issues
    Network,
    /// The model answered with something unusable
    Response,
    /// Settings problems
    Configuration,
    /// Document host problems
    Document,
    /// Nothing usable to work on
    Input,
    /// Anything else
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication Error",
            Self::RateLimit => "Rate Limit Exceeded",
            Self::Network => "Network Error",
            Self::Response => "Invalid Response",
            Self::Configuration => "Configuration Error",
            Self::Document => "Document Error",
            Self::Input => "Invalid Input",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// Localized message shown to the user
    pub message: String,
    /// Whether trying again can help
    pub is_recoverable: bool,
    /// Original technical error code
    pub error_code: String,
}

impl UserFriendlyError {
    /// Format the error for display
    pub fn format_display(&self) -> String {
        format!("{}: {}", self.category.display_name(), self.message)
    }
}

const MSG_AUTH: &str = "API Key বা অনুমতি (permission) সংক্রান্ত সমস্যা হয়েছে। সেটিংস চেক করুন।";
const MSG_BUSY: &str = "সার্ভার এখন ব্যস্ত। কিছুক্ষণ পর আবার চেষ্টা করুন।";
const MSG_NETWORK: &str = "সার্ভার রেসপন্স করেনি। ইন্টারনেট সংযোগ চেক করুন।";
const MSG_RESPONSE: &str = "AI থেকে সঠিক উত্তর পাওয়া যায়নি। আবার চেষ্টা করুন।";
const MSG_CONFIG: &str = "সেটিংসে সমস্যা আছে। অনুগ্রহ করে সেটিংস চেক করুন।";
const MSG_DOCUMENT: &str = "ডকুমেন্ট পড়তে বা পরিবর্তন করতে সমস্যা হয়েছে।";
const MSG_GENERIC: &str = "ত্রুটি হয়েছে। আবার চেষ্টা করুন।";

impl BhashaError {
    /// Convert to a localized, user-facing error
    pub fn to_user_friendly(&self) -> UserFriendlyError {
        let (category, message, is_recoverable) = match (self.kind(), self) {
            (ErrorKind::Auth, _) => (ErrorCategory::Authentication, MSG_AUTH, false),
            (ErrorKind::Client, _) => (ErrorCategory::Configuration, MSG_CONFIG, false),
            (ErrorKind::ServerBusy, _) => (ErrorCategory::RateLimit, MSG_BUSY, true),
            (ErrorKind::Network, _) => (ErrorCategory::Network, MSG_NETWORK, true),
            (ErrorKind::InvalidStructure | ErrorKind::Parse, _) => {
                (ErrorCategory::Response, MSG_RESPONSE, true)
            }
            (ErrorKind::Other, BhashaError::Config { .. }) => {
                (ErrorCategory::Configuration, MSG_CONFIG, false)
            }
            (ErrorKind::Other, BhashaError::Document { .. }) => {
                (ErrorCategory::Document, MSG_DOCUMENT, true)
            }
            // Input errors already carry text meant for the user
            (ErrorKind::Other, BhashaError::InvalidInput { message, .. }) => {
                (ErrorCategory::Input, message.as_str(), true)
            }
            (ErrorKind::Other, _) => (ErrorCategory::Internal, MSG_GENERIC, true),
        };

        UserFriendlyError {
            category,
            message: message.to_string(),
            is_recoverable,
            error_code: self.error_code().to_string(),
        }
    }

    /// Shorthand for the localized message alone
    pub fn user_message(&self) -> String {
        self.to_user_friendly().message
    }
}
