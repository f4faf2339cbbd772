use crate::error::BhashaError;
use serde::Serialize;

pub(crate) const NOTICE_RUN_DONE: &str = "বিশ্লেষণ সম্পন্ন হয়েছে ✓";
pub(crate) const NOTICE_NO_TEXT: &str = "টেক্সট নির্বাচন করুন বা কার্সার রাখুন";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    /// The localized message of `error`
    pub fn from_error(error: &BhashaError) -> Self {
        Self::error(error.user_message())
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
