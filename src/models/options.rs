use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::RequestError, utils::to_json_object};

/// Upper bound the gateway accepts for `time_to_live`: four weeks in seconds.
pub const MAX_TIME_TO_LIVE: u64 = 2_419_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(RequestError::InvalidPriority(other.to_string())),
        }
    }
}

/// Delivery-control parameters, passed through to the gateway uninterpreted
/// by the body builder.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutable_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_while_idle: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_package_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = Some(collapse_key.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_content_available(mut self, content_available: bool) -> Self {
        self.content_available = Some(content_available);
        self
    }

    pub fn with_mutable_content(mut self, mutable_content: bool) -> Self {
        self.mutable_content = Some(mutable_content);
        self
    }

    pub fn with_delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.delay_while_idle = Some(delay_while_idle);
        self
    }

    /// Fails when the requested lifetime exceeds [`MAX_TIME_TO_LIVE`].
    pub fn with_time_to_live(mut self, seconds: u64) -> Result<Self, RequestError> {
        if seconds > MAX_TIME_TO_LIVE {
            return Err(RequestError::TimeToLive(seconds));
        }

        self.time_to_live = Some(seconds);
        Ok(self)
    }

    pub fn with_restricted_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.restricted_package_name = Some(package_name.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn to_map(&self) -> Map<String, Value> {
        to_json_object(self)
    }
}
