use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::to_json_object;

/// User-visible alert block of a push message.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_args: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_args: Option<Vec<String>>,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            sound: None,
            badge: None,
            icon: None,
            tag: None,
            color: None,
            click_action: None,
            body_loc_key: None,
            body_loc_args: None,
            title_loc_key: None,
            title_loc_args: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_click_action(mut self, click_action: impl Into<String>) -> Self {
        self.click_action = Some(click_action.into());
        self
    }

    pub fn with_body_loc_key(mut self, key: impl Into<String>) -> Self {
        self.body_loc_key = Some(key.into());
        self
    }

    pub fn with_body_loc_args(mut self, args: Vec<String>) -> Self {
        self.body_loc_args = Some(args);
        self
    }

    pub fn with_title_loc_key(mut self, key: impl Into<String>) -> Self {
        self.title_loc_key = Some(key.into());
        self
    }

    pub fn with_title_loc_args(mut self, args: Vec<String>) -> Self {
        self.title_loc_args = Some(args);
        self
    }

    pub fn to_map(&self) -> Map<String, Value> {
        to_json_object(self)
    }
}
