use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::RequestError,
    models::{
        data::Data, notification::Notification, options::Options, target::Target, topics::Topics,
    },
    utils::is_empty_value,
};

/// A single outbound message, assembled into the gateway's request body.
///
/// Fields are set once during construction; [`Request::build_body`] is a pure
/// derivation and can be called any number of times.
#[derive(Debug, Clone)]
pub struct Request {
    target: Target,
    notification: Option<Notification>,
    data: Option<Data>,
    options: Option<Options>,
    topics: Option<Topics>,
}

impl Request {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            notification: None,
            data: None,
            options: None,
            topics: None,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Attach a topic selector.
    ///
    /// A selector holding exactly one topic takes over the `to` field, so
    /// combining one with a registration id list would silently drop the
    /// whole list; that combination is rejected here.
    pub fn with_topics(mut self, topics: Topics) -> Result<Self, RequestError> {
        if matches!(self.target, Target::Multiple(_)) && topics.has_only_one_topic() {
            return Err(RequestError::TopicConflict);
        }

        self.topics = Some(topics);
        Ok(self)
    }

    /// Assemble the request body.
    ///
    /// Keys whose values the gateway treats as absent (null, false, zero,
    /// empty string, empty collection) are stripped from the result.
    pub fn build_body(&self) -> Map<String, Value> {
        let mut body = Map::new();

        if let Some(to) = self.to() {
            body.insert("to".to_string(), Value::String(to));
        }

        if let Some(registration_ids) = self.registration_ids() {
            body.insert(
                "registration_ids".to_string(),
                Value::from(registration_ids.to_vec()),
            );
        }

        if let Some(notification) = &self.notification {
            body.insert(
                "notification".to_string(),
                Value::Object(notification.to_map()),
            );
        }

        if let Some(data) = &self.data {
            body.insert("data".to_string(), Value::Object(data.to_map()));
        }

        if let Some(options) = self.options_map() {
            body.extend(options);
        }

        body.retain(|_, value| !is_empty_value(value));

        debug!(keys = body.len(), "Request body assembled");

        body
    }

    /// The `to` field: a single-string target, unless a single-topic selector
    /// is present, in which case the topic wins.
    fn to(&self) -> Option<String> {
        let mut to = match &self.target {
            Target::Single(target) => Some(target.clone()),
            Target::Multiple(_) => None,
        };

        if let Some(topic) = self.topics.as_ref().and_then(Topics::single_topic) {
            to = Some(topic.to_string());
        }

        to
    }

    fn registration_ids(&self) -> Option<&[String]> {
        match &self.target {
            Target::Multiple(tokens) => Some(tokens),
            Target::Single(_) => None,
        }
    }

    /// Delivery options, with the topic subscription expression merged in
    /// whenever the selector holds two or more topics. The expression is
    /// emitted even when no options were supplied.
    fn options_map(&self) -> Option<Map<String, Value>> {
        let mut options = self.options.as_ref().map(Options::to_map);

        if let Some(condition) = self.topics.as_ref().and_then(Topics::condition) {
            debug!(condition = %condition, "Merging topic condition into options");

            options
                .get_or_insert_with(Map::new)
                .insert("condition".to_string(), Value::String(condition));
        }

        options
    }
}
