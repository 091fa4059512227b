use thiserror::Error;

use crate::models::options::MAX_TIME_TO_LIVE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("time_to_live of {0} seconds exceeds the gateway maximum of {max}", max = MAX_TIME_TO_LIVE)]
    TimeToLive(u64),

    #[error("invalid priority \"{0}\", expected \"normal\" or \"high\"")]
    InvalidPriority(String),

    #[error("a single-topic selector takes over the `to` field and would discard the registration id list")]
    TopicConflict,
}
