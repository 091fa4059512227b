/// Destination of a push message: one addressable string (a device token or
/// a topic path) or an ordered list of registration tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for Target {
    fn from(token: &str) -> Self {
        Target::Single(token.to_string())
    }
}

impl From<String> for Target {
    fn from(token: String) -> Self {
        Target::Single(token)
    }
}

impl From<Vec<String>> for Target {
    fn from(tokens: Vec<String>) -> Self {
        Target::Multiple(tokens)
    }
}

impl From<Vec<&str>> for Target {
    fn from(tokens: Vec<&str>) -> Self {
        Target::Multiple(tokens.into_iter().map(str::to_string).collect())
    }
}
