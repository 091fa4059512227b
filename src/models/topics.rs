#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
}

impl Connective {
    fn as_str(&self) -> &str {
        match self {
            Connective::And => "&&",
            Connective::Or => "||",
        }
    }
}

/// Topic selector: an ordered chain of topic names combined with boolean
/// connectives. One name addresses the topic directly; two or more compile
/// into a `condition` subscription expression.
#[derive(Debug, Clone, Default)]
pub struct Topics {
    clauses: Vec<(Connective, String)>,
}

impl Topics {
    pub fn subscribe(name: impl Into<String>) -> Self {
        Self {
            clauses: vec![(Connective::And, name.into())],
        }
    }

    pub fn and(mut self, name: impl Into<String>) -> Self {
        self.clauses.push((Connective::And, name.into()));
        self
    }

    pub fn or(mut self, name: impl Into<String>) -> Self {
        self.clauses.push((Connective::Or, name.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_only_one_topic(&self) -> bool {
        self.clauses.len() == 1
    }

    /// The bare topic name, when the selector holds exactly one.
    pub fn single_topic(&self) -> Option<&str> {
        match self.clauses.as_slice() {
            [(_, name)] => Some(name),
            _ => None,
        }
    }

    /// The subscription expression, e.g. `'a' in topics && 'b' in topics`.
    /// `None` unless the selector holds at least two topics.
    pub fn condition(&self) -> Option<String> {
        if self.clauses.len() < 2 {
            return None;
        }

        let mut expression = String::new();
        for (index, (connective, name)) in self.clauses.iter().enumerate() {
            if index > 0 {
                expression.push_str(&format!(" {} ", connective.as_str()));
            }
            expression.push_str(&format!("'{}' in topics", name));
        }

        Some(expression)
    }
}

impl<S: Into<String>> From<Vec<S>> for Topics {
    fn from(names: Vec<S>) -> Self {
        Self {
            clauses: names
                .into_iter()
                .map(|name| (Connective::And, name.into()))
                .collect(),
        }
    }
}
