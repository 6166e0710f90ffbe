use serde::{Deserialize, Serialize};

/// Severity of a check or stage verdict, ordered by operator concern.
///
/// The derived `Ord` is the total order the aggregation model relies on:
/// combining two outcomes keeps the higher of the two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Nothing of note found.
    Ok,
    /// Noteworthy but not actionable on its own.
    Warning,
    /// Some sub-steps succeeded, others did not.
    Partial,
    /// A check or stage could not complete.
    Errored,
    /// A fault signature was found on the device.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Partial => "partial",
            Severity::Errored => "errored",
            Severity::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

/// Immutable verdict: a severity level plus the messages that produced it.
///
/// Outcomes are never mutated in place; they are combined into new outcomes.
/// Messages are kept as a list so that folding many findings into one final
/// verdict loses no individual message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub level: Severity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl Outcome {
    /// Identity outcome: `Ok` with no messages. `combine` with this is a no-op.
    pub fn ok() -> Self {
        Self {
            level: Severity::Ok,
            messages: Vec::new(),
        }
    }

    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            messages: vec![message.into()],
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn partial(message: impl Into<String>) -> Self {
        Self::new(Severity::Partial, message)
    }

    pub fn errored(message: impl Into<String>) -> Self {
        Self::new(Severity::Errored, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    /// Combine two outcomes: the higher level wins, messages are concatenated
    /// in combination order. Associative, with [`Outcome::ok`] as identity.
    pub fn combine(mut self, other: Outcome) -> Outcome {
        self.level = self.level.max(other.level);
        self.messages.extend(other.messages);
        self
    }

    /// All messages joined into one display string.
    pub fn message(&self) -> String {
        self.messages.join("\n")
    }

    pub fn is_ok(&self) -> bool {
        self.level == Severity::Ok
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::ok()
    }
}

/// Fold a sequence of outcomes into one aggregate via [`Outcome::combine`].
impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Outcome::ok(), Outcome::combine)
    }
}
