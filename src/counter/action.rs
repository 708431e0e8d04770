use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when decoding a counter action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The input was not an object of shape `{ "type": "..." }`.
    #[error("malformed action: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// An action understood by the counter reducer.
///
/// Actions travel as objects tagged by `type`. Tags other than `INCREMENT`
/// and `DECREMENT` decode to [`CounterAction::Unknown`], which the reducer
/// treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Increment,
    Decrement,
    #[serde(other)]
    Unknown,
}

impl CounterAction {
    /// Decode an action from its JSON object form.
    ///
    /// ```
    /// use tally::CounterAction;
    ///
    /// let action = CounterAction::from_json(r#"{"type":"INCREMENT"}"#).unwrap();
    /// assert_eq!(action, CounterAction::Increment);
    /// ```
    pub fn from_json(input: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(input)?)
    }

    /// The `type` tag of this action.
    ///
    /// [`CounterAction::Unknown`] does not keep the tag it was decoded from,
    /// so `{"type":"RESET"}` re-encodes as `{"type":"UNKNOWN"}`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for CounterAction {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(match tag {
            "INCREMENT" => Self::Increment,
            "DECREMENT" => Self::Decrement,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}
