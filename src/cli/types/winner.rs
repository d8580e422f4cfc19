//! Match outcome as recorded on a fixture.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal stored in the `winner` column for a drawn match.
pub const DRAW: &str = "Draw";

/// Outcome of a fixture: the winning team's name, or a draw.
///
/// Stored and serialized as a plain string, so a draw is `"Draw"` and a
/// decisive result is the winner's team name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Winner {
    Team(String),
    Draw,
}

impl Winner {
    /// Interpret a stored winner value.
    pub fn parse(value: &str) -> Self {
        if value == DRAW {
            Winner::Draw
        } else {
            Winner::Team(value.to_string())
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }

    /// The winning team's name, if the match was decisive.
    pub fn team(&self) -> Option<&str> {
        match self {
            Winner::Team(name) => Some(name),
            Winner::Draw => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Winner::Team(name) => name,
            Winner::Draw => DRAW,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Winner {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Winner::parse(s))
    }
}

impl From<String> for Winner {
    fn from(value: String) -> Self {
        if value == DRAW {
            Winner::Draw
        } else {
            Winner::Team(value)
        }
    }
}

impl From<Winner> for String {
    fn from(value: Winner) -> Self {
        match value {
            Winner::Team(name) => name,
            Winner::Draw => DRAW.to_string(),
        }
    }
}
