//! Dispatch operation names.

use crate::error::UnsupportedOperation;
use std::{fmt, str::FromStr};

/// The dispatch operations a registry exposes by name.
///
/// Registration is deliberately absent: it carries a callback payload and is
/// only reachable through the registry's typed API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Strict dispatch. A missing callback is an error.
    RespondWith,
    /// Permissive dispatch. A missing callback yields no value.
    TryRespondWith,
}

impl Operation {
    /// The name this operation is invoked by.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::RespondWith => "respond_with",
            Operation::TryRespondWith => "try_respond_with",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnsupportedOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "respond_with" => Ok(Operation::RespondWith),
            "try_respond_with" => Ok(Operation::TryRespondWith),
            other => Err(UnsupportedOperation::new(other)),
        }
    }
}
