use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two restricted snippet grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Python-like: `name = value` and `print(...)`.
    Python,
    /// Go-like: `name := value` and `fmt.Println(...)`.
    Go,
}

impl Dialect {
    /// The tag used by callers to select this dialect.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Go => "go",
        }
    }

    /// Conventional file name used for error reporting.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Python => "main.py",
            Self::Go => "main.go",
        }
    }

    /// The text that opens a print-like call in this dialect.
    pub fn print_opener(self) -> &'static str {
        match self {
            Self::Python => "print(",
            Self::Go => "fmt.Println(",
        }
    }

    /// The assignment operator recognised by this dialect.
    pub fn assign_operator(self) -> &'static str {
        match self {
            Self::Python => "=",
            Self::Go => ":=",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A dialect tag that names neither supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}' (expected \"python\" or \"go\")")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Self::Python),
            "go" => Ok(Self::Go),
            other => Err(UnknownDialect(other.to_string())),
        }
    }
}
