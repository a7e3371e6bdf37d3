use derive_more::Constructor;
use std::fmt::Display;

/// Source position of a line-level diagnostic. Lines are 1-based; fields
/// are comma-split per line, so column tracking would add nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct Loc {
    line: usize,
}

impl Loc {
    pub fn line(self) -> usize {
        self.line
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}", self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Located<T> {
    loc: Loc,
    val: T,
}

impl<T> Located<T> {
    pub fn loc(&self) -> Loc {
        self.loc
    }

    pub fn value(self) -> T {
        self.val
    }

    pub fn as_inner(&self) -> &T {
        &self.val
    }

    pub fn map<S, F>(self, f: F) -> Located<S>
    where
        F: FnOnce(T) -> S,
    {
        Located::new(self.loc, f(self.val))
    }
}

impl<T: Display> Display for Located<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc, self.val)
    }
}

/// Which grammar applies to the line currently being translated. The mode
/// starts at `Header` and never regresses; `Literal` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Header,
    Instruction,
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mnemonic which does not name anything in the namespace the grammar
    /// expects at that position.
    UnknownSymbol { what: &'static str, token: String },
    /// A token which had to be a number (address, header byte, or typed
    /// literal) but does not parse as one.
    MalformedNumber {
        token: String,
        expected: &'static str,
    },
    /// Fewer comma-separated fields than the line's grammar requires.
    OperandCount {
        form: &'static str,
        expected: usize,
        found: usize,
    },
    /// A grammar branch that is declared upstream but has no specified
    /// encoding; refusing is better than guessing one.
    UndefinedGrammar(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownSymbol { what, token } => {
                write!(f, "'{}' is not a known {}", token, what)
            }
            Error::MalformedNumber { token, expected } => {
                write!(f, "'{}' is not a valid {}", token, expected)
            }
            Error::OperandCount {
                form,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} comma-separated fields, found {}",
                form, expected, found
            ),
            Error::UndefinedGrammar(what) => {
                write!(f, "{} is declared but its encoding is undefined", what)
            }
        }
    }
}
