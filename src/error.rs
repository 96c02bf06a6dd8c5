use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    /// The preferences describe a board that can't be played on
    InvalidPrefs(String),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

// ggez callbacks can only return a GameError
impl From<Error> for GameError {
    fn from(e: Error) -> Self {
        GameError::CustomError(e.to_string())
    }
}

impl Error {
    pub fn invalid_prefs<S: ToString>(reason: S) -> Self {
        Self(ErrorType::InvalidPrefs(reason.to_string()), vec![])
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_innermost_last() {
    let res: Result = Err(Error::invalid_prefs("cell size is 0"));
    let err = res
        .with_trace_step("Prefs::validate")
        .with_trace_step("main")
        .unwrap_err();

    assert!(matches!(err.error_type(), ErrorType::InvalidPrefs(_)));
    let printed = format!("{}", err);
    let main_at = printed.find(" in main").unwrap();
    let validate_at = printed.find(" in Prefs::validate").unwrap();
    assert!(main_at < validate_at, "{}", printed);
    assert!(printed.contains("cell size is 0"));
}
