use ggez::GameError;
use log::SetLoggerError;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorKind {
    Game(GameError),
    Logger(SetLoggerError),
}

impl Display for AppErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(e) => write!(f, "ggez: {}", e),
            Self::Logger(e) => write!(f, "logger: {}", e),
        }
    }
}

#[must_use]
pub struct AppError {
    kind: AppErrorKind,
    /// Innermost step first
    trace: Vec<String>,
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        AppErrorKind::Game(e).into()
    }
}

impl From<SetLoggerError> for AppError {
    fn from(e: SetLoggerError) -> Self {
        AppErrorKind::Logger(e).into()
    }
}

impl From<AppErrorKind> for AppError {
    fn from(kind: AppErrorKind) -> Self {
        Self { kind, trace: vec![] }
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, step: S) -> Self {
        self.trace.push(step.to_string());
        self
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for step in self.trace.iter().rev() {
            write!(f, "\n in {}", step)?;
        }
        Ok(())
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.kind)?;
        Display::fmt(self, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            AppErrorKind::Game(e) => Some(e),
            AppErrorKind::Logger(e) => Some(e),
        }
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, step: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, step: S) -> Self {
        self.map_err(|e| e.with_trace_step(step))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let result: AppResult = Err(AppError::from(GameError::CustomError(
        "/arial.ttf not found".to_string(),
    )));
    let error = result
        .with_trace_step("load_font")
        .with_trace_step("App::new")
        .unwrap_err();

    assert!(matches!(error.kind, AppErrorKind::Game(_)));
    assert!(error.source().is_some());

    let text = error.to_string();
    assert!(text.contains("/arial.ttf not found"), "{}", text);
    let outer = text.find(" in App::new").unwrap();
    let inner = text.find(" in load_font").unwrap();
    assert!(outer < inner, "{}", text);
}
