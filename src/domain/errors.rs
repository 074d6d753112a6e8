/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Network(String),
    Parse(String),
    Ui(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            AppError::Ui(msg) => write!(f, "UI Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type alias
pub type FetchResult<T> = Result<T, AppError>;
