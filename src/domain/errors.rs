use std::fmt::{Display, Formatter, Result as FmtResult};

use wasm_bindgen::JsValue;

/// Root error type for the crate
#[derive(Debug, Clone)]
pub enum AppError {
    Domain(DomainError),
    Infrastructure(InfrastructureError),
}

/// Domain layer errors
#[derive(Debug, Clone)]
pub enum DomainError {
    Format(FormatError),
    Config(ConfigError),
}

/// Failures while parsing or rendering locale-formatted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnparseableDate(String),
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}

/// Rejected runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidParameter(String),
    DeserializationFailed(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone)]
pub enum InfrastructureError {
    Dom(DomError),
}

/// Browser/DOM access failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    WindowUnavailable,
    DocumentUnavailable,
    ElementNotFound(String),
    InvalidSelector(String),
    NotAForm(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Format(e) => write!(f, "Format: {}", e),
            DomainError::Config(e) => write!(f, "Config: {}", e),
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FormatError::UnparseableDate(raw) => write!(f, "Unparseable date string: {:?}", raw),
            FormatError::InvalidCalendarDate { year, month, day } => {
                write!(f, "No such calendar date: {:04}-{:02}-{:02}", year, month, day)
            }
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ConfigError::DeserializationFailed(msg) => write!(f, "Deserialization failed: {}", msg),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Dom(e) => write!(f, "DOM: {}", e),
        }
    }
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomError::WindowUnavailable => write!(f, "Window object not available"),
            DomError::DocumentUnavailable => write!(f, "Document not available"),
            DomError::ElementNotFound(what) => write!(f, "Element not found: {}", what),
            DomError::InvalidSelector(selector) => write!(f, "Invalid selector: {:?}", selector),
            DomError::NotAForm(id) => write!(f, "Element #{} is not a form", id),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        AppError::Domain(DomainError::Format(error))
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Domain(DomainError::Config(error))
    }
}

impl From<DomError> for AppError {
    fn from(error: DomError) -> Self {
        AppError::Infrastructure(InfrastructureError::Dom(error))
    }
}

impl From<DomError> for InfrastructureError {
    fn from(error: DomError) -> Self {
        InfrastructureError::Dom(error)
    }
}

/// Boundary conversion for `#[wasm_bindgen]` signatures
impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
