use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<chrono::ParseError> for LibraryError {
    fn from(err: chrono::ParseError) -> Self {
        LibraryError::validation(
            format!("date parsing {:?}", err).as_str(), Some(err.to_string()))
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::runtime(err.as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for document conversions.
pub type LibraryResult<T> = Result<T, LibraryError>;

// DocumentKind is the explicit type tag carried by every document.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum DocumentKind {
    Document,
    Volume,
    Book,
    Comic,
    Dictionary,
    Periodical,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Document => "Document",
            DocumentKind::Volume => "Volume",
            DocumentKind::Book => "Book",
            DocumentKind::Comic => "Comic",
            DocumentKind::Dictionary => "Dictionary",
            DocumentKind::Periodical => "Periodical",
        }
    }

    // true for the author-bearing kinds
    pub fn is_volume(&self) -> bool {
        matches!(self, DocumentKind::Volume | DocumentKind::Book | DocumentKind::Comic | DocumentKind::Dictionary)
    }
}

impl TryFrom<&str> for DocumentKind {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Document" => Ok(DocumentKind::Document),
            "Volume" => Ok(DocumentKind::Volume),
            "Book" => Ok(DocumentKind::Book),
            "Comic" => Ok(DocumentKind::Comic),
            "Dictionary" => Ok(DocumentKind::Dictionary),
            "Periodical" => Ok(DocumentKind::Periodical),
            _ => Err(LibraryError::validation(
                format!("unknown document kind {:?}", s).as_str(), Some("kind".to_string()))),
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        *self == BookStatus::Available
    }

    // label used by the french description of a book
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Disponible",
            BookStatus::Borrowed => "Emprunté",
        }
    }
}

impl From<bool> for BookStatus {
    fn from(available: bool) -> Self {
        if available { BookStatus::Available } else { BookStatus::Borrowed }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => BookStatus::Available,
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, DocumentKind, LibraryError};

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
        assert!(matches!(LibraryError::from("boom".to_string()), LibraryError::Runtime{ message: _, reason_code: None }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("nope").expect_err("invalid json");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_document_kind() {
        let kinds = vec![
            DocumentKind::Document,
            DocumentKind::Volume,
            DocumentKind::Book,
            DocumentKind::Comic,
            DocumentKind::Dictionary,
            DocumentKind::Periodical,
        ];
        for kind in kinds {
            let str = kind.to_string();
            let parsed = DocumentKind::try_from(str.as_str()).expect("should parse kind");
            assert_eq!(kind, parsed);
        }
    }

    #[tokio::test]
    async fn test_should_reject_unknown_document_kind() {
        assert!(matches!(DocumentKind::try_from("Livre"), Err(LibraryError::Validation{ message: _, reason_code: _ })));
        assert!(DocumentKind::try_from("book").is_err());
    }

    #[tokio::test]
    async fn test_should_classify_volume_kinds() {
        assert!(DocumentKind::Dictionary.is_volume());
        assert!(DocumentKind::Comic.is_volume());
        assert!(!DocumentKind::Periodical.is_volume());
        assert!(!DocumentKind::Document.is_volume());
    }

    #[tokio::test]
    async fn test_should_format_book_status() {
        for status in vec![BookStatus::Available, BookStatus::Borrowed] {
            let str = status.to_string();
            assert_eq!(status, BookStatus::from(str));
        }
        assert_eq!(BookStatus::Available, BookStatus::from("Lost".to_string()));
        assert_eq!(BookStatus::Borrowed, BookStatus::from(false));
        assert!(BookStatus::from(true).is_available());
        assert_eq!("Emprunté", BookStatus::Borrowed.label());
    }
}
