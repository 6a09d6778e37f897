use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Titled;
use crate::core::library::{DocumentKind, LibraryResult};
use crate::documents::domain::Document;
use crate::documents::domain::model::{BookEntity, ComicEntity, PeriodicalEntity, VolumeEntity};
use crate::utils::date::{optional_serializer, parse_date};

// DocumentDto is a data transfer object carrying any kind of document as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub kind: DocumentKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustrator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_serializer")]
    pub publication_date: Option<NaiveDate>,
}

impl DocumentDto {
    pub fn new(kind: DocumentKind, title: &str) -> DocumentDto {
        DocumentDto {
            kind,
            title: title.to_string(),
            author: None,
            illustrator: None,
            available: None,
            publication_date: None,
        }
    }

    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> LibraryResult<DocumentDto> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&VolumeEntity> for DocumentDto {
    fn from(other: &VolumeEntity) -> Self {
        Self {
            author: Some(other.author().to_string()),
            ..DocumentDto::new(other.kind(), other.title())
        }
    }
}

impl From<&BookEntity> for DocumentDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            author: Some(other.author().to_string()),
            available: Some(other.is_available()),
            ..DocumentDto::new(other.kind(), other.title())
        }
    }
}

impl From<&ComicEntity> for DocumentDto {
    fn from(other: &ComicEntity) -> Self {
        Self {
            author: Some(other.author().to_string()),
            illustrator: Some(other.illustrator().to_string()),
            ..DocumentDto::new(other.kind(), other.title())
        }
    }
}

impl From<&PeriodicalEntity> for DocumentDto {
    fn from(other: &PeriodicalEntity) -> Self {
        Self {
            publication_date: Some(other.publication_date()),
            ..DocumentDto::new(other.kind(), other.title())
        }
    }
}

// Captures any document through its extra fields, which follow the declared
// order of each kind.
impl From<&dyn Document> for DocumentDto {
    fn from(other: &dyn Document) -> Self {
        let mut dto = DocumentDto::new(other.kind(), other.title());
        let mut fields = other.extra_fields().into_iter();
        if other.kind().is_volume() {
            dto.author = fields.next();
        }
        match other.kind() {
            DocumentKind::Book => {
                dto.available = fields.next().map(|f| f == "true");
            }
            DocumentKind::Comic => {
                dto.illustrator = fields.next();
            }
            DocumentKind::Periodical => {
                dto.publication_date = fields.next()
                    .and_then(|f| parse_date(f.as_str()).ok());
            }
            _ => {}
        }
        dto
    }
}
