use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use tracing::{debug, warn};
use crate::core::domain::Titled;
use crate::core::library::{BookStatus, DocumentKind};
use crate::documents::domain::Document;
use crate::utils::date::format_date;

// DocumentEntity is a plain catalog document that only carries a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntity {
    title: String,
}

impl DocumentEntity {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Titled for DocumentEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }
}

impl Document for DocumentEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Document
    }
}

// VolumeEntity abstracts an author-attributed document. Book, comic and dictionary
// are built on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeEntity {
    document: DocumentEntity,
    author: String,
}

impl VolumeEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            document: DocumentEntity::new(title),
            author: author.to_string(),
        }
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    // description shared by every volume kind that keeps the generic wording
    fn describe_as(&self, kind: DocumentKind) -> String {
        format!("{} — \"{}\", auteur: {}", kind, self.title(), self.author)
    }
}

impl Titled for VolumeEntity {
    fn title(&self) -> &str {
        self.document.title()
    }
}

impl Document for VolumeEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Volume
    }

    fn extra_fields(&self) -> Vec<String> {
        vec![self.author.to_string()]
    }

    fn describe(&self) -> String {
        self.describe_as(self.kind())
    }
}

// BookEntity is a volume that can be borrowed and returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    volume: VolumeEntity,
    status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self::with_status(title, author, BookStatus::Available)
    }

    pub fn with_status(title: &str, author: &str, status: BookStatus) -> Self {
        Self {
            volume: VolumeEntity::new(title, author),
            status,
        }
    }

    pub fn with_availability(title: &str, author: &str, available: bool) -> Self {
        Self::with_status(title, author, BookStatus::from(available))
    }

    pub fn author(&self) -> &str {
        self.volume.author()
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Marks the book as borrowed. Returns `false`, leaving the book untouched,
    /// when it is already out.
    pub fn borrow(&mut self) -> bool {
        if !self.status.is_available() {
            warn!(title = self.title(), "book is already borrowed");
            return false;
        }
        self.status = BookStatus::Borrowed;
        debug!(title = self.title(), status = %self.status, "book borrowed");
        true
    }

    /// Puts the book back on the shelf whatever its current status.
    pub fn return_item(&mut self) {
        self.status = BookStatus::Available;
        debug!(title = self.title(), status = %self.status, "book returned");
    }
}

impl Titled for BookEntity {
    fn title(&self) -> &str {
        self.volume.title()
    }
}

impl Document for BookEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Book
    }

    fn extra_fields(&self) -> Vec<String> {
        vec![self.author().to_string(), self.is_available().to_string()]
    }

    fn describe(&self) -> String {
        format!("Livre — \"{}\", auteur: {}, {}", self.title(), self.author(), self.status.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicEntity {
    volume: VolumeEntity,
    illustrator: String,
}

impl ComicEntity {
    pub fn new(title: &str, author: &str, illustrator: &str) -> Self {
        Self {
            volume: VolumeEntity::new(title, author),
            illustrator: illustrator.to_string(),
        }
    }

    pub fn author(&self) -> &str {
        self.volume.author()
    }

    pub fn illustrator(&self) -> &str {
        self.illustrator.as_str()
    }
}

impl Titled for ComicEntity {
    fn title(&self) -> &str {
        self.volume.title()
    }
}

impl Document for ComicEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Comic
    }

    fn extra_fields(&self) -> Vec<String> {
        vec![self.author().to_string(), self.illustrator.to_string()]
    }

    fn describe(&self) -> String {
        format!("BD — \"{}\", auteur: {}, dessinateur: {}", self.title(), self.author(), self.illustrator)
    }
}

// DictionaryEntity adds nothing to a volume, it only carries its own tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntity {
    volume: VolumeEntity,
}

impl DictionaryEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            volume: VolumeEntity::new(title, author),
        }
    }

    pub fn author(&self) -> &str {
        self.volume.author()
    }
}

impl Titled for DictionaryEntity {
    fn title(&self) -> &str {
        self.volume.title()
    }
}

impl Document for DictionaryEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Dictionary
    }

    fn extra_fields(&self) -> Vec<String> {
        self.volume.extra_fields()
    }

    fn describe(&self) -> String {
        self.volume.describe_as(self.kind())
    }
}

// PeriodicalEntity abstracts a dated issue of a newspaper or magazine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicalEntity {
    document: DocumentEntity,
    publication_date: NaiveDate,
}

impl PeriodicalEntity {
    pub fn new(title: &str, publication_date: NaiveDate) -> Self {
        Self {
            document: DocumentEntity::new(title),
            publication_date,
        }
    }

    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }
}

impl Titled for PeriodicalEntity {
    fn title(&self) -> &str {
        self.document.title()
    }
}

impl Document for PeriodicalEntity {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Periodical
    }

    fn extra_fields(&self) -> Vec<String> {
        vec![format_date(&self.publication_date)]
    }

    fn describe(&self) -> String {
        format!("Journal — \"{}\", paru le {}", self.title(), format_date(&self.publication_date))
    }
}

macro_rules! display_as_description {
    ($($entity:ty),+) => {
        $(
            impl Display for $entity {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.describe())
                }
            }
        )+
    };
}

display_as_description!(DocumentEntity, VolumeEntity, BookEntity, ComicEntity, DictionaryEntity, PeriodicalEntity);
