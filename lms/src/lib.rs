//! Document model of a small library catalog.
//!
//! Every catalog document implements [`documents::domain::Document`], which
//! provides the type tag, the `;` separated serialization and the french
//! description of the document.

pub mod core {
    pub mod domain;
    pub mod library;
}

pub mod utils {
    pub mod date;
    pub mod logs;
}

pub mod documents;

pub use crate::core::domain::{Configuration, Titled};
pub use crate::core::library::{BookStatus, DocumentKind, LibraryError, LibraryResult};
pub use crate::documents::domain::Document;
pub use crate::documents::domain::model::{BookEntity, ComicEntity, DictionaryEntity, DocumentEntity, PeriodicalEntity, VolumeEntity};
pub use crate::documents::dto::DocumentDto;
