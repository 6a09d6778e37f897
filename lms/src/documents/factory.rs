use tracing::warn;
use crate::core::library::{DocumentKind, LibraryError, LibraryResult};
use crate::documents::domain::Document;
use crate::documents::domain::model::{BookEntity, ComicEntity, DictionaryEntity, DocumentEntity, PeriodicalEntity, VolumeEntity};
use crate::documents::dto::DocumentDto;

pub fn create_document(dto: &DocumentDto) -> LibraryResult<Box<dyn Document>> {
    let title = dto.title.as_str();
    let doc: Box<dyn Document> = match dto.kind {
        DocumentKind::Document => Box::new(DocumentEntity::new(title)),
        DocumentKind::Volume => Box::new(VolumeEntity::new(title, required(dto, "author", &dto.author)?)),
        DocumentKind::Book => Box::new(BookEntity::with_availability(
            title, required(dto, "author", &dto.author)?, dto.available.unwrap_or(true))),
        DocumentKind::Comic => Box::new(ComicEntity::new(
            title, required(dto, "author", &dto.author)?, required(dto, "illustrator", &dto.illustrator)?)),
        DocumentKind::Dictionary => Box::new(DictionaryEntity::new(title, required(dto, "author", &dto.author)?)),
        DocumentKind::Periodical => {
            let date = dto.publication_date.ok_or_else(|| missing(dto, "publication_date"))?;
            Box::new(PeriodicalEntity::new(title, date))
        }
    };
    Ok(doc)
}

fn required<'a>(dto: &DocumentDto, field: &str, value: &'a Option<String>) -> LibraryResult<&'a str> {
    value.as_deref().ok_or_else(|| missing(dto, field))
}

fn missing(dto: &DocumentDto, field: &str) -> LibraryError {
    warn!(kind = %dto.kind, title = dto.title.as_str(), field, "rejected document");
    LibraryError::validation(
        format!("{} {:?} requires {}", dto.kind, dto.title, field).as_str(), Some(field.to_string()))
}
