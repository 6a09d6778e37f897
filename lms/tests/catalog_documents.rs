use chrono::NaiveDate;
use lms_documents::documents::factory;
use lms_documents::{Titled, BookEntity, ComicEntity, DictionaryEntity, Document, DocumentDto, DocumentEntity, DocumentKind, PeriodicalEntity, VolumeEntity};

fn catalog() -> Vec<Box<dyn Document>> {
    vec![
        Box::new(DocumentEntity::new("Notes")),
        Box::new(VolumeEntity::new("Les Misérables", "Hugo")),
        Box::new(BookEntity::with_availability("Dune", "Herbert", true)),
        Box::new(ComicEntity::new("Astérix", "Goscinny", "Uderzo")),
        Box::new(DictionaryEntity::new("Larousse", "Pierre Larousse")),
        Box::new(PeriodicalEntity::new("Le Monde", NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"))),
    ]
}

#[tokio::test]
async fn test_should_tag_every_kind() {
    let tags: Vec<&str> = catalog().iter().map(|d| d.type_name()).collect();
    assert_eq!(vec!["Document", "Volume", "Book", "Comic", "Dictionary", "Periodical"], tags);
}

#[tokio::test]
async fn test_should_serialize_type_title_and_extra_fields() {
    for doc in catalog() {
        let line = doc.serialize();
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(2 + doc.extra_fields().len(), fields.len());
        assert_eq!(doc.type_name(), fields[0]);
        assert_eq!(doc.title(), fields[1]);
    }
}

#[tokio::test]
async fn test_should_describe_every_kind() {
    let descriptions: Vec<String> = catalog().iter().map(|d| d.describe()).collect();
    assert_eq!(vec![
        "Document — Notes".to_string(),
        "Volume — \"Les Misérables\", auteur: Hugo".to_string(),
        "Livre — \"Dune\", auteur: Herbert, Disponible".to_string(),
        "BD — \"Astérix\", auteur: Goscinny, dessinateur: Uderzo".to_string(),
        "Dictionary — \"Larousse\", auteur: Pierre Larousse".to_string(),
        "Journal — \"Le Monde\", paru le 2024-03-15".to_string(),
    ], descriptions);
}

#[tokio::test]
async fn test_should_carry_documents_through_json() {
    for doc in catalog() {
        let json = DocumentDto::from(doc.as_ref()).to_json().expect("should write json");
        let dto = DocumentDto::from_json(json.as_str()).expect("should read json");
        let rebuilt = factory::create_document(&dto).expect("should rebuild document");
        assert_eq!(doc.kind(), rebuilt.kind());
        assert_eq!(doc.serialize(), rebuilt.serialize());
    }
}

#[tokio::test]
async fn test_should_lend_book() {
    let mut book = BookEntity::new("Dune", "Herbert");
    assert!(book.borrow());
    assert!(!book.borrow());
    book.return_item();
    book.return_item();
    assert!(book.is_available());
    assert_eq!(DocumentKind::Book, book.kind());
}
