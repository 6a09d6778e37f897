use crate::core::domain::Titled;
use crate::core::library::DocumentKind;

pub mod model;

/// Field delimiter of the flat serialization format. Values are not escaped.
pub const FIELD_DELIMITER: &str = ";";

/// Capability set shared by every document kind of the catalog.
///
/// Implementors only have to report their kind and their variant-specific
/// fields; `serialize` and `describe` are derived from those unless a kind
/// needs its own wording.
pub trait Document: Titled {
    fn kind(&self) -> DocumentKind;

    /// Tag of the concrete kind, e.g. `"Book"` or `"Comic"`.
    fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Fields beyond the title, in their declared order.
    fn extra_fields(&self) -> Vec<String> {
        vec![]
    }

    /// Joins type, title and extra fields with [`FIELD_DELIMITER`].
    fn serialize(&self) -> String {
        let mut fields = vec![self.type_name().to_string(), self.title().to_string()];
        fields.extend(self.extra_fields());
        fields.join(FIELD_DELIMITER)
    }

    fn describe(&self) -> String {
        format!("{} — {}", self.type_name(), self.title())
    }
}
