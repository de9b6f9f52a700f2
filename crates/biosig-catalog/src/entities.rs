//! Record types for the biosignature reference table.

use serde::Serialize;

/// Separator placed between field values when building the searchable text
/// of a record. A newline cannot be typed into the single-line search box,
/// so a term never matches across a field boundary.
pub const FIELD_SEPARATOR: &str = "\n";

// ---------------------------------------------------------------------------
// Biosignature
// ---------------------------------------------------------------------------

/// One row of the reference table. Field order is the canonical display
/// and search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Biosignature {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: &'static str,
    pub found_on: &'static str,
    pub missions: &'static str,
    pub description: &'static str,
}

impl Biosignature {
    /// Field values in canonical order: name, category, found on,
    /// missions, description.
    pub fn fields(&self) -> [&'static str; 5] {
        [self.name, self.category, self.found_on, self.missions, self.description]
    }

    /// Lower-cased concatenation of every field, used by the text gate.
    pub fn search_text(&self) -> String {
        self.fields().join(FIELD_SEPARATOR).to_lowercase()
    }

    /// Title of the expandable detail panel, e.g. `Stromatolites (Morphological)`.
    pub fn panel_title(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHANE: Biosignature = Biosignature {
        name: "Methane (CH₄)",
        category: "Chemical",
        found_on: "Mars, Titan",
        missions: "Curiosity, JWST",
        description: "Produced by microbial life and geological processes.",
    };

    #[test]
    fn test_search_text_covers_every_field() {
        let text = METHANE.search_text();
        for field in METHANE.fields() {
            assert!(text.contains(&field.to_lowercase()), "missing field {field:?}");
        }
        assert!(text.contains("curiosity, jwst"));
    }

    #[test]
    fn test_search_text_keeps_canonical_order() {
        let text = METHANE.search_text();
        let name_at = text.find("methane").unwrap();
        let missions_at = text.find("curiosity").unwrap();
        let description_at = text.find("produced").unwrap();
        assert!(name_at < missions_at && missions_at < description_at);
    }

    #[test]
    fn test_search_text_lowercases_non_ascii_names() {
        assert!(METHANE.search_text().starts_with("methane (ch₄)"));
    }

    #[test]
    fn test_panel_title() {
        assert_eq!(METHANE.panel_title(), "Methane (CH₄) (Chemical)");
    }

    #[test]
    fn test_serializes_category_as_type() {
        let json = serde_json::to_value(METHANE).unwrap();
        assert_eq!(json["type"], "Chemical");
        assert!(json.get("category").is_none());
        assert_eq!(json["found_on"], "Mars, Titan");
    }
}
