use serde::Deserialize;

// ---------------------------------------------------------------------------
// CoachRecord – one row of the coaches file
// ---------------------------------------------------------------------------

/// A single coach profile, mapped from the CSV columns by name.
///
/// `Coach_Name`, `Born_in`, `Age` and `Status` are required columns (the
/// loader rejects a file that lacks any of them); `Picture` and
/// `Highlights` may be absent or empty. `Age` is kept as text and shown
/// verbatim, the file mixes numbers and strings in that column.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachRecord {
    #[serde(rename = "Coach_Name")]
    pub name: String,
    #[serde(rename = "Born_in")]
    pub born_in: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Picture", default)]
    pub picture: Option<String>,
    #[serde(rename = "Highlights", default)]
    pub highlights: Option<String>,
}

/// Highlights are stored as one free-text field with sentences separated
/// by a literal period-plus-space.
const HIGHLIGHT_SEPARATOR: &str = ". ";

impl CoachRecord {
    /// The picture filename, if the cell holds anything besides whitespace.
    pub fn picture_file(&self) -> Option<&str> {
        self.picture
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Split the highlights text into displayable items: split on `". "`,
    /// trim each fragment, and drop fragments that end up empty.
    pub fn highlight_items(&self) -> Vec<&str> {
        self.highlights
            .as_deref()
            .map(|text| {
                text.split(HIGHLIGHT_SEPARATOR)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// CoachTable – the full loaded table for one render cycle
// ---------------------------------------------------------------------------

/// All records from one read of the coaches file, in file order.
///
/// The table lives only for the render cycle that loaded it: the app
/// extracts the name list and the selected profile, then drops it.
#[derive(Debug, Clone, Default)]
pub struct CoachTable {
    pub records: Vec<CoachRecord>,
}

impl CoachTable {
    pub fn new(records: Vec<CoachRecord>) -> Self {
        CoachTable { records }
    }

    /// Distinct coach names in order of first appearance (not sorted).
    /// Duplicate rows keep their single entry at the first position.
    pub fn distinct_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            if !names.iter().any(|n| n == &record.name) {
                names.push(record.name.clone());
            }
        }
        names
    }

    /// First record whose name equals `name` exactly. Duplicates resolve
    /// to the earliest row.
    pub fn find(&self, name: &str) -> Option<&CoachRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Number of rows (not distinct names).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, highlights: Option<&str>) -> CoachRecord {
        CoachRecord {
            name: name.to_string(),
            born_in: "Somewhere".to_string(),
            age: "55".to_string(),
            status: "Active".to_string(),
            picture: None,
            highlights: highlights.map(str::to_string),
        }
    }

    #[test]
    fn distinct_names_keep_first_seen_order() {
        let table = CoachTable::new(vec![
            record("Zara", None),
            record("Ben", None),
            record("Zara", None),
            record("Ana", None),
        ]);
        assert_eq!(table.distinct_names(), vec!["Zara", "Ben", "Ana"]);
    }

    #[test]
    fn find_returns_first_match_for_duplicates() {
        let mut first = record("Zara", None);
        first.age = "48".to_string();
        let mut second = record("Zara", None);
        second.age = "61".to_string();

        let table = CoachTable::new(vec![first, second]);
        assert_eq!(table.find("Zara").unwrap().age, "48");
        assert!(table.find("Nobody").is_none());
    }

    #[test]
    fn highlights_split_on_period_space() {
        let r = record("Zara", Some("A. B. C"));
        assert_eq!(r.highlight_items(), vec!["A", "B", "C"]);
    }

    #[test]
    fn highlight_fragments_are_trimmed_and_empties_dropped() {
        let r = record("Zara", Some(" Won the cup.  Promoted twice. "));
        assert_eq!(r.highlight_items(), vec!["Won the cup", "Promoted twice"]);
    }

    #[test]
    fn missing_or_blank_highlights_yield_no_items() {
        assert!(record("Zara", None).highlight_items().is_empty());
        assert!(record("Zara", Some("   ")).highlight_items().is_empty());
    }

    #[test]
    fn picture_file_filters_blank_cells() {
        let mut r = record("Zara", None);
        assert_eq!(r.picture_file(), None);
        r.picture = Some("  ".to_string());
        assert_eq!(r.picture_file(), None);
        r.picture = Some("zara.png".to_string());
        assert_eq!(r.picture_file(), Some("zara.png"));
    }
}
