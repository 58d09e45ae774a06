//! Glossary CSV parsing
//!
//! Row layout (header row is skipped):
//! `id, term, definition, category, source, needs_review, aliases, related_terms, image_url`
//!
//! Rows are never rejected for shape. Missing trailing fields take defaults,
//! extra fields are ignored, and only rows without an id or display name are
//! dropped.

use super::term::{Category, Provenance, Term};

/// Number of columns in a glossary row.
pub const FIELD_COUNT: usize = 9;

const LIST_SEPARATOR: char = '|';

/// Split one CSV line into trimmed fields.
///
/// A `"` toggles the quoted state; commas inside quotes are literal. A doubled
/// `""` inside a quoted field produces one literal quote.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Split a pipe-delimited list, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a term from split fields. `None` if id or display name is empty.
pub fn parse_row(fields: &[String]) -> Option<Term> {
    let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");

    let id = field(0).trim();
    let display_name = field(1).trim();
    if id.is_empty() || display_name.is_empty() {
        return None;
    }

    let image_ref = field(8).trim();

    Some(Term {
        id: id.to_string(),
        display_name: display_name.to_string(),
        definition: field(2).trim().to_string(),
        category: Category::from_label(field(3)).unwrap_or_default(),
        provenance: Provenance::from_label(field(4)).unwrap_or_default(),
        needs_review: field(5).trim().eq_ignore_ascii_case("true"),
        aliases: split_list(field(6)),
        related_ids: split_list(field(7)),
        image_ref: (!image_ref.is_empty()).then(|| image_ref.to_string()),
    })
}

/// Parse a whole CSV document into terms, in row order.
pub fn parse_terms(raw: &str) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(&split_csv_line(line)) {
            Some(term) => terms.push(term),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("[Glossary] Dropped {} rows without id or term", dropped);
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,term,definition,category,source,needs_review,aliases,related_terms,image_url";

    #[test]
    fn test_split_plain_line() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_commas_inside_quotes() {
        let fields = split_csv_line(r#"rebar,Rebar,"Steel bar, ribbed, for concrete",Materials"#);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[2], "Steel bar, ribbed, for concrete");
    }

    #[test]
    fn test_split_doubled_quote_is_literal() {
        let fields = split_csv_line(r#"x,"The ""as-built"" set",y"#);
        assert_eq!(fields[1], r#"The "as-built" set"#);
    }

    #[test]
    fn test_split_trailing_empty_field() {
        let fields = split_csv_line("a,b,");
        assert_eq!(fields, vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(split_list("PW1| |P||"), vec!["PW1", "P"]);
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_parse_reference_row() {
        let term = parse_row(&split_csv_line(
            "permit,Permit,Some def,Documents,game,true,PW1|P,inspection,",
        ))
        .unwrap();

        assert_eq!(term.id, "permit");
        assert_eq!(term.display_name, "Permit");
        assert_eq!(term.definition, "Some def");
        assert_eq!(term.category, Category::Documents);
        assert_eq!(term.provenance, Provenance::Game);
        assert!(term.needs_review);
        assert_eq!(term.aliases, vec!["PW1", "P"]);
        assert_eq!(term.related_ids, vec!["inspection"]);
        assert_eq!(term.image_ref, None);
    }

    #[test]
    fn test_missing_trailing_fields_take_defaults() {
        let term = parse_row(&split_csv_line("slab,Slab,A flat concrete plate")).unwrap();
        assert_eq!(term.category, Category::General);
        assert_eq!(term.provenance, Provenance::Game);
        assert!(!term.needs_review);
        assert!(term.aliases.is_empty());
        assert!(term.related_ids.is_empty());
        assert_eq!(term.image_ref, None);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        let term = parse_row(&split_csv_line("a,A,def,Plumbing,wiki,yes")).unwrap();
        assert_eq!(term.category, Category::General);
        assert_eq!(term.provenance, Provenance::Game);
        assert!(!term.needs_review);
    }

    #[test]
    fn test_needs_review_case_insensitive() {
        let term = parse_row(&split_csv_line("a,A,def,Site,industry,TRUE")).unwrap();
        assert!(term.needs_review);
        assert_eq!(term.provenance, Provenance::Industry);
    }

    #[test]
    fn test_image_ref_present() {
        let term = parse_row(&split_csv_line("a,A,def,Site,industry,false,,,img/a.png")).unwrap();
        assert_eq!(term.image_ref.as_deref(), Some("img/a.png"));
    }

    #[test]
    fn test_rows_without_id_or_name_are_dropped() {
        assert!(parse_row(&split_csv_line(",Name,def")).is_none());
        assert!(parse_row(&split_csv_line("id,  ,def")).is_none());
        assert!(parse_row(&[]).is_none());
    }

    #[test]
    fn test_parse_terms_skips_header_and_blank_lines() {
        let raw = format!(
            "{}\r\nslab,Slab,Plate\r\n\r\n   \r\n,Orphan,no id\r\nbeam,Beam,Horizontal member\r\n",
            HEADER
        );
        let terms = parse_terms(&raw);
        let ids: Vec<&str> = terms.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["slab", "beam"]);
    }

    #[test]
    fn test_parse_terms_header_only() {
        assert!(parse_terms(HEADER).is_empty());
        assert!(parse_terms("").is_empty());
    }
}
