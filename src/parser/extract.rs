//! Prefix-delimited fields
//!
//! A field starts right after its prefix (`c/`, `a/`, ...) and ends where the nearest prefix of
//! the same command family begins, or at the end of the line. Each family declares its set of
//! prefixes below; nothing else in the parser spells out field boundaries.
//!
//! A value cannot contain a prefix of its own family: `d/buy a/c unit` in an `add expense`
//! line ends the description at `a/`. There is no escaping.

use crate::ParseError;

pub const ADD: &[&str] = &["c/", "a/", "d/"];
pub const EDIT: &[&str] = &["c/", "i/", "a/", "d/"];
pub const DELETE: &[&str] = &["i/"];
pub const REDUCE: &[&str] = &["i/", "a/"];
pub const FIND: &[&str] = &["d/", "morethan/", "lessthan/"];
pub const RECURRING: &[&str] = &["to/", "c/", "a/", "d/"];
pub const SPLIT: &[&str] = &["a/", "n/", "d/"];
pub const BUDGET: &[&str] = &["c/", "b/"];

/// The trimmed text between the first `start` and the nearest following bounding prefix
///
/// `None` when `start` does not occur in `text`.
///
/// # Examples
/// ```rust
/// use budgetbuddy::parser::extract::{extract, ADD, FIND};
///
/// let line = "add expense c/Transport a/ 50 d/Bus Fare";
/// assert_eq!(extract(line, "c/", ADD), Some("Transport"));
/// assert_eq!(extract(line, "a/", ADD), Some("50"));
/// assert_eq!(extract(line, "d/", ADD), Some("Bus Fare"));
/// assert_eq!(extract(line, "morethan/", FIND), None);
/// ```
pub fn extract<'a>(text: &'a str, start: &str, bounding: &[&str]) -> Option<&'a str> {
    let begin = text.find(start)? + start.len();
    let rest = &text[begin..];
    let end = bounding
        .iter()
        .filter_map(|prefix| rest.find(prefix))
        .min()
        .unwrap_or_else(|| rest.len());
    Some(rest[..end].trim())
}

/// A field that must be there and must not be blank
pub(crate) fn required<'a>(
    text: &'a str,
    start: &str,
    bounding: &[&str],
    field: &'static str,
) -> Result<&'a str, ParseError> {
    match extract(text, start, bounding) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ParseError::MissingField(field)),
    }
}

/// A field that may be left out, but not left blank
pub(crate) fn optional<'a>(
    text: &'a str,
    start: &str,
    bounding: &[&str],
    field: &'static str,
) -> Result<Option<&'a str>, ParseError> {
    match extract(text, start, bounding) {
        None => Ok(None),
        Some("") => Err(ParseError::MissingField(field)),
        Some(value) => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add expense c/Housing a/3000 d/BTO", "c/", ADD, Some("Housing"))]
    #[case("add expense d/BTO a/3000 c/Housing", "c/", ADD, Some("Housing"))]
    #[case("add expense c/Housing a/3000 d/BTO", "d/", ADD, Some("BTO"))]
    #[case("add expense c/   a/3000 d/BTO", "c/", ADD, Some(""))]
    #[case("add expense c/Housing", "a/", ADD, None)]
    #[case(
        "find expenses d/Bruno Mars morethan/400 lessthan/300",
        "d/",
        FIND,
        Some("Bruno Mars")
    )]
    #[case(
        "find expenses d/Bruno Mars morethan/400 lessthan/300",
        "morethan/",
        FIND,
        Some("400")
    )]
    #[case(
        "find expenses lessthan/300 d/Bruno Mars morethan/400",
        "lessthan/",
        FIND,
        Some("300")
    )]
    #[case("rec newexpense to/2 c/Utility a/80 d/Phone bill", "to/", RECURRING, Some("2"))]
    #[case("split expenses a/100 n/4 d/Dinner at Joe's", "d/", SPLIT, Some("Dinner at Joe's"))]
    fn extracts_field(
        #[case] text: &str,
        #[case] start: &str,
        #[case] bounding: &[&str],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(extract(text, start, bounding), expected);
    }

    #[test]
    fn first_occurrence_wins() {
        let line = "add expense c/Housing a/10 d/rent c/Groceries";
        assert_eq!(extract(line, "c/", ADD), Some("Housing"));
    }

    #[test]
    fn prefix_inside_a_value_cuts_it() {
        let line = "add expense c/Utility a/400 d/buy a/c unit";
        assert_eq!(extract(line, "d/", ADD), Some("buy"));
        assert_eq!(extract(line, "a/", ADD), Some("400"));
    }

    #[test]
    fn only_declared_prefixes_bound_a_field() {
        // "b/" is not an add prefix
        let line = "add expense c/Others a/5 d/either a b/or c";
        assert_eq!(extract(line, "d/", ADD), Some("either a b/or c"));
    }

    #[test]
    fn non_ascii_text() {
        let line = "add expense c/Others a/5 d/café crème";
        assert_eq!(extract(line, "d/", ADD), Some("café crème"));
    }

    #[test]
    fn required_and_optional() {
        let line = "edit expense i/2 c/ a/10";
        assert_eq!(required(line, "i/", EDIT, "index"), Ok("2"));
        assert_eq!(
            required(line, "c/", EDIT, "category"),
            Err(ParseError::MissingField("category"))
        );
        assert_eq!(
            required(line, "d/", EDIT, "description"),
            Err(ParseError::MissingField("description"))
        );
        assert_eq!(optional(line, "d/", EDIT, "description"), Ok(None));
        assert_eq!(optional(line, "a/", EDIT, "amount"), Ok(Some("10")));
        assert_eq!(
            optional(line, "c/", EDIT, "category"),
            Err(ParseError::MissingField("category"))
        );
    }
}
