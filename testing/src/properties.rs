//! Property-based testing utilities using proptest.
//!
//! Strategies generate schemas and raw directive strings the way clients
//! actually send them: mixed casing, optional signs, stray whitespace.

use proptest::prelude::*;
use proptest::sample::select;
use rest_directives_core::FieldSchema;

/// A plausible canonical field name (`Name`, `created_at`, `x1`).
pub fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,11}"
}

/// Between `1` and `max` field names, distinct case-insensitively.
pub fn field_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_map(
        field_name().prop_map(|name| name.to_lowercase()),
        field_name(),
        1..=max.max(1),
    )
    .prop_map(|names| {
        names
            .into_iter()
            .map(|(lower, name)| recase(&lower, &name))
            .collect()
    })
}

// Gives `lower` the casing pattern of `pattern` so canonical names are not
// all lowercase.
fn recase(lower: &str, pattern: &str) -> String {
    lower
        .chars()
        .zip(pattern.chars().chain(std::iter::repeat('a')))
        .map(|(c, p)| {
            if p.is_ascii_uppercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// A schema built from [`field_names`], returned together with its names.
pub fn schema(max_fields: usize) -> impl Strategy<Value = (FieldSchema, Vec<String>)> {
    field_names(max_fields).prop_map(|names| (FieldSchema::new(names.clone()), names))
}

/// An optional sign prefix and the direction it implies.
pub fn sign() -> impl Strategy<Value = (&'static str, bool)> {
    select(vec![("", true), ("+", true), ("-", false)])
}

/// `name` with each ASCII letter's case randomly flipped.
pub fn random_case(name: String) -> impl Strategy<Value = String> {
    let len = name.chars().count();
    proptest::collection::vec(any::<bool>(), len).prop_map(move |flips| {
        name.chars()
            .zip(flips)
            .map(|(c, flip)| {
                if !flip {
                    c
                } else if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    })
}

/// Up to three spaces or tabs.
pub fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// A valid order token for one of `fields`.
///
/// Yields the raw token, the canonical field it must resolve to, and
/// whether it is ascending.
pub fn order_token(fields: Vec<String>) -> impl Strategy<Value = (String, String, bool)> {
    (select(fields), sign(), padding(), padding()).prop_flat_map(
        |(field, (prefix, ascending), before, after)| {
            random_case(field.clone()).prop_map(move |cased| {
                (
                    format!("{before}{prefix}{cased}{after}"),
                    field.clone(),
                    ascending,
                )
            })
        },
    )
}

/// Up to `max` valid order tokens for `fields`.
pub fn order_tokens(
    fields: Vec<String>,
    max: usize,
) -> impl Strategy<Value = Vec<(String, String, bool)>> {
    proptest::collection::vec(order_token(fields), 1..=max.max(1))
}

/// Blank `order` values: empty or whitespace only.
pub fn blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,6}"
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use proptest::test_runner::TestRunner;

    #[test]
    fn test_field_names_are_distinct_ignoring_case() {
        let mut runner = TestRunner::default();
        runner
            .run(&field_names(8), |names| {
                let mut lowered: Vec<_> = names.iter().map(|n| n.to_lowercase()).collect();
                lowered.sort();
                lowered.dedup();
                prop_assert_eq!(lowered.len(), names.len());
                Ok(())
            })
            .unwrap_or_else(|e| panic!("{e}"));
    }

    #[test]
    fn test_recase_keeps_letters() {
        assert_eq!(recase("name", "Ab"), "Name");
        assert_eq!(recase("ab", "ABCD"), "AB");
    }
}
