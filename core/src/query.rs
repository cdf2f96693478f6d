//! Multi-valued query parameter dictionary.

/// Decoded query parameters, in arrival order.
///
/// A key may appear more than once. Directives read the first value for a
/// key, with keys matched ASCII case-insensitively.
///
/// # Example
///
/// ```
/// use rest_directives_core::query::QueryParams;
///
/// let params: QueryParams = [("Order", "-name"), ("order", "id")].into_iter().collect();
/// assert_eq!(params.first("order"), Some("-name"));
/// assert_eq!(params.all("ORDER").count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a value.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value for `key`, if any.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in arrival order.
    pub fn all<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Number of key/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut params = QueryParams::new();
        params.push("order", "a");
        params.push("page", "2");
        params.push("order", "b");
        assert_eq!(params.first("order"), Some("a"));
        assert_eq!(params.all("order").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_missing_key() {
        let params = QueryParams::default();
        assert!(params.is_empty());
        assert_eq!(params.first("order"), None);
    }

    #[test]
    fn test_values_outlive_the_lookup_key() {
        let params = QueryParams::from(vec![("order".to_string(), "-name".to_string())]);
        let value = {
            let key = String::from("ORDER");
            params.first(&key)
        };
        assert_eq!(value, Some("-name"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let params = QueryParams::from(vec![("PAGE".to_string(), "4".to_string())]);
        assert_eq!(params.first("page"), Some("4"));
    }
}
