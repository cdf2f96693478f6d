//! Field schemas and allow-lists.
//!
//! A [`FieldSchema`] is the ahead-of-time declaration of which names a
//! resource exposes to list directives:
//!
//! - **fields** may appear in `order=`
//! - **relations** may appear in `include=`
//!
//! Lookups are case-insensitive and always return the *canonical* casing
//! used at declaration time.
//!
//! Schemas are usually attached to a type through [`Schema`], either by hand
//! or with `#[derive(Schema)]` from `rest-directives-macros`.
//!
//! # Examples
//!
//! ```
//! use rest_directives_core::schema::FieldSchema;
//!
//! let schema = FieldSchema::new(["Name", "CreatedAt"]).with_relations(["Author"]);
//!
//! assert_eq!(schema.resolve_field("createdat"), Some("CreatedAt"));
//! assert_eq!(schema.resolve_relation("AUTHOR"), Some("Author"));
//! assert_eq!(schema.resolve_field("author"), None);
//! ```

use std::collections::{HashMap, HashSet};

/// Ordered set of canonical names with a lowercase index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NameSet {
    canonical: Vec<String>,
    by_lowercase: HashMap<String, usize>,
}

impl NameSet {
    fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.into());
        }
        set
    }

    // First declaration wins when two names collide case-insensitively.
    fn insert(&mut self, name: String) {
        let key = name.to_lowercase();
        if key.is_empty() || self.by_lowercase.contains_key(&key) {
            return;
        }
        self.by_lowercase.insert(key, self.canonical.len());
        self.canonical.push(name);
    }

    fn resolve(&self, requested: &str) -> Option<&str> {
        if requested.is_empty() {
            return None;
        }
        self.by_lowercase
            .get(&requested.to_lowercase())
            .and_then(|&index| self.canonical.get(index))
            .map(String::as_str)
    }

    fn iter(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    fn len(&self) -> usize {
        self.canonical.len()
    }
}

/// The names a resource exposes to list directives.
///
/// Built once per resource type and reused for every request. A
/// `FieldSchema` is never mutated by the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: NameSet,
    relations: NameSet,
}

impl FieldSchema {
    /// Create a schema from orderable field names.
    ///
    /// Names are kept in declaration order. Empty names are ignored, and a
    /// name that collides case-insensitively with an earlier one is dropped.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: NameSet::from_names(fields),
            relations: NameSet::default(),
        }
    }

    /// Declare the relations that `include=` may request.
    #[must_use]
    pub fn with_relations<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations = NameSet::from_names(relations);
        self
    }

    /// Resolve a requested field name to its canonical casing.
    ///
    /// Returns `None` when nothing matches, including for the empty string.
    #[must_use]
    pub fn resolve_field(&self, requested: &str) -> Option<&str> {
        self.fields.resolve(requested)
    }

    /// Resolve a requested relation name to its canonical casing.
    #[must_use]
    pub fn resolve_relation(&self, requested: &str) -> Option<&str> {
        self.relations.resolve(requested)
    }

    /// Canonical field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter()
    }

    /// Canonical relation names in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.relations.iter()
    }

    /// Number of orderable fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of includable relations.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

/// A type with a statically known [`FieldSchema`].
///
/// Implementations should build the schema once and hand out the same
/// reference afterwards. `#[derive(Schema)]` does this with a
/// [`std::sync::OnceLock`].
///
/// # Example
///
/// ```
/// use rest_directives_core::schema::{FieldSchema, Schema};
/// use std::sync::OnceLock;
///
/// struct Book;
///
/// impl Schema for Book {
///     fn field_schema() -> &'static FieldSchema {
///         static SCHEMA: OnceLock<FieldSchema> = OnceLock::new();
///         SCHEMA.get_or_init(|| FieldSchema::new(["Title", "Year"]))
///     }
/// }
///
/// assert_eq!(Book::field_schema().resolve_field("year"), Some("Year"));
/// ```
pub trait Schema {
    /// The schema shared by every request against this type.
    fn field_schema() -> &'static FieldSchema;
}

/// An optional restriction on top of a [`FieldSchema`].
///
/// An empty allow-list permits everything the schema permits. A non-empty
/// one permits only its members, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    names: HashSet<String>,
}

impl AllowList {
    /// An allow-list that adds no restriction.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Build an allow-list from names.
    #[must_use]
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True when this allow-list adds no restriction.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `canonical` may be used.
    #[must_use]
    pub fn permits(&self, canonical: &str) -> bool {
        self.is_unrestricted() || self.names.contains(&canonical.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}
