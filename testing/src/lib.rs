//! # REST Directives Testing
//!
//! Testing utilities and helpers for REST list directives.
//!
//! This crate provides:
//! - [`DirectiveTest`]: a Given-When-Then harness around
//!   `ListDirectives::resolve`
//! - [`properties`]: proptest strategies for schemas and raw directive strings
//! - [`fixtures`]: small schemas shared by tests
//!
//! ## Example
//!
//! ```ignore
//! use rest_directives_testing::{DirectiveTest, fixtures};
//!
//! #[test]
//! fn test_descending_by_name() {
//!     let schema = fixtures::people_schema();
//!     DirectiveTest::new(&schema)
//!         .when_param("order", "-name")
//!         .then_directives(|d| assert!(!d.order().descriptors()[0].is_ascending()))
//!         .run();
//! }
//! ```

pub mod directive_test;
pub mod properties;

/// Small schemas shared by tests.
pub mod fixtures {
    use rest_directives_core::FieldSchema;

    /// `Name`, `Age`, `CreatedAt` with relations `Pets`, `Address`.
    #[must_use]
    pub fn people_schema() -> FieldSchema {
        FieldSchema::new(["Name", "Age", "CreatedAt"]).with_relations(["Pets", "Address"])
    }

    /// Lowercase single-letter fields `a`, `b`, `c`.
    #[must_use]
    pub fn abc_schema() -> FieldSchema {
        FieldSchema::new(["a", "b", "c"])
    }
}

// Re-export commonly used items
pub use directive_test::DirectiveTest;
