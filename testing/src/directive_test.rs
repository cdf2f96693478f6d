//! Ergonomic testing utilities for list directives
//!
//! This module provides a fluent API for testing directive resolution with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // DirectiveTest is the natural name

use rest_directives_core::{
    DirectiveConfig, DirectiveError, FieldSchema, ListDirectives, ListRules, QueryParams,
};

/// Type alias for directive assertion functions
type DirectivesAssertion = Box<dyn FnOnce(&ListDirectives)>;

/// Type alias for rejection assertion functions
type RejectionAssertion = Box<dyn FnOnce(&DirectiveError)>;

enum Expectation {
    Accepted(Vec<DirectivesAssertion>),
    Rejected(Vec<RejectionAssertion>),
}

/// Fluent API for testing directive resolution with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use rest_directives_core::{FieldSchema, OrderDescriptor};
/// use rest_directives_testing::DirectiveTest;
///
/// let schema = FieldSchema::new(["Name", "CreatedAt"]);
///
/// DirectiveTest::new(&schema)
///     .given_orderable(["name"])
///     .when_param("order", "-NAME")
///     .then_directives(|directives| {
///         assert_eq!(directives.order().descriptors(), &[OrderDescriptor::desc("Name")]);
///     })
///     .run();
///
/// DirectiveTest::new(&schema)
///     .given_orderable(["name"])
///     .when_param("order", "createdAt")
///     .then_rejected(|_| {})
///     .run();
/// ```
pub struct DirectiveTest<'a> {
    schema: &'a FieldSchema,
    orderable: Vec<String>,
    includable: Vec<String>,
    config: DirectiveConfig,
    params: QueryParams,
    expectation: Option<Expectation>,
}

impl<'a> DirectiveTest<'a> {
    /// Create a new directive test against the given schema
    #[must_use]
    pub fn new(schema: &'a FieldSchema) -> Self {
        Self {
            schema,
            orderable: Vec::new(),
            includable: Vec::new(),
            config: DirectiveConfig::default(),
            params: QueryParams::new(),
            expectation: None,
        }
    }

    /// Restrict ordering to these fields (Given)
    #[must_use]
    pub fn given_orderable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderable = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict includes to these relations (Given)
    #[must_use]
    pub fn given_includable<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includable = relations.into_iter().map(Into::into).collect();
        self
    }

    /// Use a non-default configuration (Given)
    #[must_use]
    pub fn given_config(mut self, config: DirectiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a query parameter to the request (When)
    #[must_use]
    pub fn when_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(key, value);
        self
    }

    /// Expect the request to be accepted and check the directives (Then)
    #[must_use]
    pub fn then_directives<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&ListDirectives) + 'static,
    {
        match &mut self.expectation {
            Some(Expectation::Accepted(assertions)) => assertions.push(Box::new(assertion)),
            _ => self.expectation = Some(Expectation::Accepted(vec![Box::new(assertion)])),
        }
        self
    }

    /// Expect the request to be rejected and check the rejection (Then)
    #[must_use]
    pub fn then_rejected<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&DirectiveError) + 'static,
    {
        match &mut self.expectation {
            Some(Expectation::Rejected(assertions)) => assertions.push(Box::new(assertion)),
            _ => self.expectation = Some(Expectation::Rejected(vec![Box::new(assertion)])),
        }
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if no expectation was set, if the outcome (accepted or
    /// rejected) differs from the expectation, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let expectation = self
            .expectation
            .expect("Expectation must be set with then_directives() or then_rejected()");

        let rules = ListRules::new(self.schema)
            .orderable(&self.orderable)
            .includable(&self.includable);

        let outcome = ListDirectives::resolve(&self.params, &rules, &self.config);

        match (expectation, outcome) {
            (Expectation::Accepted(assertions), Ok(directives)) => {
                for assertion in assertions {
                    assertion(&directives);
                }
            }
            (Expectation::Rejected(assertions), Err(error)) => {
                for assertion in assertions {
                    assertion(&error);
                }
            }
            (Expectation::Accepted(_), Err(error)) => {
                panic!("Expected directives to be accepted, but they were rejected: {error}");
            }
            (Expectation::Rejected(_), Ok(directives)) => {
                panic!("Expected directives to be rejected, but got {directives:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_directives_core::{DirectiveKind, OrderDescriptor};

    fn schema() -> FieldSchema {
        FieldSchema::new(["Name", "Age"]).with_relations(["Pets"])
    }

    #[test]
    fn test_accepted_with_multiple_assertions() {
        let schema = schema();
        DirectiveTest::new(&schema)
            .when_param("order", "age,-name")
            .when_param("include", "pets")
            .then_directives(|d| {
                assert_eq!(
                    d.order().descriptors(),
                    &[OrderDescriptor::asc("Age"), OrderDescriptor::desc("Name")]
                );
            })
            .then_directives(|d| assert!(d.include().contains("Pets")))
            .run();
    }

    #[test]
    fn test_rejected() {
        let schema = schema();
        DirectiveTest::new(&schema)
            .given_includable(["pets"])
            .when_param("include", "owners")
            .then_rejected(|e| assert_eq!(e.kind(), DirectiveKind::Include))
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected directives to be rejected")]
    fn test_mismatched_outcome_panics() {
        let schema = schema();
        DirectiveTest::new(&schema)
            .when_param("order", "name")
            .then_rejected(|_| {})
            .run();
    }

    #[test]
    #[should_panic(expected = "Expectation must be set")]
    fn test_missing_expectation_panics() {
        let schema = schema();
        DirectiveTest::new(&schema).run();
    }
}
