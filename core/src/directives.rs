//! All directives of a list request, resolved together.

use crate::config::DirectiveConfig;
use crate::error::DirectiveError;
use crate::include::{self, IncludeRequest};
use crate::order::{self, OrderRequest};
use crate::page::{self, PageRequest};
use crate::query::QueryParams;
use crate::schema::{AllowList, FieldSchema, Schema};
use serde::Serialize;

/// What a list endpoint accepts: a schema plus per-endpoint allow-lists.
#[derive(Debug, Clone)]
pub struct ListRules<'a> {
    schema: &'a FieldSchema,
    orderable: AllowList,
    includable: AllowList,
}

impl<'a> ListRules<'a> {
    /// Rules that accept everything `schema` declares.
    #[must_use]
    pub fn new(schema: &'a FieldSchema) -> Self {
        Self {
            schema,
            orderable: AllowList::unrestricted(),
            includable: AllowList::unrestricted(),
        }
    }

    /// Restrict `order=` to these fields. An empty list restricts nothing.
    #[must_use]
    pub fn orderable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.orderable = AllowList::of(fields);
        self
    }

    /// Restrict `include=` to these relations. An empty list restricts nothing.
    #[must_use]
    pub fn includable<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.includable = AllowList::of(relations);
        self
    }

    /// The schema names are resolved against.
    #[must_use]
    pub const fn schema(&self) -> &'a FieldSchema {
        self.schema
    }
}

impl ListRules<'static> {
    /// Rules for a type with a static schema.
    #[must_use]
    pub fn for_schema<T: Schema>() -> Self {
        Self::new(T::field_schema())
    }
}

/// The validated directives of one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDirectives {
    order: OrderRequest,
    include: IncludeRequest,
    page: PageRequest,
}

impl ListDirectives {
    /// Resolve every directive in `params`.
    ///
    /// Directives are checked in the order `order`, `include`, `page`; the
    /// first rejection is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError`] naming the directive that was rejected.
    pub fn resolve(
        params: &QueryParams,
        rules: &ListRules<'_>,
        config: &DirectiveConfig,
    ) -> Result<Self, DirectiveError> {
        let names = &config.parameters;

        let order = order::resolve(params.first(&names.order), rules.schema, &rules.orderable)?;
        let include =
            include::resolve(params.first(&names.include), rules.schema, &rules.includable)?;
        let page = page::resolve(
            params.first(&names.page),
            params.first(&names.page_size),
            &config.paging,
        )?;

        Ok(Self {
            order,
            include,
            page,
        })
    }

    /// Requested ordering.
    #[must_use]
    pub const fn order(&self) -> &OrderRequest {
        &self.order
    }

    /// Requested relations.
    #[must_use]
    pub const fn include(&self) -> &IncludeRequest {
        &self.include
    }

    /// Requested page.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Split into the individual directives.
    #[must_use]
    pub fn into_parts(self) -> (OrderRequest, IncludeRequest, PageRequest) {
        (self.order, self.include, self.page)
    }
}
