//! Derive macros for REST list directives
//!
//! Field schemas are declared ahead of time instead of being discovered by
//! reflection at request time.
//!
//! # Available Macros
//!
//! - `#[derive(Schema)]` - Implements `rest_directives_core::schema::Schema`
//!   from a struct's named fields
//!
//! # Example
//!
//! ```ignore
//! use rest_directives_macros::Schema;
//!
//! #[derive(Schema)]
//! struct Book {
//!     #[schema(rename = "Title")]
//!     title: String,
//!     published_at: String,
//!     #[schema(relation)]
//!     author: Option<Author>,
//!     #[schema(skip)]
//!     internal_notes: String,
//! }
//!
//! // Generated:
//! let schema = <Book as rest_directives_core::Schema>::field_schema();
//! assert_eq!(schema.resolve_field("TITLE"), Some("Title"));
//! assert_eq!(schema.resolve_relation("author"), Some("author"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr, parse_macro_input};

/// Derive macro for resource structs
///
/// Generates a `Schema` impl whose field schema is built once, on first
/// use, and shared afterwards.
///
/// Every named field is an orderable field whose canonical name is the
/// field identifier (raw identifiers lose their `r#` prefix).
///
/// # Attributes
///
/// - `#[schema(rename = "name")]` - Use a different canonical name
/// - `#[schema(skip)]` - Leave the field out of the schema
/// - `#[schema(relation)]` - Declare the field as an includable relation
///   instead of an orderable field
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to anything other than a struct with named fields
/// - A `#[schema(...)]` attribute is malformed or unknown
/// - A field is both `skip` and `relation`
///
/// # Example
///
/// ```ignore
/// #[derive(Schema)]
/// struct Customer {
///     #[schema(rename = "Name")]
///     name: String,
///     #[schema(rename = "CreatedAt")]
///     created_at: DateTime<Utc>,
///     #[schema(relation, rename = "Orders")]
///     orders: Vec<Order>,
/// }
/// ```
#[proc_macro_derive(Schema, attributes(schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_schema(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand_schema(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "#[derive(Schema)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Schema)] can only be used on structs",
            ));
        }
    };

    let mut fields = Vec::new();
    let mut relations = Vec::new();

    for field in named {
        let options = FieldOptions::parse(field)?;
        if options.skip {
            continue;
        }

        let Some(canonical) = options.rename.or_else(|| default_name(field)) else {
            continue;
        };

        if options.relation {
            relations.push(canonical);
        } else {
            fields.push(canonical);
        }
    }

    Ok(quote! {
        impl #impl_generics ::rest_directives_core::schema::Schema for #name #ty_generics #where_clause {
            fn field_schema() -> &'static ::rest_directives_core::schema::FieldSchema {
                static SCHEMA: ::std::sync::OnceLock<::rest_directives_core::schema::FieldSchema> =
                    ::std::sync::OnceLock::new();

                SCHEMA.get_or_init(|| {
                    let fields: &[&str] = &[#(#fields),*];
                    let relations: &[&str] = &[#(#relations),*];
                    ::rest_directives_core::schema::FieldSchema::new(fields.iter().copied())
                        .with_relations(relations.iter().copied())
                })
            }
        }
    })
}

/// Parsed `#[schema(...)]` options for one field
#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    skip: bool,
    relation: bool,
}

impl FieldOptions {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("schema")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    options.rename = Some(value.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("relation") {
                    options.relation = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported schema attribute, expected `rename`, `skip` or `relation`"))
                }
            })?;
        }

        if options.skip && options.relation {
            return Err(syn::Error::new_spanned(
                field,
                "a field cannot be both #[schema(skip)] and #[schema(relation)]",
            ));
        }

        Ok(options)
    }
}

fn default_name(field: &Field) -> Option<String> {
    field.ident.as_ref().map(|ident| {
        let name = ident.to_string();
        name.strip_prefix("r#").map_or_else(|| name.clone(), str::to_string)
    })
}
