//! Loading directive configuration from the process environment.
//!
//! The core crate only knows how to build a [`DirectiveConfig`] from a
//! variable source. Reading the real environment happens here, once, at
//! startup.
//!
//! # Example
//!
//! ```ignore
//! let config = rest_directives_web::config::from_env()?;
//! let app = Router::new()
//!     .route("/api/v1/books", get(list_books))
//!     .layer(Extension(config));
//! ```

use rest_directives_core::{ConfigError, DirectiveConfig};

/// Load [`DirectiveConfig`] from `DIRECTIVES_*` environment variables.
///
/// Unset variables keep their defaults.
///
/// # Errors
///
/// Returns error if a variable cannot be parsed or the result is invalid
pub fn from_env() -> Result<DirectiveConfig, ConfigError> {
    let config = DirectiveConfig::from_lookup(|var| std::env::var(var).ok())?;

    tracing::info!(
        default_page_size = config.paging.default_page_size,
        max_page_size = config.paging.max_page_size,
        order_param = %config.parameters.order,
        include_param = %config.parameters.include,
        "Loaded directive configuration"
    );

    Ok(config)
}
