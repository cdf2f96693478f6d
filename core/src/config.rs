//! Directive configuration.
//!
//! Values come from a caller-supplied variable source, with defaults for
//! everything, and are validated before use. This crate never reads the
//! process environment itself; `rest-directives-web` does that.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DIRECTIVES_DEFAULT_PAGE_SIZE` | `25` |
//! | `DIRECTIVES_MAX_PAGE_SIZE` | `100` |
//! | `DIRECTIVES_ORDER_PARAM` | `order` |
//! | `DIRECTIVES_INCLUDE_PARAM` | `include` |
//! | `DIRECTIVES_PAGE_PARAM` | `page` |
//! | `DIRECTIVES_PAGE_SIZE_PARAM` | `page_size` |
//!
//! # Example
//!
//! ```
//! use rest_directives_core::config::DirectiveConfig;
//!
//! let config = DirectiveConfig::from_lookup(|var| match var {
//!     "DIRECTIVES_MAX_PAGE_SIZE" => Some("250".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.paging.max_page_size, 250);
//! assert_eq!(config.paging.default_page_size, 25);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration variable held an unparseable value.
    #[error("Failed to parse {var}={value:?}")]
    Parse {
        /// Variable name.
        var: String,
        /// Raw value.
        value: String,
    },

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

/// Page size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size used when the client sends none.
    pub default_page_size: u32,
    /// Largest page size a client may request.
    pub max_page_size: u32,
}

impl PagingConfig {
    /// Validate paging configuration
    ///
    /// # Errors
    ///
    /// Returns error if either size is zero or the default exceeds the maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 {
            return Err(ConfigError::Validation("max_page_size must be > 0".to_string()));
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::Validation(
                "default_page_size must be > 0".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Validation(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 100,
        }
    }
}

/// Query parameter names the directives are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterNames {
    /// Ordering parameter.
    pub order: String,
    /// Include parameter.
    pub include: String,
    /// Page number parameter.
    pub page: String,
    /// Page size parameter.
    pub page_size: String,
}

impl ParameterNames {
    /// Validate parameter names
    ///
    /// # Errors
    ///
    /// Returns error if a name is blank or two names collide case-insensitively
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [&self.order, &self.include, &self.page, &self.page_size];

        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "parameter names cannot be empty".to_string(),
            ));
        }

        for (i, a) in names.iter().enumerate() {
            if names[i + 1..].iter().any(|b| a.eq_ignore_ascii_case(b)) {
                return Err(ConfigError::Validation(format!(
                    "parameter name '{a}' is used twice"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ParameterNames {
    fn default() -> Self {
        Self {
            order: "order".to_string(),
            include: "include".to_string(),
            page: "page".to_string(),
            page_size: "page_size".to_string(),
        }
    }
}

/// Complete directive configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveConfig {
    /// Page size bounds.
    pub paging: PagingConfig,
    /// Query parameter names.
    pub parameters: ParameterNames,
}

impl DirectiveConfig {
    /// Load configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to [`DirectiveConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the result is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => value.trim().parse().map_err(|_| ConfigError::Parse {
                    var: var.to_string(),
                    value,
                }),
            }
        };

        let config = Self {
            paging: PagingConfig {
                default_page_size: parse_u32(
                    "DIRECTIVES_DEFAULT_PAGE_SIZE",
                    defaults.paging.default_page_size,
                )?,
                max_page_size: parse_u32("DIRECTIVES_MAX_PAGE_SIZE", defaults.paging.max_page_size)?,
            },
            parameters: ParameterNames {
                order: lookup("DIRECTIVES_ORDER_PARAM").unwrap_or(defaults.parameters.order),
                include: lookup("DIRECTIVES_INCLUDE_PARAM").unwrap_or(defaults.parameters.include),
                page: lookup("DIRECTIVES_PAGE_PARAM").unwrap_or(defaults.parameters.page),
                page_size: lookup("DIRECTIVES_PAGE_SIZE_PARAM")
                    .unwrap_or(defaults.parameters.page_size),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paging.validate()?;
        self.parameters.validate()
    }
}
