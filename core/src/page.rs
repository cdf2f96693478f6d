//! The `page=` and `page_size=` directives.
//!
//! Paging is validated here and nowhere else: a [`PageRequest`] always holds
//! a page of at least 1 and a page size within the configured bounds.
//! Turning it into an offset is the data layer's job.

use crate::config::PagingConfig;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A validated page selection. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// First page with the configured default size.
    #[must_use]
    pub const fn first(config: &PagingConfig) -> Self {
        Self {
            page: 1,
            page_size: config.default_page_size,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Which paging parameter a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParameter {
    /// The page number.
    Page,
    /// The page size.
    PageSize,
}

impl fmt::Display for PageParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => f.write_str("page"),
            Self::PageSize => f.write_str("page_size"),
        }
    }
}

/// Rejection of the paging directives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageRejection {
    /// The value is not an unsigned decimal integer.
    #[error("{parameter} must be a positive integer, got '{value}'")]
    NotANumber {
        /// Offending parameter.
        parameter: PageParameter,
        /// Raw value, trimmed.
        value: String,
    },

    /// `page` was zero.
    #[error("page must be at least 1")]
    PageOutOfRange,

    /// `page_size` was zero or above the configured maximum.
    #[error("page_size must be between 1 and {max}, got {value}")]
    PageSizeOutOfRange {
        /// Requested size.
        value: u32,
        /// Configured maximum.
        max: u32,
    },
}

/// Resolve raw `page` and `page_size` values.
///
/// Absent or blank values take the defaults (page 1, configured size).
/// Oversized pages are rejected rather than clamped.
///
/// # Errors
///
/// Returns [`PageRejection`] for non-numeric values, page 0, or a page
/// size outside `1..=config.max_page_size`.
pub fn resolve(
    raw_page: Option<&str>,
    raw_page_size: Option<&str>,
    config: &PagingConfig,
) -> Result<PageRequest, PageRejection> {
    let defaults = PageRequest::first(config);

    let page = parse(raw_page, PageParameter::Page)?.unwrap_or(defaults.page);
    if page == 0 {
        return Err(PageRejection::PageOutOfRange);
    }

    let page_size = parse(raw_page_size, PageParameter::PageSize)?.unwrap_or(defaults.page_size);
    if page_size == 0 || page_size > config.max_page_size {
        return Err(PageRejection::PageSizeOutOfRange {
            value: page_size,
            max: config.max_page_size,
        });
    }

    Ok(PageRequest { page, page_size })
}

fn parse(raw: Option<&str>, parameter: PageParameter) -> Result<Option<u32>, PageRejection> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| PageRejection::NotANumber {
            parameter,
            value: value.to_string(),
        })
}
