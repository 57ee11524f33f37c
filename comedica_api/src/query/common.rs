//! Shared request infrastructure: the [`Query`] trait, [`RequestCommon`] fields, and [`SortDirection`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Trait implemented by all filter builders. Provides the shared builder
/// methods for pagination overrides, sorting and the optional request id.
pub trait Query {
    /// Returns the common request fields.
    fn common(&self) -> &RequestCommon;

    /// Returns a mutable reference to the common request fields.
    fn get_common(&mut self) -> &mut RequestCommon;

    /// Sets the page number (0-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().size = Some(size);
        self
    }

    /// Sets the backend column to sort by.
    fn with_sort_by(mut self, sort_by: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_by = Some(sort_by.to_string());
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = Some(sort_direction);
        self
    }

    /// Attaches a caller-supplied request id to the envelope.
    fn with_request_id(mut self, request_id: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().request_id = Some(request_id.to_string());
        self
    }
}

/// Sort order for backend results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    /// This is the default.
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

/// Fields shared by all filters: pagination overrides and the optional request id.
///
/// Every `None` falls back to the endpoint's pagination policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestCommon {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub request_id: Option<String>,
}
