//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits,
//! [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

use super::RequestParams;

/// Anything that can be sent as a query string.
pub trait Query {
    /// Flattens this query into ordered request parameters.
    fn to_params(&self) -> RequestParams;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// Query builders that carry pagination, search, and sorting.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }

    /// Sets the free-text search term.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }

    /// Sets the field to sort by.
    fn with_sort_by(mut self, field: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_by = Some(field.to_string());
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
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types. Everything is optional so an unset
/// field leaves the server default in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCommon {
    /// Page number (1-indexed).
    pub page: Option<u64>,
    /// Results per page.
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl QueryCommon {
    /// Writes `page`, `per_page`, `search`, `sort_by`, `sort_direction`.
    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with_opt("page", self.page)
            .with_opt("per_page", self.per_page)
            .with_opt("search", self.search.as_deref())
            .with_opt("sort_by", self.sort_by.as_deref())
            .with_opt("sort_direction", self.sort_direction.map(|d| d.as_str()))
    }
}
