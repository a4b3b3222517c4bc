//! CLI subcommand implementations.

pub mod catalog;
pub mod clients;
pub mod orders;
pub mod points;

use clap::Args;
use yellowclub_lib::validation;
use yellowclub_lib::{PagedQuery, RequestParams, YellowClubError};

/// Paging and search flags shared by every listing.
#[derive(Args, Clone, Debug)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub per_page: u64,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,
}

impl PageArgs {
    /// Validates the flags and writes them onto `query`.
    pub fn apply<Q: PagedQuery>(&self, query: Q) -> Result<Q, YellowClubError> {
        let mut query = query
            .with_page(validation::validate_page(self.page)?)
            .with_per_page(validation::validate_per_page(self.per_page)?);
        if let Some(search) = &self.search {
            query = query.with_search(&validation::validate_search(search)?);
        }
        Ok(query)
    }

    /// The same flags as plain params, for endpoints without a dedicated query type.
    pub fn params(&self) -> Result<RequestParams, YellowClubError> {
        let search = self
            .search
            .as_deref()
            .map(validation::validate_search)
            .transpose()?;
        Ok(RequestParams::new()
            .with("page", validation::validate_page(self.page)?)
            .with("per_page", validation::validate_per_page(self.per_page)?)
            .with_opt("search", search))
    }
}
