//! Library layer for Yellow Club: per-entity services, points redemption,
//! the quick-create order wizard, and input validation.
//!
//! Wraps the `yellowclub_api` crate, which owns HTTP, response
//! normalization, and the generic resource service.

pub mod client;
pub mod config;
pub mod error;
pub mod redemption;
pub mod services;
pub mod validation;
pub mod wizard;

pub use yellowclub_api;
pub use yellowclub_api::types;
pub use yellowclub_api::{
    ClientQuery, ExtractQuery, PagedQuery, Query, RequestParams, ServiceOrderQuery, SortDirection,
};

pub use client::YellowClubClient;
pub use config::Settings;
pub use error::YellowClubError;
pub use redemption::{Address, Delivery, Redemption, RedemptionRequest, RedemptionService};
pub use wizard::{QuickOrder, QuickOrderResult, QuickOrderWizard, WizardStep};
