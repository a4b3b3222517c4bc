//! Entry point that hands out services sharing one HTTP client.

use yellowclub_api::Client;

use crate::config::Settings;
use crate::redemption::RedemptionService;
use crate::services::{
    AircraftService, ClientService, MetricsService, PartnerService, PointsExtractService,
    ProductService, ServiceCatalog, ServiceOrderService, UserPointsService, UserService,
};
use crate::wizard::QuickOrderWizard;

/// Shared handle to the API. Services built from it reuse one connection
/// pool and one token source; building a service is cheap.
#[derive(Clone)]
pub struct YellowClubClient {
    inner: Client,
}

impl YellowClubClient {
    /// Creates a client from environment-derived settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            inner: settings.client(),
        }
    }

    /// Creates a client with a custom base URL and no token. Used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    pub fn api(&self) -> &Client {
        &self.inner
    }

    pub fn clients(&self) -> ClientService {
        ClientService::new(self.inner.clone())
    }

    pub fn partners(&self) -> PartnerService {
        PartnerService::new(self.inner.clone())
    }

    pub fn aircraft(&self) -> AircraftService {
        AircraftService::new(self.inner.clone())
    }

    pub fn services(&self) -> ServiceCatalog {
        ServiceCatalog::new(self.inner.clone())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.inner.clone())
    }

    pub fn service_orders(&self) -> ServiceOrderService {
        ServiceOrderService::new(self.inner.clone())
    }

    pub fn points_extract(&self) -> PointsExtractService {
        PointsExtractService::new(self.inner.clone())
    }

    pub fn user_points(&self) -> UserPointsService {
        UserPointsService::new(self.inner.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.inner.clone())
    }

    pub fn metrics(&self) -> MetricsService {
        MetricsService::new(self.inner.clone())
    }

    pub fn redemptions(&self) -> RedemptionService {
        RedemptionService::new(self.inner.clone())
    }

    pub fn quick_order(&self) -> QuickOrderWizard {
        QuickOrderWizard::new(self.inner.clone())
    }
}
