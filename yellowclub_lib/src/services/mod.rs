//! One service per REST resource, each a thin typed layer over
//! [`yellowclub_api::Resource`].

mod aircraft;
mod catalog;
mod clients;
mod metrics;
mod partners;
mod points;
mod products;
mod service_orders;
mod users;

pub use aircraft::AircraftService;
pub use catalog::ServiceCatalog;
pub use clients::ClientService;
pub use metrics::MetricsService;
pub use partners::PartnerService;
pub use points::{PointsExtractService, UserPointsService};
pub use products::ProductService;
pub use service_orders::ServiceOrderService;
pub use users::UserService;
