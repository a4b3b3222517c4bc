mod de;

mod meta;
pub use self::meta::{Envelope, PaginatedResult};

mod client;
pub use self::client::{ClientAccount, ClientID, ClientInput};

mod partner;
pub use self::partner::{Partner, PartnerID, PartnerInput};

mod aircraft;
pub use self::aircraft::{Aircraft, AircraftID, AircraftInput};

mod service;
pub use self::service::{ServiceID, ServiceInput, ServiceOffering};

mod product;
pub use self::product::{Product, ProductID, ProductInput};

mod service_order;
pub use self::service_order::{
    round_cents, OrderNumber, ServiceOrder, ServiceOrderID, ServiceOrderInput, ServiceOrderItem,
};

mod points;
pub use self::points::{ExtractSummary, PointsBalance, PointsTransaction, TransactionType};

mod user;
pub use self::user::{User, UserID};
