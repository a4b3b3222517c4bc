mod common;
pub use self::common::{PagedQuery, Query, QueryCommon, SortDirection};
mod params;
pub use self::params::{ParamValue, RequestParams};

mod client;
pub use self::client::ClientQuery;

mod service_order;
pub use self::service_order::ServiceOrderQuery;

mod extract;
pub use self::extract::ExtractQuery;
