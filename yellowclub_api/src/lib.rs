pub mod auth;
mod client;
mod errors;
pub mod normalize;
mod query;
mod resource;
pub mod types;
pub use self::auth::{ApiTarget, EnvToken, NoToken, StaticToken, TokenSource};
pub use self::client::Client;
pub use self::errors::Error;
pub use self::normalize::{normalize, normalize_into, ResponseShape};
pub use self::query::{
    ClientQuery, ExtractQuery, PagedQuery, ParamValue, Query, QueryCommon, RequestParams,
    ServiceOrderQuery, SortDirection,
};
pub use self::resource::{unwrap_data, Resource};
