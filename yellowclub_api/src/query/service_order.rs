use chrono::NaiveDate;

use super::{
    common::{PagedQuery, QueryCommon},
    Query, RequestParams,
};

/// Filters for service order listings.
#[derive(Clone, Debug, Default)]
pub struct ServiceOrderQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
    pub client_id: Option<i64>,
    pub aircraft_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Query for ServiceOrderQuery {
    fn to_params(&self) -> RequestParams {
        let mut params = self.common.to_params();
        params.set("status", self.status.as_deref());
        params.set("client_id", self.client_id);
        params.set("aircraft_id", self.aircraft_id);
        params.set("date_from", self.date_from.map(|d| d.format("%Y-%m-%d").to_string()));
        params.set("date_to", self.date_to.map(|d| d.format("%Y-%m-%d").to_string()));
        params
    }
}

impl PagedQuery for ServiceOrderQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ServiceOrderQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_client(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_aircraft(mut self, aircraft_id: i64) -> Self {
        self.aircraft_id = Some(aircraft_id);
        self
    }

    /// Restricts to orders opened between `from` and `to`, both inclusive.
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }
}
