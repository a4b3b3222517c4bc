use chrono::NaiveDate;

use super::{
    common::{PagedQuery, QueryCommon},
    Query, RequestParams,
};

/// Filters for the points extract.
#[derive(Clone, Debug, Default)]
pub struct ExtractQuery {
    pub common: QueryCommon,
    /// Server-side `tipo` filter, sent verbatim.
    pub tipo: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Query for ExtractQuery {
    fn to_params(&self) -> RequestParams {
        let mut params = self.common.to_params();
        params.set("tipo", self.tipo.as_deref());
        params.set("data_inicio", self.date_from.map(|d| d.format("%Y-%m-%d").to_string()));
        params.set("data_fim", self.date_to.map(|d| d.format("%Y-%m-%d").to_string()));
        params
    }
}

impl PagedQuery for ExtractQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ExtractQuery {
    pub fn with_tipo(mut self, tipo: &str) -> Self {
        self.tipo = Some(tipo.to_string());
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }
}
