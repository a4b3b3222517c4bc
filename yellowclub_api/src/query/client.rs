use super::{
    common::{PagedQuery, QueryCommon},
    Query, RequestParams,
};

/// Filters for the client listing screen.
#[derive(Clone, Debug, Default)]
pub struct ClientQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
    pub document: Option<String>,
    pub partner_id: Option<i64>,
}

impl Query for ClientQuery {
    fn to_params(&self) -> RequestParams {
        let mut params = self.common.to_params();
        params.set("status", self.status.as_deref());
        params.set("document", self.document.as_deref());
        params.set("partner_id", self.partner_id);
        params
    }
}

impl PagedQuery for ClientQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ClientQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_document(mut self, document: &str) -> Self {
        self.document = Some(document.to_string());
        self
    }

    pub fn with_partner(mut self, partner_id: i64) -> Self {
        self.partner_id = Some(partner_id);
        self
    }
}
