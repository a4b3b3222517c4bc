//! Quick-create flow: a new client, their aircraft, and a first service order
//! in one call.

use std::fmt;

use yellowclub_api::types::{
    Aircraft, AircraftInput, ClientAccount, ClientInput, ServiceOrder, ServiceOrderInput,
};
use yellowclub_api::Client;

use crate::error::YellowClubError;
use crate::services::{AircraftService, ClientService, ServiceOrderService};

/// Where in the quick-create flow a failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Client,
    Aircraft,
    ServiceOrder,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WizardStep::Client => "client",
            WizardStep::Aircraft => "aircraft",
            WizardStep::ServiceOrder => "service order",
        })
    }
}

/// Everything the quick-create form collects. The `client_id` and
/// `aircraft_id` fields of `aircraft` and `order` are filled in as the
/// records are created.
#[derive(Clone, Debug)]
pub struct QuickOrder {
    pub client: ClientInput,
    pub aircraft: AircraftInput,
    pub order: ServiceOrderInput,
}

/// The three records created by a successful run.
#[derive(Clone, Debug)]
pub struct QuickOrderResult {
    pub client: ClientAccount,
    pub aircraft: Aircraft,
    pub order: ServiceOrder,
}

pub struct QuickOrderWizard {
    clients: ClientService,
    aircraft: AircraftService,
    orders: ServiceOrderService,
}

impl QuickOrderWizard {
    pub fn new(client: Client) -> Self {
        Self {
            clients: ClientService::new(client.clone()),
            aircraft: AircraftService::new(client.clone()),
            orders: ServiceOrderService::new(client),
        }
    }

    /// Runs the three steps in order. A failure is returned as
    /// [`YellowClubError::Wizard`] naming the step; records created by
    /// earlier steps are not removed.
    pub async fn run(&self, quick: &QuickOrder) -> Result<QuickOrderResult, YellowClubError> {
        let client = self
            .clients
            .create(&quick.client)
            .await
            .map_err(|e| at_step(WizardStep::Client, e))?;
        tracing::info!("Quick order: created client {}", client.id);

        let aircraft_input = AircraftInput {
            client_id: Some(client.id),
            ..quick.aircraft.clone()
        };
        let aircraft = self
            .aircraft
            .create(&aircraft_input)
            .await
            .map_err(|e| at_step(WizardStep::Aircraft, e))?;
        tracing::info!("Quick order: created aircraft {}", aircraft.registration);

        let mut order_input = quick.order.clone();
        order_input.client_id = client.id;
        order_input.aircraft_id = Some(aircraft.id);
        if order_input.order_number.is_none() {
            let number = self
                .orders
                .generate_order_number()
                .await
                .map_err(|e| at_step(WizardStep::ServiceOrder, e))?;
            order_input.order_number = Some(number);
        }
        let order = self
            .orders
            .create(&order_input)
            .await
            .map_err(|e| at_step(WizardStep::ServiceOrder, e))?;
        tracing::info!("Quick order: created service order {}", order.id);

        Ok(QuickOrderResult {
            client,
            aircraft,
            order,
        })
    }
}

fn at_step(step: WizardStep, source: YellowClubError) -> YellowClubError {
    tracing::warn!("Quick order failed at {} step: {}", step, source);
    YellowClubError::Wizard {
        step,
        source: Box::new(source),
    }
}
