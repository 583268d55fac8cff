use serde::{Deserialize, Serialize};

use crate::models::order::Order;

/// An urgent-insertion proposal. Not part of the route until acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UrgentOrderData {
    pub order: Order,
    pub current_route_eta: String,
    pub new_route_eta: String,
    pub reason: String,
    pub weight: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UrgentPhase {
    None,
    OverlayShown,
    OverlayHidden,
    Acknowledged,
}
