use serde::Serialize;

use crate::models::notification::Notification;
use crate::models::order::Order;
use crate::models::urgent::{UrgentOrderData, UrgentPhase};
use crate::store::OrderLifecycleStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverToggles {
    pub fuel_requested: bool,
    pub break_requested: bool,
    pub fuel_stop_visible: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentView {
    pub phase: UrgentPhase,
    pub urgent_order: Option<UrgentOrderData>,
    pub overlay_visible: bool,
    pub acknowledged: bool,
    pub marker_visible: bool,
}

/// Point-in-time copy of the store, including derived values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub orders: Vec<Order>,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub driver: DriverToggles,
    pub urgent: UrgentView,
}

impl OrderLifecycleStore {
    pub fn driver_toggles(&self) -> DriverToggles {
        DriverToggles {
            fuel_requested: self.fuel_requested(),
            break_requested: self.break_requested(),
            fuel_stop_visible: self.fuel_stop_visible(),
        }
    }

    pub fn urgent_view(&self) -> UrgentView {
        UrgentView {
            phase: self.urgent_phase(),
            urgent_order: self.urgent_order().cloned(),
            overlay_visible: self.urgent_overlay_visible(),
            acknowledged: self.urgent_acknowledged(),
            marker_visible: self.urgent_marker_visible(),
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            orders: self.orders().to_vec(),
            notifications: self.notifications().to_vec(),
            unread_count: self.unread_count(),
            driver: self.driver_toggles(),
            urgent: self.urgent_view(),
        }
    }
}
