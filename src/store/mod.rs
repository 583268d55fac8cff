pub mod events;
pub mod snapshot;

use chrono::{DateTime, Utc};

use crate::geo::nearest_place;
use crate::models::notification::{Notification, NotificationType};
use crate::models::order::{GeoPoint, Order, OrderPartition, OrderStatus};
use crate::models::reference::{NearestPlace, ReferenceData};
use crate::models::urgent::{UrgentOrderData, UrgentPhase};
use crate::seed::SeedSource;

pub use events::StoreEvent;
pub use snapshot::StoreSnapshot;

#[derive(Debug, Clone)]
pub struct OrderLifecycleStore {
    orders: Vec<Order>,
    notifications: Vec<Notification>,
    fuel_requested: bool,
    break_requested: bool,
    fuel_stop_visible: bool,
    urgent_order: Option<UrgentOrderData>,
    urgent_overlay_visible: bool,
    urgent_acknowledged: bool,
    urgent_marker_visible: bool,
    canned_urgent: UrgentOrderData,
    reference: ReferenceData,
}

impl OrderLifecycleStore {
    pub fn new(seed: &dyn SeedSource) -> Self {
        Self {
            orders: seed.orders(),
            notifications: seed.notifications(),
            fuel_requested: false,
            break_requested: false,
            fuel_stop_visible: false,
            urgent_order: None,
            urgent_overlay_visible: false,
            urgent_acknowledged: false,
            urgent_marker_visible: false,
            canned_urgent: seed.urgent_order(),
            reference: seed.reference_data(),
        }
    }

    // Commands

    pub fn set_fuel_requested(&mut self, value: bool) {
        self.fuel_requested = value;
    }

    pub fn set_break_requested(&mut self, value: bool) {
        self.break_requested = value;
    }

    pub fn request_fuel_stop(&mut self) {
        self.fuel_stop_visible = true;
        self.fuel_requested = true;
    }

    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn acknowledge_notification(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn trigger_urgent_demo(&mut self) {
        self.urgent_order = Some(self.canned_urgent.clone());
        self.urgent_overlay_visible = true;
        self.urgent_acknowledged = false;
        self.urgent_marker_visible = false;
    }

    pub fn show_urgent_overlay(&mut self) -> bool {
        if self.urgent_order.is_none() {
            return false;
        }
        self.urgent_overlay_visible = true;
        true
    }

    pub fn dismiss_urgent_overlay(&mut self) {
        self.urgent_overlay_visible = false;
    }

    pub fn acknowledge_urgent_order(&mut self) -> bool {
        self.acknowledge_urgent_order_at(Utc::now())
    }

    // false when the order is already on the route; flags still update
    pub fn acknowledge_urgent_order_at(&mut self, now: DateTime<Utc>) -> bool {
        let Some(proposal) = self.urgent_order.as_ref() else {
            return false;
        };

        self.urgent_overlay_visible = false;
        self.urgent_acknowledged = true;
        self.urgent_marker_visible = true;

        if self.orders.iter().any(|o| o.id == proposal.order.id) {
            return false;
        }

        let mut urgent = proposal.order.clone();
        urgent.status = OrderStatus::Upcoming;
        urgent.is_urgent = true;
        urgent.weight = Some(proposal.weight.clone());
        urgent.deadline = Some(proposal.deadline.clone());

        let notification = Notification {
            id: format!("NOT-URG-{}", now.timestamp_millis()),
            title: "Urgent Order Added".to_string(),
            message: format!(
                "{} for {} was added to your route. Route ETA {} -> {}.",
                urgent.id, urgent.customer_name, proposal.current_route_eta, proposal.new_route_eta
            ),
            time: "Just now".to_string(),
            read: false,
            kind: NotificationType::Urgent,
        };

        self.insert_after_en_route(urgent);
        self.notifications.insert(0, notification);
        true
    }

    pub fn advance_order(&mut self, id: &str, next: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) if order.status.can_advance_to(next) => {
                order.status = next;
                true
            }
            _ => false,
        }
    }

    fn insert_after_en_route(&mut self, urgent: Order) {
        let mut en_route = Vec::new();
        let mut upcoming = Vec::new();
        let mut completed = Vec::new();

        for order in self.orders.drain(..) {
            match order.status {
                OrderStatus::EnRoute => en_route.push(order),
                OrderStatus::Upcoming => upcoming.push(order),
                OrderStatus::Completed => completed.push(order),
            }
        }

        self.orders = en_route;
        self.orders.push(urgent);
        self.orders.extend(upcoming);
        self.orders.extend(completed);
    }

    // Queries

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn orders_with_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }

    pub fn partition(&self) -> OrderPartition {
        OrderPartition {
            en_route: self.orders_with_status(OrderStatus::EnRoute),
            upcoming: self.orders_with_status(OrderStatus::Upcoming),
            completed: self.orders_with_status(OrderStatus::Completed),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn fuel_requested(&self) -> bool {
        self.fuel_requested
    }

    pub fn break_requested(&self) -> bool {
        self.break_requested
    }

    pub fn fuel_stop_visible(&self) -> bool {
        self.fuel_stop_visible
    }

    pub fn urgent_order(&self) -> Option<&UrgentOrderData> {
        self.urgent_order.as_ref()
    }

    pub fn urgent_overlay_visible(&self) -> bool {
        self.urgent_overlay_visible
    }

    pub fn urgent_acknowledged(&self) -> bool {
        self.urgent_acknowledged
    }

    pub fn urgent_marker_visible(&self) -> bool {
        self.urgent_marker_visible
    }

    pub fn urgent_phase(&self) -> UrgentPhase {
        match (&self.urgent_order, self.urgent_acknowledged) {
            (None, _) => UrgentPhase::None,
            (Some(_), true) => UrgentPhase::Acknowledged,
            (Some(_), false) if self.urgent_overlay_visible => UrgentPhase::OverlayShown,
            (Some(_), false) => UrgentPhase::OverlayHidden,
        }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn nearest_fuel_station(&self, from: &GeoPoint) -> Option<NearestPlace> {
        nearest_place(from, &self.reference.fuel_stations)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::OrderLifecycleStore;
    use crate::models::notification::NotificationType;
    use crate::models::order::{GeoPoint, OrderStatus};
    use crate::models::urgent::UrgentPhase;
    use crate::seed::{FixedSeed, SeedSource};

    fn store() -> OrderLifecycleStore {
        OrderLifecycleStore::new(&FixedSeed)
    }

    fn ids(store: &OrderLifecycleStore) -> Vec<&str> {
        store.orders().iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn fresh_store_holds_seed_content() {
        let store = store();

        assert_eq!(store.orders(), FixedSeed.orders().as_slice());
        assert_eq!(store.notifications().len(), 5);
        assert_eq!(store.unread_count(), 3);
        assert!(store.urgent_order().is_none());
        assert_eq!(store.urgent_phase(), UrgentPhase::None);
        assert!(!store.fuel_requested());
        assert!(!store.break_requested());
        assert!(!store.fuel_stop_visible());
        assert!(!store.urgent_overlay_visible());
        assert!(!store.urgent_acknowledged());
        assert!(!store.urgent_marker_visible());
    }

    #[test]
    fn partition_splits_orders_by_status() {
        let partition = store().partition();

        assert_eq!(partition.en_route.len(), 1);
        assert_eq!(partition.upcoming.len(), 3);
        assert_eq!(partition.completed.len(), 2);
        assert!(partition
            .upcoming
            .iter()
            .all(|o| o.status == OrderStatus::Upcoming));
    }

    #[test]
    fn toggles_are_set_directly() {
        let mut store = store();

        store.set_fuel_requested(true);
        store.set_break_requested(true);
        assert!(store.fuel_requested());
        assert!(store.break_requested());

        store.set_fuel_requested(false);
        assert!(!store.fuel_requested());
        assert!(store.break_requested());
    }

    #[test]
    fn request_fuel_stop_sets_both_flags_idempotently() {
        let mut store = store();

        store.request_fuel_stop();
        assert!(store.fuel_stop_visible());
        assert!(store.fuel_requested());

        store.request_fuel_stop();
        assert!(store.fuel_stop_visible());
        assert!(store.fuel_requested());
    }

    #[test]
    fn acknowledge_notification_marks_read_and_lowers_unread_count() {
        let mut store = store();

        assert!(store.acknowledge_notification("NOT-001"));
        assert_eq!(store.unread_count(), 2);
        assert!(store.notifications()[0].read);

        assert!(store.acknowledge_notification("NOT-001"));
        assert_eq!(store.unread_count(), 2);

        // already read in the seed
        assert!(store.acknowledge_notification("NOT-004"));
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn acknowledge_unknown_notification_is_noop() {
        let mut store = store();
        let before = store.notifications().to_vec();

        assert!(!store.acknowledge_notification("NOT-404"));
        assert_eq!(store.notifications(), before.as_slice());
    }

    #[test]
    fn dismiss_notification_removes_exactly_one() {
        let mut store = store();

        assert!(store.dismiss_notification("NOT-002"));
        assert_eq!(store.notifications().len(), 4);
        assert_eq!(store.unread_count(), 2);
        assert!(store.notifications().iter().all(|n| n.id != "NOT-002"));

        assert!(!store.dismiss_notification("NOT-002"));
        assert_eq!(store.notifications().len(), 4);
    }

    #[test]
    fn trigger_arms_overlay() {
        let mut store = store();
        store.trigger_urgent_demo();

        assert!(store.urgent_order().is_some());
        assert!(store.urgent_overlay_visible());
        assert!(!store.urgent_acknowledged());
        assert!(!store.urgent_marker_visible());
        assert_eq!(store.urgent_phase(), UrgentPhase::OverlayShown);
    }

    #[test]
    fn show_overlay_requires_proposal() {
        let mut store = store();

        assert!(!store.show_urgent_overlay());
        assert!(!store.urgent_overlay_visible());

        store.trigger_urgent_demo();
        store.dismiss_urgent_overlay();
        assert_eq!(store.urgent_phase(), UrgentPhase::OverlayHidden);
        assert!(store.urgent_order().is_some());

        assert!(store.show_urgent_overlay());
        assert!(store.urgent_overlay_visible());
    }

    #[test]
    fn acknowledge_without_proposal_is_noop() {
        let mut store = store();

        assert!(!store.acknowledge_urgent_order());
        assert!(!store.urgent_acknowledged());
        assert!(!store.urgent_marker_visible());
        assert_eq!(store.orders().len(), 6);
    }

    #[test]
    fn acknowledge_inserts_urgent_order_after_en_route() {
        let mut store = store();
        store.trigger_urgent_demo();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap();

        assert!(store.acknowledge_urgent_order_at(now));

        assert!(!store.urgent_overlay_visible());
        assert!(store.urgent_acknowledged());
        assert!(store.urgent_marker_visible());
        assert_eq!(store.urgent_phase(), UrgentPhase::Acknowledged);
        assert_eq!(
            ids(&store),
            vec![
                "ORD-3001", "ORD-3900", "ORD-3002", "ORD-3003", "ORD-3004", "ORD-3005", "ORD-3006"
            ]
        );

        let urgent = store.order("ORD-3900").unwrap();
        assert_eq!(urgent.status, OrderStatus::Upcoming);
        assert!(urgent.is_urgent);
        assert_eq!(urgent.weight.as_deref(), Some("4.2 kg"));
        assert_eq!(urgent.deadline.as_deref(), Some("11:00 AM TODAY"));

        let head = &store.notifications()[0];
        assert_eq!(head.id, format!("NOT-URG-{}", now.timestamp_millis()));
        assert_eq!(head.kind, NotificationType::Urgent);
        assert!(!head.read);
        assert!(head.message.contains("1h 45m -> 1h 52m"));
        assert_eq!(store.unread_count(), 4);
        // proposal stays available for the detail view
        assert!(store.urgent_order().is_some());
    }

    #[test]
    fn urgent_order_lands_at_front_of_upcoming_when_nothing_en_route() {
        let mut store = store();
        assert!(store.advance_order("ORD-3001", OrderStatus::Completed));
        store.trigger_urgent_demo();
        store.acknowledge_urgent_order();

        assert_eq!(ids(&store)[0], "ORD-3900");
        assert_eq!(store.orders()[1].status, OrderStatus::Upcoming);
        assert_eq!(
            store.orders().last().map(|o| o.status),
            Some(OrderStatus::Completed)
        );
    }

    #[test]
    fn second_acknowledgement_does_not_duplicate() {
        let mut store = store();
        store.trigger_urgent_demo();
        assert!(store.acknowledge_urgent_order());
        let orders = store.orders().len();
        let notifications = store.notifications().len();

        assert!(!store.acknowledge_urgent_order());
        assert_eq!(store.orders().len(), orders);
        assert_eq!(store.notifications().len(), notifications);
        assert!(store.urgent_acknowledged());
    }

    #[test]
    fn retrigger_after_acknowledgement_rearms_without_reinserting() {
        let mut store = store();
        store.trigger_urgent_demo();
        store.acknowledge_urgent_order();

        store.trigger_urgent_demo();
        assert!(!store.urgent_acknowledged());
        assert!(store.urgent_overlay_visible());
        assert!(!store.urgent_marker_visible());
        assert_eq!(store.urgent_phase(), UrgentPhase::OverlayShown);

        assert!(!store.acknowledge_urgent_order());
        assert!(store.urgent_acknowledged());
        assert!(store.urgent_marker_visible());
        let count = store.orders().iter().filter(|o| o.id == "ORD-3900").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn advance_order_is_forward_only() {
        let mut store = store();

        assert!(store.advance_order("ORD-3002", OrderStatus::EnRoute));
        assert!(store.advance_order("ORD-3002", OrderStatus::Completed));
        assert!(!store.advance_order("ORD-3002", OrderStatus::EnRoute));
        assert!(!store.advance_order("ORD-3002", OrderStatus::Upcoming));
        assert!(!store.advance_order("ORD-9999", OrderStatus::Completed));
        assert_eq!(
            store.order("ORD-3002").map(|o| o.status),
            Some(OrderStatus::Completed)
        );
    }

    #[test]
    fn nearest_fuel_station_from_teynampet() {
        let store = store();
        let teynampet = GeoPoint {
            lat: 13.0382,
            lng: 80.2466,
        };

        let nearest = store.nearest_fuel_station(&teynampet).unwrap();
        assert_eq!(nearest.place.name, "HP Petrol - T. Nagar");
    }

    #[test]
    fn state_does_not_outlive_the_store() {
        let mut store = store();
        store.request_fuel_stop();
        store.dismiss_notification("NOT-001");
        store.trigger_urgent_demo();
        store.acknowledge_urgent_order();
        drop(store);

        let fresh = OrderLifecycleStore::new(&FixedSeed);
        assert_eq!(fresh.orders().len(), 6);
        assert_eq!(fresh.notifications().len(), 5);
        assert!(!fresh.fuel_stop_visible());
        assert!(fresh.urgent_order().is_none());
    }
}
