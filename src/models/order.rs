use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    EnRoute,
    Upcoming,
    Completed,
}

impl OrderStatus {
    /// Position along `upcoming -> en_route -> completed`.
    fn rank(self) -> u8 {
        match self {
            OrderStatus::Upcoming => 0,
            OrderStatus::EnRoute => 1,
            OrderStatus::Completed => 2,
        }
    }

    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        next.rank() > self.rank()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub address: String,
    pub eta: String,
    pub time_window: String,
    pub package_id: String,
    pub status: OrderStatus,
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPartition {
    pub en_route: Vec<Order>,
    pub upcoming: Vec<Order>,
    pub completed: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn status_only_moves_forward() {
        assert!(OrderStatus::Upcoming.can_advance_to(OrderStatus::EnRoute));
        assert!(OrderStatus::Upcoming.can_advance_to(OrderStatus::Completed));
        assert!(OrderStatus::EnRoute.can_advance_to(OrderStatus::Completed));

        assert!(!OrderStatus::Completed.can_advance_to(OrderStatus::EnRoute));
        assert!(!OrderStatus::Completed.can_advance_to(OrderStatus::Completed));
        assert!(!OrderStatus::EnRoute.can_advance_to(OrderStatus::Upcoming));
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let raw = serde_json::to_string(&OrderStatus::EnRoute).unwrap();
        assert_eq!(raw, "\"en_route\"");
    }
}
