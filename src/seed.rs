use crate::models::notification::{Notification, NotificationType};
use crate::models::order::{GeoPoint, Order, OrderStatus};
use crate::models::reference::{ExceptionType, Place, ReferenceData};
use crate::models::urgent::UrgentOrderData;

// Implementations must be deterministic and must not perform I/O.
pub trait SeedSource: Send + Sync {
    fn orders(&self) -> Vec<Order>;
    fn notifications(&self) -> Vec<Notification>;
    fn urgent_order(&self) -> UrgentOrderData;
    fn reference_data(&self) -> ReferenceData;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSeed;

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer_name: &str,
    address: &str,
    eta: &str,
    time_window: &str,
    package_id: &str,
    status: OrderStatus,
    lat: f64,
    lng: f64,
    phone: &str,
) -> Order {
    Order {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        address: address.to_string(),
        eta: eta.to_string(),
        time_window: time_window.to_string(),
        package_id: package_id.to_string(),
        status,
        location: GeoPoint { lat, lng },
        is_urgent: false,
        weight: None,
        deadline: None,
        phone: Some(phone.to_string()),
    }
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
    kind: NotificationType,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
        kind,
    }
}

fn place(name: &str, lat: f64, lng: f64) -> Place {
    Place {
        name: name.to_string(),
        location: GeoPoint { lat, lng },
    }
}

impl SeedSource for FixedSeed {
    fn orders(&self) -> Vec<Order> {
        vec![
            order(
                "ORD-3001",
                "Priya Lakshmi",
                "12, Cenotaph Road, Teynampet, Chennai 600018",
                "12 min",
                "10:00 AM - 11:00 AM",
                "PKG-55101",
                OrderStatus::EnRoute,
                13.0382,
                80.2466,
                "+91 98410 12345",
            ),
            order(
                "ORD-3002",
                "Karthik Sundaram",
                "78, Anna Nagar 2nd Avenue, Chennai 600040",
                "35 min",
                "11:00 AM - 12:00 PM",
                "PKG-55102",
                OrderStatus::Upcoming,
                13.0850,
                80.2101,
                "+91 94440 67890",
            ),
            order(
                "ORD-3003",
                "Meena Venkatesh",
                "5, Besant Nagar 3rd Cross, Chennai 600090",
                "55 min",
                "12:00 PM - 1:00 PM",
                "PKG-55103",
                OrderStatus::Upcoming,
                13.0002,
                80.2668,
                "+91 98765 11223",
            ),
            order(
                "ORD-3004",
                "Senthil Murugan",
                "303, Velachery Main Road, Velachery, Chennai 600042",
                "1h 20m",
                "1:00 PM - 2:00 PM",
                "PKG-55104",
                OrderStatus::Upcoming,
                12.9815,
                80.2180,
                "+91 90030 44556",
            ),
            order(
                "ORD-3005",
                "Anitha Ramesh",
                "21, TTK Road, Alwarpet, Chennai 600018",
                "--",
                "8:00 AM - 9:00 AM",
                "PKG-55098",
                OrderStatus::Completed,
                13.0346,
                80.2527,
                "+91 98411 98765",
            ),
            order(
                "ORD-3006",
                "Vijay Prasad",
                "15, Cathedral Road, Gopalapuram, Chennai 600086",
                "--",
                "9:00 AM - 10:00 AM",
                "PKG-55099",
                OrderStatus::Completed,
                13.0505,
                80.2507,
                "+91 98765 54321",
            ),
        ]
    }

    fn notifications(&self) -> Vec<Notification> {
        vec![
            notification(
                "NOT-001",
                "Route Update",
                "Your route has been optimized. 2 new stops added near T. Nagar.",
                "2 min ago",
                false,
                NotificationType::Info,
            ),
            notification(
                "NOT-002",
                "Priority Delivery",
                "ORD-3001 marked as priority. Customer requested early delivery to Teynampet.",
                "15 min ago",
                false,
                NotificationType::Urgent,
            ),
            notification(
                "NOT-003",
                "Traffic Alert",
                "Heavy congestion on Mount Road near Saidapet. Consider alternate route via Adyar.",
                "30 min ago",
                false,
                NotificationType::Warning,
            ),
            notification(
                "NOT-004",
                "Break Reminder",
                "You have been driving for 3 hours. Please take a 15-minute break.",
                "1h ago",
                true,
                NotificationType::Info,
            ),
            notification(
                "NOT-005",
                "Fuel Level Low",
                "Vehicle fuel level estimated at 15%. Nearest fuel station: Indian Oil, Adyar.",
                "2h ago",
                true,
                NotificationType::Warning,
            ),
        ]
    }

    fn urgent_order(&self) -> UrgentOrderData {
        let mut candidate = order(
            "ORD-3900",
            "Deepak Rajan",
            "42, Kamarajar Salai, Mylapore, Chennai 600004",
            "8 min",
            "10:30 AM - 11:00 AM",
            "PKG-44250",
            OrderStatus::Upcoming,
            13.0339,
            80.2676,
            "+91 98412 33456",
        );
        candidate.is_urgent = true;
        candidate.weight = Some("4.2 kg".to_string());
        candidate.deadline = Some("11:00 AM TODAY".to_string());

        UrgentOrderData {
            order: candidate,
            current_route_eta: "1h 45m".to_string(),
            new_route_eta: "1h 52m".to_string(),
            reason: "Order is near your current location on the T. Nagar-Mylapore route. \
                     Minimal detour required."
                .to_string(),
            weight: "4.2 kg".to_string(),
            deadline: "11:00 AM TODAY".to_string(),
        }
    }

    fn reference_data(&self) -> ReferenceData {
        ReferenceData {
            fuel_stations: vec![
                place("Indian Oil - Adyar", 13.0067, 80.2571),
                place("HP Petrol - T. Nagar", 13.0418, 80.2341),
                place("Bharat Petroleum - Guindy", 13.0067, 80.2206),
            ],
            break_spots: vec![
                place("Saravana Bhavan - Mylapore", 13.0368, 80.2676),
                place("Murugan Idli - Adyar", 13.0067, 80.2571),
            ],
            exception_types: [
                ("road_blocked", "Road Blocked"),
                ("customer_not_home", "Customer Not Home"),
                ("return_to_origin", "Return to Origin"),
                ("other", "Other"),
            ]
            .into_iter()
            .map(|(id, label)| ExceptionType {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
            leave_reasons: [
                "Personal Leave",
                "Sick Leave",
                "Family Emergency",
                "Medical Appointment",
                "Other",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
