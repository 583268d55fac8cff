use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub company_name: String,
    pub employee_id: String,
    pub vehicle_no: String,
    pub vehicle_type: String,
    pub fuel_type: String,
    pub capacity: String,
    pub phone_no: String,
}

/// Profile fields a driver may edit. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub vehicle_no: Option<String>,
    pub vehicle_type: Option<String>,
    pub fuel_type: Option<String>,
    pub capacity: Option<String>,
    pub phone_no: Option<String>,
}

impl User {
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            vehicle_no,
            vehicle_type,
            fuel_type,
            capacity,
            phone_no,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(vehicle_no) = vehicle_no {
            self.vehicle_no = vehicle_no;
        }
        if let Some(vehicle_type) = vehicle_type {
            self.vehicle_type = vehicle_type;
        }
        if let Some(fuel_type) = fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if let Some(phone_no) = phone_no {
            self.phone_no = phone_no;
        }
    }
}
