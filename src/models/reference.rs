use serde::{Deserialize, Serialize};

use crate::models::order::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub name: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionType {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub fuel_stations: Vec<Place>,
    pub break_spots: Vec<Place>,
    pub exception_types: Vec<ExceptionType>,
    pub leave_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearestPlace {
    pub place: Place,
    pub distance_km: f64,
}
