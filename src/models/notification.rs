use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Warning,
    Urgent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationType,
}
