pub mod notification;
pub mod order;
pub mod reference;
pub mod urgent;
pub mod user;
