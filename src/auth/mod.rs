pub mod password;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::{ProfileUpdate, User};

pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub employee_id: Option<String>,
}

// The username index is claimed before the record is written.
#[derive(Default)]
pub struct UserRepository {
    users: DashMap<Uuid, User>,
    by_username: DashMap<String, Uuid>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = Uuid::new_v4();

        match self.by_username.entry(new_user.username.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::Conflict("Username already taken".to_string()));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let user = User {
            id,
            name: new_user
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| new_user.username.clone()),
            username: new_user.username,
            password_hash: password::hash_password(&new_user.password),
            company_name: new_user.company_name.unwrap_or_default(),
            employee_id: new_user.employee_id.unwrap_or_default(),
            vehicle_no: String::new(),
            vehicle_type: String::new(),
            fuel_type: String::new(),
            capacity: String::new(),
            phone_no: String::new(),
        };

        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: &Uuid) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        let id = *self.by_username.get(username)?;
        self.get(&id)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.find_by_username(username)
            .filter(|user| password::verify_password(password, &user.password_hash))
    }

    pub fn update(&self, id: &Uuid, update: ProfileUpdate) -> Option<User> {
        let mut user = self.users.get_mut(id)?;
        user.apply(update);
        Some(user.clone())
    }
}
