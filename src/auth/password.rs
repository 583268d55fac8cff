use sha3::{Digest, Sha3_256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Digest stored as `<salt hex>$<sha3-256(salt || password) hex>`.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4();
    format!("{}${}", hex::encode(salt.as_bytes()), digest(salt.as_bytes(), password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    let actual = digest(&salt, password);
    actual.as_bytes().ct_eq(expected.as_bytes()).into()
}

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
