use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Internal user id.
    pub user_id: String,
    /// Employee id (the login key).
    pub sub: String,
    pub name: String,
    pub is_admin: bool,
    pub exp: usize,
    pub jti: String,
}

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

pub fn generate_access_token(user: &User, secret: &str, ttl: usize) -> String {
    let claims = Claims {
        user_id: user.id.clone(),
        sub: user.employee_id.clone(),
        name: user.name.clone(),
        is_admin: user.is_admin,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_users;

    #[test]
    fn token_round_trips_claims() {
        let users = seed_users();
        let admin = users.iter().find(|u| u.is_admin).unwrap();

        let token = generate_access_token(admin, "test-secret", 900);
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.user_id, admin.id);
        assert_eq!(claims.sub, admin.employee_id);
        assert!(claims.is_admin);

        assert!(verify_token(&token, "other-secret").is_err());
    }
}
