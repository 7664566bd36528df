use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use store_object::model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Customer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Customer => "customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "customer" => Ok(UserRole::Customer),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[model]
#[table(name = "users")]
pub struct User {
    #[primary_key]
    pub id: i64,

    #[unique]
    pub email: String,

    pub full_name: String,

    pub password_hash: String,

    pub role: UserRole,

    pub phone: Option<String>,

    #[soft_delete]
    pub is_active: bool,
}

impl User {
    /// A new active customer; the id is assigned on save
    pub fn new(email: &str, full_name: &str, password_hash: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            full_name: full_name.to_string(),
            password_hash: password_hash.to_string(),
            role: UserRole::Customer,
            phone: None,
            is_active: true,
        }
    }
}
