use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    // Plaintext, compared as-is by the local login check.
    #[serde(skip)]
    pub password: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// The administrator account created together with a fresh database.
    pub fn seeded_admin() -> Self {
        Self {
            id: "admin-1".to_string(),
            username: "admin".to_string(),
            name: "Administrador".to_string(),
            role: UserRole::Admin,
            password: "EVRI01".to_string(),
        }
    }
}
