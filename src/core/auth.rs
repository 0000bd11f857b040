//! Local account directory: registration, login and driver search.
//!
//! Passwords are stored and compared as plain text. This mirrors a
//! single-device demo setup and is not a security boundary.

use crate::db::repository::{SessionRepository, UserRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserRole};
use uuid::Uuid;

pub struct AuthLogic;

impl AuthLogic {
    /// Check credentials against the user directory.
    pub fn authenticate<U: UserRepository>(
        users: &U,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        let user = users
            .user_by_username(username)?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))?;

        if user.password == password {
            return Ok(user);
        }

        if user.is_admin() {
            Err(AppError::InvalidAdminCredentials)
        } else {
            Err(AppError::WrongPassword)
        }
    }

    /// Authenticate and open a session. With `admin_only`, non-admin
    /// accounts are refused even when the password matches.
    pub fn login<S: UserRepository + SessionRepository>(
        store: &mut S,
        username: &str,
        password: &str,
        admin_only: bool,
    ) -> AppResult<User> {
        let user = Self::authenticate(&*store, username, password)?;
        if admin_only && !user.is_admin() {
            return Err(AppError::NotAdmin);
        }
        store.set_current_user(&user.id)?;
        Ok(user)
    }

    /// Create a driver account and log it in.
    pub fn register<S: UserRepository + SessionRepository>(
        store: &mut S,
        name: &str,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        let name = name.trim();
        let username = username.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if username.is_empty() {
            return Err(AppError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AppError::MissingField("password"));
        }

        if store.user_by_username(username)?.is_some() {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            name: name.to_string(),
            role: UserRole::User,
            password: password.to_string(),
        };

        store.insert_user(&user)?;
        store.set_current_user(&user.id)?;
        Ok(user)
    }

    /// The logged-in user, if any.
    pub fn current_user<S: UserRepository + SessionRepository>(store: &S) -> AppResult<Option<User>> {
        match store.current_user_id()? {
            Some(id) => store.user_by_id(&id),
            None => Ok(None),
        }
    }

    pub fn require_user<S: UserRepository + SessionRepository>(store: &S) -> AppResult<User> {
        Self::current_user(store)?.ok_or(AppError::NotLoggedIn)
    }

    pub fn require_admin<S: UserRepository + SessionRepository>(store: &S) -> AppResult<User> {
        let user = Self::require_user(store)?;
        if !user.is_admin() {
            return Err(AppError::NotAdmin);
        }
        Ok(user)
    }

    /// Drivers (non-admin accounts) whose name or username contains `term`,
    /// ignoring case. An empty term matches everyone.
    pub fn search_drivers<U: UserRepository>(users: &U, term: &str) -> AppResult<Vec<User>> {
        let needle = term.to_lowercase();
        Ok(users
            .users()?
            .into_iter()
            .filter(|u| !u.is_admin())
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.username.to_lowercase().contains(&needle)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn register_then_login_case_insensitive() {
        let mut store = MemoryStore::new();
        let u = AuthLogic::register(&mut store, "Maria Santos", "MSantos", "s3cret").unwrap();
        assert_eq!(u.role, UserRole::User);
        assert_eq!(AuthLogic::current_user(&store).unwrap(), Some(u.clone()));

        store.clear_session().unwrap();
        let again = AuthLogic::login(&mut store, "msantos", "s3cret", false).unwrap();
        assert_eq!(again.id, u.id);
    }

    #[test]
    fn duplicate_username_rejected() {
        let mut store = MemoryStore::new();
        AuthLogic::register(&mut store, "A", "driver", "x").unwrap();
        let err = AuthLogic::register(&mut store, "B", "DRIVER", "y").unwrap_err();
        assert!(matches!(err, AppError::UsernameTaken(_)));
    }

    #[test]
    fn missing_fields_rejected() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            AuthLogic::register(&mut store, " ", "u", "p"),
            Err(AppError::MissingField("name"))
        ));
        assert!(matches!(
            AuthLogic::register(&mut store, "N", "u", ""),
            Err(AppError::MissingField("password"))
        ));
    }

    #[test]
    fn login_failures_are_distinguished() {
        let mut store = MemoryStore::new();
        AuthLogic::register(&mut store, "A", "driver", "x").unwrap();

        assert!(matches!(
            AuthLogic::authenticate(&store, "nobody", "x"),
            Err(AppError::UserNotFound(_))
        ));
        assert!(matches!(
            AuthLogic::authenticate(&store, "driver", "bad"),
            Err(AppError::WrongPassword)
        ));
        assert!(matches!(
            AuthLogic::authenticate(&store, "admin", "bad"),
            Err(AppError::InvalidAdminCredentials)
        ));
        assert!(matches!(
            AuthLogic::login(&mut store, "driver", "x", true),
            Err(AppError::NotAdmin)
        ));
    }

    #[test]
    fn seeded_admin_can_log_in() {
        let mut store = MemoryStore::new();
        let admin = AuthLogic::login(&mut store, "Admin", "EVRI01", true).unwrap();
        assert!(admin.is_admin());
        assert!(AuthLogic::require_admin(&store).is_ok());
    }

    #[test]
    fn search_excludes_admins() {
        let mut store = MemoryStore::new();
        AuthLogic::register(&mut store, "João Silva", "jsilva", "x").unwrap();
        AuthLogic::register(&mut store, "Maria Santos", "msantos", "x").unwrap();

        let all = AuthLogic::search_drivers(&store, "").unwrap();
        assert_eq!(all.len(), 2);

        let hits = AuthLogic::search_drivers(&store, "SIL").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].username, "jsilva");

        assert!(AuthLogic::search_drivers(&store, "admin").unwrap().is_empty());
    }
}
