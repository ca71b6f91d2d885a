//! Stand-in admin credential check.
//!
//! A single hardcoded account, compared by plain string equality. This is
//! not a security boundary; a deployment must put a real credential service
//! behind [`authenticate`].

use super::records::{AdminRole, AdminUser};

pub const ADMIN_EMAIL: &str = "admin@grevia.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// The admin profile for a matching credential pair.
pub fn authenticate(email: &str, password: &str) -> Option<AdminUser> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Some(AdminUser {
            id: "admin-1".to_string(),
            email: email.to_string(),
            name: "Admin User".to_string(),
            role: AdminRole::Admin,
        })
    } else {
        None
    }
}
