//! Record types owned by the admin store.

use crate::types::{RecordStatus, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a customer account may place orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Blocked,
            UserStatus::Blocked => UserStatus::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        })
    }
}

/// A customer account as shown to admins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: UserStatus,
    pub created_at: Timestamp,

    /// Denormalized; stored as-is rather than derived from orders.
    pub order_count: u32,
    pub total_spent: u64,
}

/// A catalog category. At most two levels deep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Id of a top-level category, if this is a subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,
    pub status: RecordStatus,

    /// Products whose category or subcategory equals `id`. Maintained by the store.
    #[serde(default)]
    pub product_count: u32,
}

/// An editable homepage block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageSection {
    pub id: String,

    /// Stable key the page layout looks sections up by.
    pub section_key: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub order: i32,
    pub status: RecordStatus,
}

/// Icons a benefit card may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitIcon {
    Leaf,
    Heart,
    Sparkles,
    Shield,
    Zap,
    Star,
    Check,
    Award,
}

impl BenefitIcon {
    pub const ALL: [BenefitIcon; 8] = [
        BenefitIcon::Leaf,
        BenefitIcon::Heart,
        BenefitIcon::Sparkles,
        BenefitIcon::Shield,
        BenefitIcon::Zap,
        BenefitIcon::Star,
        BenefitIcon::Check,
        BenefitIcon::Award,
    ];
}

/// A product benefit card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: BenefitIcon,
    pub order: i32,
    pub status: RecordStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Manager,
}

/// The signed-in admin, persisted as the session value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

/// Dashboard figures, computed fresh on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_orders: usize,
    pub total_users: usize,
    /// Products with `in_stock` set.
    pub active_products: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    /// Sum of `total` over delivered orders only.
    pub total_revenue: u64,
}
