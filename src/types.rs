//! Core types shared by the storefront stores.

use crate::error::{Result, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time, persisted as an RFC 3339 string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Build from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Timestamp)
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// This timestamp moved `days` into the past.
    pub fn days_before(&self, days: i64) -> Self {
        Timestamp(self.0 - Duration::days(days))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0.to_rfc3339())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Visibility of an admin-managed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        self == RecordStatus::Active
    }
}

/// Top-level product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Sweeteners,
    Bakery,
    Pickles,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Sweeteners,
        ProductCategory::Bakery,
        ProductCategory::Pickles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Sweeteners => "sweeteners",
            ProductCategory::Bakery => "bakery",
            ProductCategory::Pickles => "pickles",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sweetener subcategory. Only meaningful under [`ProductCategory::Sweeteners`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcategory {
    Stevia,
    Monkfruit,
}

impl Subcategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Subcategory::Stevia => "stevia",
            Subcategory::Monkfruit => "monkfruit",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, never reassigned.
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub ingredients: Vec<String>,

    /// Price in the smallest currency unit.
    pub price: u64,

    /// Pre-discount price, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,

    /// Average rating in `[0, 5]`.
    pub rating: f32,

    /// Number of reviews behind `rating`.
    pub reviews: u32,
    pub image: String,
    pub images: Vec<String>,
    pub category: ProductCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub in_stock: bool,
}

impl Product {
    /// Check the field-level invariants of a product.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(StoreError::Validation("product id must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(format!(
                "product {} must have a name",
                self.id
            )));
        }
        if self.images.is_empty() {
            return Err(StoreError::Validation(format!(
                "product {} must have at least one image",
                self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(StoreError::Validation(format!(
                "product {} rating {} outside 0..=5",
                self.id, self.rating
            )));
        }
        if let Some(sub) = self.subcategory {
            if self.category != ProductCategory::Sweeteners {
                return Err(StoreError::Validation(format!(
                    "subcategory {} requires category sweeteners, got {}",
                    sub, self.category
                )));
            }
        }
        Ok(())
    }

    /// Whether this product is counted under the category with `category_id`.
    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category.as_str() == category_id
            || self.subcategory.map(Subcategory::as_str) == Some(category_id)
    }
}

/// A line in the shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1; a line that would drop to 0 is removed.
    pub quantity: u32,
}

impl CartItem {
    /// `price * quantity` for this line.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Order lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether `next` follows `self` in the fulfilment flow.
    ///
    /// pending -> confirmed -> shipped -> delivered, and any state before
    /// delivery may be cancelled. Setting the current status again is allowed.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Shipped)
                | (Shipped, Delivered)
                | (Pending | Confirmed | Shipped, Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order is paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Manual,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Snapshot of a purchased product, decoupled from later catalog edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: u64,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            product_name: item.product.name.clone(),
            quantity: item.quantity,
            price: item.product.price,
        }
    }
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    /// Human-facing order code, e.g. `GRV-001000`.
    pub order_number: String,
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub items: Vec<OrderItem>,
    pub subtotal: u64,
    pub tax: u64,
    pub shipping: u64,

    /// Always `subtotal + tax + shipping`.
    pub total: u64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Whether `total` matches its components.
    pub fn totals_consistent(&self) -> bool {
        self.subtotal
            .checked_add(self.tax)
            .and_then(|s| s.checked_add(self.shipping))
            == Some(self.total)
    }
}
