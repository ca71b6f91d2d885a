//! Back-office records: catalog products, orders, customers, categories,
//! homepage content and benefit cards, plus the admin session.
//!
//! Each collection lives under its own storage key and is seeded with
//! deterministic data the first time it is opened. Edits go through typed
//! drafts and patches; the merged record is validated before it is stored.

pub mod auth;
mod patch;
mod records;
pub mod seed;
mod store;

pub use patch::{
    BenefitDraft, BenefitPatch, CategoryDraft, CategoryPatch, HomepageSectionPatch, ProductDraft,
    ProductPatch,
};
pub use records::{
    AdminRole, AdminStats, AdminUser, Benefit, BenefitIcon, Category, HomepageSection, User,
    UserStatus,
};
pub use store::{AdminConfig, AdminStore, OrderTransitionPolicy};
