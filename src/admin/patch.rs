//! Drafts for new admin records and typed partial updates.
//!
//! A patch lists only the fields an admin may change. `None` leaves a field
//! alone; for optional fields `Some(None)` clears it. Identity fields and
//! derived fields have no patch entry.

use super::records::{Benefit, BenefitIcon, Category, HomepageSection};
use crate::error::{Result, StoreError};
use crate::types::{Product, ProductCategory, RecordStatus, Subcategory};

/// A product before it has an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub ingredients: Vec<String>,
    pub price: u64,
    pub original_price: Option<u64>,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub images: Vec<String>,
    pub category: ProductCategory,
    pub subcategory: Option<Subcategory>,
    pub badge: Option<String>,
    pub in_stock: bool,
}

impl ProductDraft {
    pub(crate) fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            ingredients: self.ingredients,
            price: self.price,
            original_price: self.original_price,
            rating: self.rating,
            reviews: self.reviews,
            image: self.image,
            images: self.images,
            category: self.category,
            subcategory: self.subcategory,
            badge: self.badge,
            in_stock: self.in_stock,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub price: Option<u64>,
    pub original_price: Option<Option<u64>>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<ProductCategory>,
    pub subcategory: Option<Option<Subcategory>>,
    pub badge: Option<Option<String>>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    pub fn apply_to(&self, product: &mut Product) {
        merge(&mut product.name, &self.name);
        merge(&mut product.description, &self.description);
        merge(&mut product.long_description, &self.long_description);
        merge(&mut product.ingredients, &self.ingredients);
        merge(&mut product.price, &self.price);
        merge(&mut product.original_price, &self.original_price);
        merge(&mut product.rating, &self.rating);
        merge(&mut product.reviews, &self.reviews);
        merge(&mut product.image, &self.image);
        merge(&mut product.images, &self.images);
        merge(&mut product.category, &self.category);
        merge(&mut product.subcategory, &self.subcategory);
        merge(&mut product.badge, &self.badge);
        merge(&mut product.in_stock, &self.in_stock);
    }
}

/// A category before it has an id. The product count is derived, so absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub parent_category: Option<String>,
    pub status: RecordStatus,
}

impl CategoryDraft {
    pub(crate) fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            parent_category: self.parent_category,
            status: self.status,
            product_count: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub parent_category: Option<Option<String>>,
    pub status: Option<RecordStatus>,
}

impl CategoryPatch {
    pub fn apply_to(&self, category: &mut Category) {
        merge(&mut category.name, &self.name);
        merge(&mut category.description, &self.description);
        merge(&mut category.image, &self.image);
        merge(&mut category.parent_category, &self.parent_category);
        merge(&mut category.status, &self.status);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomepageSectionPatch {
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub cta_text: Option<Option<String>>,
    pub cta_link: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub badge: Option<Option<String>>,
    pub order: Option<i32>,
    pub status: Option<RecordStatus>,
}

impl HomepageSectionPatch {
    pub fn apply_to(&self, section: &mut HomepageSection) {
        merge(&mut section.title, &self.title);
        merge(&mut section.subtitle, &self.subtitle);
        merge(&mut section.description, &self.description);
        merge(&mut section.cta_text, &self.cta_text);
        merge(&mut section.cta_link, &self.cta_link);
        merge(&mut section.image, &self.image);
        merge(&mut section.badge, &self.badge);
        merge(&mut section.order, &self.order);
        merge(&mut section.status, &self.status);
    }
}

/// A benefit before it has an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenefitDraft {
    pub title: String,
    pub description: String,
    pub icon: BenefitIcon,
    pub order: i32,
    pub status: RecordStatus,
}

impl BenefitDraft {
    pub(crate) fn into_benefit(self, id: String) -> Benefit {
        Benefit {
            id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            order: self.order,
            status: self.status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenefitPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<BenefitIcon>,
    pub order: Option<i32>,
    pub status: Option<RecordStatus>,
}

impl BenefitPatch {
    pub fn apply_to(&self, benefit: &mut Benefit) {
        merge(&mut benefit.title, &self.title);
        merge(&mut benefit.description, &self.description);
        merge(&mut benefit.icon, &self.icon);
        merge(&mut benefit.order, &self.order);
        merge(&mut benefit.status, &self.status);
    }
}

fn merge<T: Clone>(field: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        *field = value.clone();
    }
}

/// Reject blank titles and names.
pub(crate) fn require_text(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{what} must not be empty")));
    }
    Ok(())
}
