//! The admin record store.

use super::auth;
use super::patch::{
    require_text, BenefitDraft, BenefitPatch, CategoryDraft, CategoryPatch,
    HomepageSectionPatch, ProductDraft, ProductPatch,
};
use super::records::{AdminStats, AdminUser, Benefit, Category, HomepageSection, User, UserStatus};
use super::seed;
use crate::catalog;
use crate::error::{Result, StoreError};
use crate::state::{PersistedCollection, StoreContext};
use crate::storage::StorageKey;
use crate::types::{Order, OrderStatus, Product, ProductCategory, Timestamp};
use std::sync::Arc;

/// How `update_order_status` treats moves outside the fulfilment flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderTransitionPolicy {
    /// Any status may follow any other; off-flow moves are logged.
    #[default]
    Permissive,
    /// Only moves allowed by [`OrderStatus::can_transition_to`].
    Strict,
}

/// Admin store configuration.
#[derive(Clone, Debug, Default)]
pub struct AdminConfig {
    pub transition_policy: OrderTransitionPolicy,
}

/// Products, orders, users, categories, homepage sections and benefits,
/// each persisted under its own key, plus the admin session.
pub struct AdminStore {
    ctx: StoreContext,
    config: AdminConfig,
    session: Option<AdminUser>,

    products: PersistedCollection<Product>,
    orders: PersistedCollection<Order>,
    users: PersistedCollection<User>,
    categories: PersistedCollection<Category>,
    homepage_sections: PersistedCollection<HomepageSection>,
    benefits: PersistedCollection<Benefit>,

    /// Millisecond counter behind generated ids; never goes backwards.
    last_id_millis: i64,
}

impl AdminStore {
    /// Load every collection from `ctx`, seeding missing ones.
    pub fn open(ctx: StoreContext, config: AdminConfig) -> Self {
        Self::open_at(ctx, config, Timestamp::now())
    }

    /// Like [`open`](Self::open), with seed timestamps relative to `now`.
    pub fn open_at(ctx: StoreContext, config: AdminConfig, now: Timestamp) -> Self {
        let session = ctx.load::<AdminUser>(StorageKey::AdminSession);

        let products =
            PersistedCollection::load_or_else(ctx.clone(), StorageKey::Products, catalog::products);
        let orders =
            PersistedCollection::load_or_else(ctx.clone(), StorageKey::Orders, || seed::orders(now));
        let users =
            PersistedCollection::load_or_else(ctx.clone(), StorageKey::Users, || seed::users(now));
        let categories = PersistedCollection::load_or_else(ctx.clone(), StorageKey::Categories, || {
            seed::categories(products.as_slice())
        });
        let homepage_sections = PersistedCollection::load_or_else(
            ctx.clone(),
            StorageKey::HomepageSections,
            seed::homepage_sections,
        );
        let benefits =
            PersistedCollection::load_or_else(ctx.clone(), StorageKey::Benefits, seed::benefits);

        let mut store = Self {
            ctx,
            config,
            session,
            products,
            orders,
            users,
            categories,
            homepage_sections,
            benefits,
            last_id_millis: 0,
        };
        store.refresh_product_counts();
        store
    }

    // --- Auth ---

    /// Check the credential pair and start a session on success.
    ///
    /// A failed attempt ends any existing session.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        match auth::authenticate(email, password) {
            Some(user) => {
                tracing::info!(email, "admin logged in");
                self.ctx.save(StorageKey::AdminSession, &user);
                self.session = Some(user);
                self.ctx.events().broadcast_session_changed(true);
                true
            }
            None => {
                tracing::info!(email, "admin login rejected");
                self.end_session();
                false
            }
        }
    }

    pub fn logout(&mut self) {
        tracing::info!("admin logged out");
        self.end_session();
    }

    fn end_session(&mut self) {
        let was_authenticated = self.session.take().is_some();
        self.ctx.remove(StorageKey::AdminSession);
        if was_authenticated {
            self.ctx.events().broadcast_session_changed(false);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn admin_user(&self) -> Option<&AdminUser> {
        self.session.as_ref()
    }

    // --- Products ---

    pub fn products(&self) -> Arc<Vec<Product>> {
        self.products.snapshot()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products_by_category(&self, category: ProductCategory) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products whose name or category contains `query`, ignoring case.
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query) || p.category.as_str().contains(&query)
            })
            .cloned()
            .collect()
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        let id = self.next_id("product", |store, id| store.product(id).is_some());
        let product = draft.into_product(id);
        product.validate()?;

        tracing::info!(product = %product.id, "product added");
        let added = product.clone();
        self.products.mutate(|items| items.push(product));
        self.refresh_product_counts();
        Ok(added)
    }

    /// Merge `patch` into the product. `Ok(false)` if no such product.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Result<bool> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(product = id, "update for unknown product");
            return Ok(false);
        };

        let mut candidate = self.products.as_slice()[index].clone();
        patch.apply_to(&mut candidate);
        candidate.validate()?;

        self.products.mutate(|items| items[index] = candidate);
        self.refresh_product_counts();
        Ok(true)
    }

    pub fn delete_product(&mut self, id: &str) -> bool {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(product = id, "delete for unknown product");
            return false;
        };

        tracing::info!(product = id, "product deleted");
        self.products.mutate(|items| {
            items.remove(index);
        });
        self.refresh_product_counts();
        true
    }

    // --- Orders ---

    pub fn orders(&self) -> Arc<Vec<Order>> {
        self.orders.snapshot()
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Orders matching `query` on order number, customer name or email.
    pub fn search_orders(&self, query: &str) -> Vec<Order> {
        let query = query.to_lowercase();
        self.orders
            .iter()
            .filter(|o| {
                o.order_number.to_lowercase().contains(&query)
                    || o.customer.name.to_lowercase().contains(&query)
                    || o.customer.email.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Move an order to `status` and refresh its `updated_at`.
    ///
    /// `Ok(false)` if no such order. Under the strict policy, a move outside
    /// the fulfilment flow is rejected.
    pub fn update_order_status(&mut self, id: &str, status: OrderStatus) -> Result<bool> {
        let Some(index) = self.orders.iter().position(|o| o.id == id) else {
            tracing::debug!(order = id, "status update for unknown order");
            return Ok(false);
        };

        let from = self.orders.as_slice()[index].status;
        if !from.can_transition_to(status) {
            match self.config.transition_policy {
                OrderTransitionPolicy::Strict => {
                    return Err(StoreError::InvalidTransition { from, to: status });
                }
                OrderTransitionPolicy::Permissive => {
                    tracing::warn!(order = id, %from, to = %status, "order moved outside fulfilment flow");
                }
            }
        }

        let now = Timestamp::now();
        self.orders.mutate(|items| {
            let order = &mut items[index];
            order.status = status;
            order.updated_at = now.max(order.created_at);
        });
        Ok(true)
    }

    pub(crate) fn order_number_taken(&self, order_number: &str) -> bool {
        self.orders.iter().any(|o| o.order_number == order_number)
    }

    pub(crate) fn order_id_taken(&self, id: &str) -> bool {
        self.order(id).is_some()
    }

    /// Append an order produced by checkout.
    pub(crate) fn insert_order(&mut self, order: Order) {
        tracing::info!(order = %order.id, number = %order.order_number, total = order.total, "order recorded");
        self.orders.mutate(|items| items.push(order));
    }

    // --- Users ---

    pub fn users(&self) -> Arc<Vec<User>> {
        self.users.snapshot()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users whose name or email contains `query`, ignoring case.
    pub fn search_users(&self, query: &str) -> Vec<User> {
        let query = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Flip a user between active and blocked. Returns the new status.
    pub fn toggle_user_status(&mut self, id: &str) -> Option<UserStatus> {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            tracing::debug!(user = id, "status toggle for unknown user");
            return None;
        };

        let status = self.users.as_slice()[index].status.toggled();
        self.users.mutate(|items| items[index].status = status);
        Some(status)
    }

    // --- Categories ---

    pub fn categories(&self) -> Arc<Vec<Category>> {
        self.categories.snapshot()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories that can act as parents.
    pub fn top_level_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.parent_category.is_none())
            .cloned()
            .collect()
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<Category> {
        let id = self.next_id("category", |store, id| store.category(id).is_some());
        let mut category = draft.into_category(id);
        self.validate_category(&category)?;
        category.product_count = seed::count_products(self.products.as_slice(), &category.id);

        let added = category.clone();
        self.categories.mutate(|items| items.push(category));
        Ok(added)
    }

    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> Result<bool> {
        let Some(index) = self.categories.iter().position(|c| c.id == id) else {
            tracing::debug!(category = id, "update for unknown category");
            return Ok(false);
        };

        let mut candidate = self.categories.as_slice()[index].clone();
        patch.apply_to(&mut candidate);
        self.validate_category(&candidate)?;

        self.categories.mutate(|items| items[index] = candidate);
        Ok(true)
    }

    /// Remove a category. Products keep their category; subcategories that
    /// pointed at it become top-level.
    ///
    /// Unlike the other deletes this rewrites records besides the one
    /// removed, so that every `parent_category` left behind still resolves.
    pub fn delete_category(&mut self, id: &str) -> bool {
        let Some(index) = self.categories.iter().position(|c| c.id == id) else {
            tracing::debug!(category = id, "delete for unknown category");
            return false;
        };

        let orphaned = self
            .categories
            .iter()
            .filter(|c| c.parent_category.as_deref() == Some(id))
            .count();
        if orphaned > 0 {
            tracing::info!(category = id, orphaned, "detaching subcategories of deleted category");
        }

        self.categories.mutate(|items| {
            items.remove(index);
            for child in items
                .iter_mut()
                .filter(|c| c.parent_category.as_deref() == Some(id))
            {
                child.parent_category = None;
            }
        });
        true
    }

    fn validate_category(&self, candidate: &Category) -> Result<()> {
        require_text("category name", &candidate.name)?;

        let Some(parent_id) = candidate.parent_category.as_deref() else {
            return Ok(());
        };

        if parent_id == candidate.id {
            return Err(StoreError::Validation(format!(
                "category {} cannot be its own parent",
                candidate.id
            )));
        }

        let parent = self.category(parent_id).ok_or_else(|| {
            StoreError::Validation(format!("parent category {parent_id} does not exist"))
        })?;
        if parent.parent_category.is_some() {
            return Err(StoreError::Validation(format!(
                "parent category {parent_id} is itself a subcategory"
            )));
        }

        let has_children = self
            .categories
            .iter()
            .any(|c| c.parent_category.as_deref() == Some(candidate.id.as_str()));
        if has_children {
            return Err(StoreError::Validation(format!(
                "category {} has subcategories and cannot be nested",
                candidate.id
            )));
        }

        Ok(())
    }

    /// Bring every category's product count in line with the products.
    fn refresh_product_counts(&mut self) {
        let counts: Vec<u32> = self
            .categories
            .iter()
            .map(|c| seed::count_products(self.products.as_slice(), &c.id))
            .collect();

        let stale = self
            .categories
            .iter()
            .zip(&counts)
            .any(|(c, &n)| c.product_count != n);
        if !stale {
            return;
        }

        self.categories.mutate(|items| {
            for (category, n) in items.iter_mut().zip(counts) {
                category.product_count = n;
            }
        });
    }

    // --- Homepage sections ---

    pub fn homepage_sections(&self) -> Arc<Vec<HomepageSection>> {
        self.homepage_sections.snapshot()
    }

    /// Sections in display order.
    pub fn homepage_sections_sorted(&self) -> Vec<HomepageSection> {
        let mut sections = self.homepage_sections.as_slice().to_vec();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn section_by_key(&self, section_key: &str) -> Option<&HomepageSection> {
        self.homepage_sections
            .iter()
            .find(|s| s.section_key == section_key)
    }

    pub fn update_homepage_section(&mut self, id: &str, patch: HomepageSectionPatch) -> Result<bool> {
        let Some(index) = self.homepage_sections.iter().position(|s| s.id == id) else {
            tracing::debug!(section = id, "update for unknown homepage section");
            return Ok(false);
        };

        let mut candidate = self.homepage_sections.as_slice()[index].clone();
        patch.apply_to(&mut candidate);
        require_text("section title", &candidate.title)?;

        self.homepage_sections.mutate(|items| items[index] = candidate);
        Ok(true)
    }

    // --- Benefits ---

    pub fn benefits(&self) -> Arc<Vec<Benefit>> {
        self.benefits.snapshot()
    }

    pub fn benefit(&self, id: &str) -> Option<&Benefit> {
        self.benefits.iter().find(|b| b.id == id)
    }

    /// Benefits in display order.
    pub fn benefits_sorted(&self) -> Vec<Benefit> {
        let mut benefits = self.benefits.as_slice().to_vec();
        benefits.sort_by_key(|b| b.order);
        benefits
    }

    /// Active benefits in display order, as the storefront shows them.
    pub fn active_benefits(&self) -> Vec<Benefit> {
        let mut benefits = self.benefits_sorted();
        benefits.retain(|b| b.status.is_active());
        benefits
    }

    pub fn add_benefit(&mut self, draft: BenefitDraft) -> Result<Benefit> {
        require_text("benefit title", &draft.title)?;
        let id = self.next_id("benefit", |store, id| store.benefit(id).is_some());
        let benefit = draft.into_benefit(id);

        let added = benefit.clone();
        self.benefits.mutate(|items| items.push(benefit));
        Ok(added)
    }

    pub fn update_benefit(&mut self, id: &str, patch: BenefitPatch) -> Result<bool> {
        let Some(index) = self.benefits.iter().position(|b| b.id == id) else {
            tracing::debug!(benefit = id, "update for unknown benefit");
            return Ok(false);
        };

        let mut candidate = self.benefits.as_slice()[index].clone();
        patch.apply_to(&mut candidate);
        require_text("benefit title", &candidate.title)?;

        self.benefits.mutate(|items| items[index] = candidate);
        Ok(true)
    }

    pub fn delete_benefit(&mut self, id: &str) -> bool {
        let Some(index) = self.benefits.iter().position(|b| b.id == id) else {
            tracing::debug!(benefit = id, "delete for unknown benefit");
            return false;
        };

        self.benefits.mutate(|items| {
            items.remove(index);
        });
        true
    }

    // --- Stats ---

    /// Dashboard figures over the current collections.
    pub fn stats(&self) -> AdminStats {
        let delivered = || {
            self.orders
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
        };

        AdminStats {
            total_orders: self.orders.len(),
            total_users: self.users.len(),
            active_products: self.products.iter().filter(|p| p.in_stock).count(),
            pending_orders: self
                .orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            delivered_orders: delivered().count(),
            total_revenue: delivered().fold(0u64, |acc, o| acc.saturating_add(o.total)),
        }
    }

    /// `"{prefix}-{n}"` with `n` drawn from a clock that only moves forward,
    /// skipping values `taken` reports as used.
    fn next_id<F>(&mut self, prefix: &str, taken: F) -> String
    where
        F: Fn(&Self, &str) -> bool,
    {
        let mut n = Timestamp::now().as_millis().max(self.last_id_millis + 1);
        loop {
            let id = format!("{prefix}-{n}");
            if !taken(self, &id) {
                self.last_id_millis = n;
                return id;
            }
            n += 1;
        }
    }
}
