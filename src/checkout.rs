//! Turning a cart into an order.
//!
//! Checkout is simulated: no payment is taken. The cart lines are copied
//! into an [`Order`], which is appended to the admin order list, and the
//! cart is emptied.

use crate::admin::AdminStore;
use crate::cart::CartStore;
use crate::error::{Result, StoreError};
use crate::types::{
    Customer, Order, OrderItem, OrderStatus, PaymentMethod, ShippingAddress, Timestamp,
};

/// Order numbers carry this many trailing clock digits.
const ORDER_NUMBER_MODULUS: i64 = 100_000_000;

/// Pricing rules applied at checkout.
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Tax as a whole percentage of the subtotal. Catalog prices already
    /// include tax, so the default charges none on top.
    pub tax_rate_percent: u64,

    /// Shipping fee charged below the free-shipping threshold.
    pub flat_shipping: u64,

    /// Subtotal at or above which shipping is free. `None` disables it.
    pub free_shipping_threshold: Option<u64>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: 0,
            flat_shipping: 0,
            free_shipping_threshold: None,
        }
    }
}

impl CheckoutConfig {
    /// Price a cart subtotal.
    pub fn totals(&self, subtotal: u64) -> OrderTotals {
        let tax = subtotal.saturating_mul(self.tax_rate_percent) / 100;
        let shipping = match self.free_shipping_threshold {
            Some(threshold) if subtotal >= threshold => 0,
            _ => self.flat_shipping,
        };

        OrderTotals {
            subtotal,
            tax,
            shipping,
            total: subtotal.saturating_add(tax).saturating_add(shipping),
        }
    }
}

/// The money lines of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: u64,
    pub tax: u64,
    pub shipping: u64,
    pub total: u64,
}

/// What the shopper enters on the checkout form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl CheckoutDetails {
    fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.customer.name),
            ("email", &self.customer.email),
            ("phone", &self.customer.phone),
            ("address", &self.shipping_address.address),
            ("city", &self.shipping_address.city),
            ("state", &self.shipping_address.state),
            ("pincode", &self.shipping_address.pincode),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!("checkout {field} is required")));
            }
        }

        if !self.customer.email.contains('@') {
            return Err(StoreError::Validation(format!(
                "checkout email {} is not an address",
                self.customer.email
            )));
        }

        Ok(())
    }
}

/// Place an order for everything in `cart`.
///
/// On success the order is stored with status pending and the cart is
/// empty. On error nothing changes.
pub fn place_order(
    cart: &mut CartStore,
    admin: &mut AdminStore,
    details: CheckoutDetails,
    config: &CheckoutConfig,
) -> Result<Order> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }
    details.validate()?;

    let lines = cart.items();
    let totals = config.totals(cart.cart_total());
    let now = Timestamp::now();

    let mut n = now.as_millis();
    let id = loop {
        let candidate = format!("order-{n}");
        if !admin.order_id_taken(&candidate) {
            break candidate;
        }
        n += 1;
    };

    let mut n = now.as_millis().rem_euclid(ORDER_NUMBER_MODULUS);
    let order_number = loop {
        let candidate = format!("GRV{n:08}");
        if !admin.order_number_taken(&candidate) {
            break candidate;
        }
        n = (n + 1) % ORDER_NUMBER_MODULUS;
    };

    let order = Order {
        id,
        order_number,
        customer: details.customer,
        shipping_address: details.shipping_address,
        items: lines.iter().map(OrderItem::from).collect(),
        subtotal: totals.subtotal,
        tax: totals.tax,
        shipping: totals.shipping,
        total: totals.total,
        status: OrderStatus::Pending,
        payment_method: details.payment_method,
        created_at: now,
        updated_at: now,
    };

    admin.insert_order(order.clone());
    cart.clear_cart();
    Ok(order)
}
