//! Deterministic first-run data for the admin collections.
//!
//! Everything time-dependent is computed relative to the `now` passed in,
//! so the same `now` always yields the same records.

use super::records::{Benefit, BenefitIcon, Category, HomepageSection, User, UserStatus};
use crate::catalog;
use crate::types::{
    Customer, Order, OrderItem, OrderStatus, PaymentMethod, Product, RecordStatus,
    ShippingAddress, Timestamp,
};

const ORDER_NAMES: [&str; 5] = [
    "Rahul Sharma",
    "Priya Patel",
    "Amit Kumar",
    "Sneha Gupta",
    "Vikram Singh",
];

const USER_NAMES: [&str; 8] = [
    "Rahul Sharma",
    "Priya Patel",
    "Amit Kumar",
    "Sneha Gupta",
    "Vikram Singh",
    "Anita Desai",
    "Ravi Verma",
    "Meera Joshi",
];

const CITIES: [&str; 5] = ["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata"];

/// Number of seeded orders.
pub const SEED_ORDER_COUNT: usize = 15;

/// `"Rahul Sharma"` becomes `rahul.sharma@email.com`.
fn email_for(name: &str) -> String {
    format!("{}@email.com", name.to_lowercase().replacen(' ', ".", 1))
}

fn phone_for(i: usize) -> String {
    let digits = (43_210 + i).to_string();
    let tail = &digits[digits.len().saturating_sub(5)..];
    format!("+91 98765{tail}")
}

/// Fifteen orders cycling through every status.
pub fn orders(now: Timestamp) -> Vec<Order> {
    (0..SEED_ORDER_COUNT)
        .map(|i| {
            let name = ORDER_NAMES[i % ORDER_NAMES.len()];
            let subtotal = 1297;
            let tax = 233;
            let shipping = if i % 3 == 0 { 0 } else { 50 };

            Order {
                id: format!("order-{}", i + 1),
                order_number: format!("GRV-{:06}", 1000 + i),
                customer: Customer {
                    name: name.to_string(),
                    email: email_for(name),
                    phone: phone_for(i),
                },
                shipping_address: ShippingAddress {
                    address: format!("{}, Example Street", 100 + i),
                    city: CITIES[i % CITIES.len()].to_string(),
                    state: "Maharashtra".to_string(),
                    pincode: format!("40000{}", i % 10),
                },
                items: vec![
                    OrderItem {
                        product_id: "stevia-jar".to_string(),
                        product_name: "Grevia Stevia Jar".to_string(),
                        quantity: 2,
                        price: 499,
                    },
                    OrderItem {
                        product_id: "monkfruit-drops".to_string(),
                        product_name: "Grevia Monkfruit Drops".to_string(),
                        quantity: 1,
                        price: 299,
                    },
                ],
                subtotal,
                tax,
                shipping,
                total: subtotal + tax + shipping,
                status: OrderStatus::ALL[i % OrderStatus::ALL.len()],
                payment_method: if i % 2 == 0 {
                    PaymentMethod::Cod
                } else {
                    PaymentMethod::Manual
                },
                created_at: now.days_before(2 * i as i64),
                updated_at: now.days_before(i as i64),
            }
        })
        .collect()
}

/// Eight customer accounts; the sixth is blocked.
pub fn users(now: Timestamp) -> Vec<User> {
    USER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| User {
            id: format!("user-{}", i + 1),
            name: name.to_string(),
            email: email_for(name),
            phone: phone_for(i),
            status: if i == 5 {
                UserStatus::Blocked
            } else {
                UserStatus::Active
            },
            created_at: now.days_before(10 * i as i64),
            order_count: (i as u32 * 3) % 10 + 1,
            total_spent: 500 + (i as u64 * 613) % 5000,
        })
        .collect()
}

/// The catalog categories, active, with counts taken from `products`.
pub fn categories(products: &[Product]) -> Vec<Category> {
    catalog::categories()
        .into_iter()
        .map(|c| Category {
            id: c.id.to_string(),
            name: c.name.to_string(),
            description: c.description.to_string(),
            image: c.image.map(str::to_string),
            parent_category: None,
            status: RecordStatus::Active,
            product_count: count_products(products, c.id),
        })
        .collect()
}

pub(crate) fn count_products(products: &[Product], category_id: &str) -> u32 {
    products.iter().filter(|p| p.belongs_to(category_id)).count() as u32
}

/// Hero, sweeteners and call-to-action blocks.
pub fn homepage_sections() -> Vec<HomepageSection> {
    let some = |s: &str| Some(s.to_string());
    vec![
        HomepageSection {
            id: "hero".to_string(),
            section_key: "hero".to_string(),
            title: "Sweetness Without Sacrifice".to_string(),
            subtitle: some("Nature's Perfect Sweeteners"),
            description: some("Discover the pure taste of nature with our premium Stevia and Monk Fruit sweeteners. Zero calories, zero guilt, all the sweetness you love."),
            cta_text: some("Shop Now"),
            cta_link: some("/products/sweeteners"),
            image: None,
            badge: some("100% Natural"),
            order: 1,
            status: RecordStatus::Active,
        },
        HomepageSection {
            id: "sweeteners-section".to_string(),
            section_key: "sweeteners".to_string(),
            title: "Nature's Finest Sweeteners".to_string(),
            subtitle: some("Choose Your Perfect Match"),
            description: some("Explore our range of premium natural sweeteners"),
            cta_text: None,
            cta_link: None,
            image: None,
            badge: None,
            order: 2,
            status: RecordStatus::Active,
        },
        HomepageSection {
            id: "cta-section".to_string(),
            section_key: "cta".to_string(),
            title: "Ready to Make the Switch?".to_string(),
            subtitle: some("Join thousands of happy customers"),
            description: some("Start your journey to healthier sweetening today"),
            cta_text: some("Get Started"),
            cta_link: some("/products/sweeteners"),
            image: None,
            badge: some("Special Offer"),
            order: 3,
            status: RecordStatus::Active,
        },
    ]
}

pub fn benefits() -> Vec<Benefit> {
    let benefit = |n: i32, title: &str, description: &str, icon: BenefitIcon| Benefit {
        id: format!("benefit-{n}"),
        title: title.to_string(),
        description: description.to_string(),
        icon,
        order: n,
        status: RecordStatus::Active,
    };

    vec![
        benefit(1, "Zero Calories", "Enjoy sweetness without adding calories to your diet", BenefitIcon::Leaf),
        benefit(2, "Blood Sugar Friendly", "Safe for diabetics with zero glycemic impact", BenefitIcon::Heart),
        benefit(3, "100% Natural", "No artificial ingredients or chemicals", BenefitIcon::Sparkles),
        benefit(4, "Tooth Friendly", "Does not contribute to tooth decay", BenefitIcon::Shield),
    ]
}
