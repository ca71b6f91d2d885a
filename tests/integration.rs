//! Integration tests for the storefront stores.

use grevia_store::{
    catalog, AdminConfig, AdminStore, BenefitDraft, BenefitIcon, CartStore, CategoryDraft,
    CategoryPatch, CheckoutDetails, Customer, Order, OrderItem, OrderStatus,
    OrderTransitionPolicy, PaymentMethod, ProductCategory, ProductDraft, ProductPatch,
    RecordStatus, ShippingAddress, StorageKey, StoreConfig, StoreContext, StoreError,
    Storefront, Timestamp, UserStatus, WishlistStore,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn test_front(dir: &TempDir) -> Storefront {
    Storefront::open(StoreConfig {
        path: dir.path().join("store"),
        ..Default::default()
    })
    .unwrap()
}

fn details() -> CheckoutDetails {
    CheckoutDetails {
        customer: Customer {
            name: "Kavya Nair".to_string(),
            email: "kavya@example.com".to_string(),
            phone: "+91 9811111111".to_string(),
        },
        shipping_address: ShippingAddress {
            address: "4 Hill View".to_string(),
            city: "Kochi".to_string(),
            state: "Kerala".to_string(),
            pincode: "682001".to_string(),
        },
        payment_method: PaymentMethod::Manual,
    }
}

fn order(n: usize, total: u64, status: OrderStatus) -> Order {
    let now = Timestamp::now();
    Order {
        id: format!("order-{n}"),
        order_number: format!("GRV-{n:06}"),
        customer: details().customer,
        shipping_address: details().shipping_address,
        items: vec![OrderItem {
            product_id: "stevia-jar".to_string(),
            product_name: "Grevia Stevia Jar".to_string(),
            quantity: 1,
            price: total,
        }],
        subtotal: total,
        tax: 0,
        shipping: 0,
        total,
        status,
        payment_method: PaymentMethod::Cod,
        created_at: now,
        updated_at: now,
    }
}

fn draft(name: &str, category: ProductCategory) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: "Small batch".to_string(),
        long_description: String::new(),
        ingredients: vec!["Mustard oil".to_string()],
        price: 259,
        original_price: None,
        rating: 4.2,
        reviews: 0,
        image: "/images/new.jpg".to_string(),
        images: vec!["/images/new.jpg".to_string()],
        category,
        subcategory: None,
        badge: None,
        in_stock: true,
    }
}

// --- Shopper Workflow ---

#[test]
fn test_cart_scenario() {
    let mut cart = CartStore::open(StoreContext::in_memory());
    cart.add_to_cart(&catalog::product_by_id("stevia-jar").unwrap(), 2);
    cart.add_to_cart(&catalog::product_by_id("monkfruit-drops").unwrap(), 1);

    assert_eq!(cart.cart_total(), 1297);
    assert_eq!(cart.cart_count(), 3);
}

#[test]
fn test_shopper_checkout_survives_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let placed = {
        let mut front = test_front(&dir);
        let jar = catalog::product_by_id("stevia-jar").unwrap();
        front.cart_mut().add_to_cart(&jar, 2);
        front.wishlist_mut().toggle(&jar);

        let order = front.checkout(details()).unwrap();
        assert!(front.cart().is_empty());
        order
    };

    let front = test_front(&dir);
    assert!(front.cart().is_empty());
    assert!(front.wishlist().is_in_wishlist("stevia-jar"));
    assert_eq!(front.admin().orders().len(), 16);
    assert_eq!(front.admin().order(&placed.id), Some(&placed));
}

#[test]
fn test_order_items_are_snapshots() {
    let mut front = Storefront::in_memory();
    let jar = catalog::product_by_id("stevia-jar").unwrap();
    front.cart_mut().add_one(&jar);
    let placed = front.checkout(details()).unwrap();

    front
        .admin_mut()
        .update_product(
            "stevia-jar",
            ProductPatch {
                name: Some("Renamed Jar".to_string()),
                price: Some(999),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = front.admin().order(&placed.id).unwrap();
    assert_eq!(stored.items[0].product_name, "Grevia Stevia Jar");
    assert_eq!(stored.items[0].price, 499);
}

#[test]
fn test_wishlist_is_idempotent() {
    let mut wishlist = WishlistStore::open(StoreContext::in_memory());
    let cookies = catalog::product_by_id("almond-cookies").unwrap();

    wishlist.add_to_wishlist(&cookies);
    wishlist.add_to_wishlist(&cookies);
    assert_eq!(wishlist.wishlist_count(), 1);

    wishlist.remove_from_wishlist("almond-cookies");
    wishlist.remove_from_wishlist("almond-cookies");
    assert_eq!(wishlist.wishlist_count(), 0);
}

// --- Admin Workflow ---

#[test]
fn test_login_logout() {
    let ctx = StoreContext::in_memory();
    let mut admin = AdminStore::open(ctx.clone(), AdminConfig::default());

    assert!(!admin.login("admin@grevia.com", "wrong"));
    assert!(!admin.is_authenticated());

    assert!(admin.login("admin@grevia.com", "admin123"));
    assert!(admin.is_authenticated());
    assert_eq!(admin.admin_user().unwrap().name, "Admin User");

    // Session persists for the next store opened on the same storage.
    assert!(AdminStore::open(ctx.clone(), AdminConfig::default()).is_authenticated());

    admin.logout();
    assert!(!admin.is_authenticated());
    assert!(!AdminStore::open(ctx, AdminConfig::default()).is_authenticated());

    // Logging out twice is harmless.
    admin.logout();
    assert!(!admin.is_authenticated());
}

#[test]
fn test_stats_scenario() {
    let ctx = StoreContext::in_memory();
    let orders = vec![
        order(1, 100, OrderStatus::Delivered),
        order(2, 200, OrderStatus::Delivered),
        order(3, 300, OrderStatus::Delivered),
        order(4, 400, OrderStatus::Pending),
        order(5, 500, OrderStatus::Pending),
    ];
    assert!(ctx.save(StorageKey::Orders, &orders));

    let mut admin = AdminStore::open(ctx, AdminConfig::default());
    let stats = admin.stats();
    assert_eq!(stats.total_revenue, 600);
    assert_eq!(stats.pending_orders, 2);
    assert_eq!(stats.delivered_orders, 3);
    assert_eq!(stats.total_orders, 5);

    assert!(admin.update_order_status("order-4", OrderStatus::Delivered).unwrap());
    assert_eq!(admin.stats().total_revenue, 1000);
    assert_eq!(admin.stats().pending_orders, 1);

    // Permissive by default: moving out of delivered is allowed.
    assert!(admin.update_order_status("order-1", OrderStatus::Pending).unwrap());
    assert_eq!(admin.stats().total_revenue, 900);
    assert_eq!(admin.stats().pending_orders, 2);

    assert!(!admin.update_order_status("order-99", OrderStatus::Shipped).unwrap());
}

#[test]
fn test_order_status_refreshes_updated_at() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());
    let before = admin.order("order-15").unwrap().clone();

    admin
        .update_order_status("order-15", OrderStatus::Confirmed)
        .unwrap();

    let after = admin.order("order-15").unwrap();
    assert_eq!(after.status, OrderStatus::Confirmed);
    assert!(after.updated_at > before.updated_at);
    assert!(after.updated_at >= after.created_at);
}

#[test]
fn test_strict_transition_policy() {
    let ctx = StoreContext::in_memory();
    assert!(ctx.save(StorageKey::Orders, &vec![order(1, 100, OrderStatus::Delivered)]));

    let mut admin = AdminStore::open(
        ctx,
        AdminConfig {
            transition_policy: OrderTransitionPolicy::Strict,
        },
    );

    let result = admin.update_order_status("order-1", OrderStatus::Pending);
    assert!(matches!(
        result,
        Err(StoreError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending
        })
    ));
    assert_eq!(admin.order("order-1").unwrap().status, OrderStatus::Delivered);
}

#[test]
fn test_toggle_user_scenario() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());
    assert_eq!(admin.user("user-1").unwrap().status, UserStatus::Active);

    assert_eq!(admin.toggle_user_status("user-1"), Some(UserStatus::Blocked));
    assert_eq!(admin.user("user-1").unwrap().status, UserStatus::Blocked);

    assert_eq!(admin.toggle_user_status("user-1"), Some(UserStatus::Active));
    assert_eq!(admin.toggle_user_status("user-404"), None);
}

#[test]
fn test_product_crud_keeps_category_counts() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());

    let added = admin
        .add_product(draft("Garlic Pickle", ProductCategory::Pickles))
        .unwrap();
    assert!(added.id.starts_with("product-"));
    assert_eq!(admin.category("pickles").unwrap().product_count, 4);

    admin
        .update_product(
            &added.id,
            ProductPatch {
                category: Some(ProductCategory::Bakery),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(admin.category("pickles").unwrap().product_count, 3);
    assert_eq!(admin.category("bakery").unwrap().product_count, 4);

    assert!(admin.delete_product(&added.id));
    assert_eq!(admin.category("bakery").unwrap().product_count, 3);
}

#[test]
fn test_invalid_patch_leaves_product_unchanged() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());
    let before = admin.product("lime-pickle").unwrap().clone();

    let result = admin.update_product(
        "lime-pickle",
        ProductPatch {
            rating: Some(6.0),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(admin.product("lime-pickle"), Some(&before));

    assert!(!admin
        .update_product("no-such-product", ProductPatch::default())
        .unwrap());
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());

    let products = admin.products();
    assert!(admin.delete_product("butter-croissants"));
    let expected: Vec<_> = products
        .iter()
        .filter(|p| p.id != "butter-croissants")
        .cloned()
        .collect();
    assert_eq!(*admin.products(), expected);

    let benefits = admin.benefits();
    assert!(admin.delete_benefit("benefit-2"));
    assert_eq!(admin.benefits().len(), benefits.len() - 1);
    assert_eq!(admin.benefit("benefit-1"), benefits.iter().find(|b| b.id == "benefit-1"));

    let categories = admin.categories();
    assert!(admin.delete_category("bakery"));
    assert_eq!(admin.categories().len(), categories.len() - 1);

    // Missing ids are no-ops.
    assert!(!admin.delete_product("butter-croissants"));
    assert!(!admin.delete_benefit("benefit-2"));
    assert!(!admin.delete_category("bakery"));
    assert_eq!(admin.products().len(), 8);
    assert_eq!(admin.benefits().len(), 3);
    assert_eq!(admin.categories().len(), 2);
}

#[test]
fn test_category_hierarchy() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());

    let child = admin
        .add_category(CategoryDraft {
            name: "Stevia".to_string(),
            description: "Leaf sweeteners".to_string(),
            image: None,
            parent_category: Some("sweeteners".to_string()),
            status: RecordStatus::Active,
        })
        .unwrap();
    assert_eq!(child.product_count, 0);
    assert_eq!(admin.top_level_categories().len(), 3);

    // No third level.
    let grandchild = admin.add_category(CategoryDraft {
        name: "Stevia Drops".to_string(),
        description: String::new(),
        image: None,
        parent_category: Some(child.id.clone()),
        status: RecordStatus::Active,
    });
    assert!(matches!(grandchild, Err(StoreError::Validation(_))));

    // A parent with children cannot itself be nested.
    let nest_parent = admin.update_category(
        "sweeteners",
        CategoryPatch {
            parent_category: Some(Some("bakery".to_string())),
            ..Default::default()
        },
    );
    assert!(matches!(nest_parent, Err(StoreError::Validation(_))));

    let dangling = admin.update_category(
        "bakery",
        CategoryPatch {
            parent_category: Some(Some("missing".to_string())),
            ..Default::default()
        },
    );
    assert!(matches!(dangling, Err(StoreError::Validation(_))));

    // Deleting the parent detaches the child; products are untouched.
    assert!(admin.delete_category("sweeteners"));
    assert_eq!(admin.category(&child.id).unwrap().parent_category, None);
    assert_eq!(admin.products_by_category(ProductCategory::Sweeteners).len(), 3);
    assert!(admin
        .categories()
        .iter()
        .filter_map(|c| c.parent_category.as_deref())
        .all(|parent| admin.category(parent).is_some()));
}

#[test]
fn test_benefit_crud() {
    let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());

    let added = admin
        .add_benefit(BenefitDraft {
            title: "Keto Friendly".to_string(),
            description: "Fits low-carb diets".to_string(),
            icon: BenefitIcon::Zap,
            order: 0,
            status: RecordStatus::Active,
        })
        .unwrap();

    assert!(added.id.starts_with("benefit-"));
    assert_eq!(admin.benefits_sorted()[0].id, added.id);
    assert_eq!(admin.active_benefits().len(), 5);
}
