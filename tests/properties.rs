//! Property tests over cart, wishlist and admin stats.

use grevia_store::{
    catalog, AdminConfig, AdminStore, CartStore, OrderStatus, StoreContext, WishlistStore,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum CartOp {
    Add(usize, u32),
    Update(usize, u32),
    Remove(usize),
    Clear,
}

fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => (0..9usize, 0..5u32).prop_map(|(p, q)| CartOp::Add(p, q)),
        2 => (0..9usize, 0..5u32).prop_map(|(p, q)| CartOp::Update(p, q)),
        1 => (0..9usize).prop_map(CartOp::Remove),
        1 => Just(CartOp::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_repeated_adds_make_one_line(quantities in prop::collection::vec(1..20u32, 1..12)) {
        let jar = catalog::product_by_id("stevia-jar").unwrap();
        let mut cart = CartStore::open(StoreContext::in_memory());

        for q in &quantities {
            cart.add_to_cart(&jar, *q);
        }

        let sum: u32 = quantities.iter().sum();
        prop_assert_eq!(cart.items().len(), 1);
        prop_assert_eq!(cart.item("stevia-jar").unwrap().quantity, sum);
    }

    #[test]
    fn prop_cart_matches_model(ops in prop::collection::vec(cart_op(), 0..40)) {
        let products = catalog::products();
        let ctx = StoreContext::in_memory();
        let mut cart = CartStore::open(ctx.clone());
        let mut model: BTreeMap<String, u32> = BTreeMap::new();

        for op in ops {
            match op {
                CartOp::Add(p, q) => {
                    cart.add_to_cart(&products[p], q);
                    if q > 0 {
                        *model.entry(products[p].id.clone()).or_default() += q;
                    }
                }
                CartOp::Update(p, q) => {
                    cart.update_quantity(&products[p].id, q);
                    if q == 0 {
                        model.remove(&products[p].id);
                    } else if let Some(line) = model.get_mut(&products[p].id) {
                        *line = q;
                    }
                }
                CartOp::Remove(p) => {
                    cart.remove_from_cart(&products[p].id);
                    model.remove(&products[p].id);
                }
                CartOp::Clear => {
                    cart.clear_cart();
                    model.clear();
                }
            }
        }

        let expected_total: u64 = model
            .iter()
            .map(|(id, q)| catalog::product_by_id(id).unwrap().price * u64::from(*q))
            .sum();
        let expected_count: u64 = model.values().map(|q| u64::from(*q)).sum();

        prop_assert_eq!(cart.cart_total(), expected_total);
        prop_assert_eq!(cart.cart_count(), expected_count);
        prop_assert_eq!(cart.items().len(), model.len());
        prop_assert!(cart.items().iter().all(|l| l.quantity >= 1));

        // Reloading from the same storage gives the same cart.
        let reloaded = CartStore::open(ctx);
        prop_assert_eq!(reloaded.items(), cart.items());
    }

    #[test]
    fn prop_wishlist_add_is_idempotent(picks in prop::collection::vec(0..9usize, 0..30)) {
        let products = catalog::products();
        let mut wishlist = WishlistStore::open(StoreContext::in_memory());

        for p in &picks {
            wishlist.add_to_wishlist(&products[*p]);
        }

        let mut distinct = picks.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(wishlist.wishlist_count(), distinct.len());
    }

    #[test]
    fn prop_revenue_tracks_delivered_orders(
        moves in prop::collection::vec((0..15usize, 0..5usize), 0..25)
    ) {
        let mut admin = AdminStore::open(StoreContext::in_memory(), AdminConfig::default());

        for (order, status) in moves {
            let id = format!("order-{}", order + 1);
            admin.update_order_status(&id, OrderStatus::ALL[status]).unwrap();
        }

        let expected: u64 = admin
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .map(|o| o.total)
            .sum();
        prop_assert_eq!(admin.stats().total_revenue, expected);
    }
}
