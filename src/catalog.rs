//! Static seed catalog.
//!
//! Used to populate the product and category collections the first time a
//! store opens against empty storage.

use crate::types::{Product, ProductCategory};

const PRODUCT_1: &str = "/assets/product-1.jpg";
const PRODUCT_2: &str = "/assets/product-2.jpg";
const PRODUCT_3: &str = "/assets/product-3.jpg";
const BAKERY: &str = "/assets/bakery-category.jpg";
const PICKLES: &str = "/assets/pickles-category.jpg";

/// A catalog category before admin bookkeeping is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    long_description: &str,
    ingredients: &[&str],
    price: u64,
    rating: f32,
    reviews: u32,
    image: &str,
    category: ProductCategory,
    badge: Option<&str>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        price,
        original_price: None,
        rating,
        reviews,
        image: image.to_string(),
        images: vec![image.to_string()],
        category,
        subcategory: None,
        badge: badge.map(str::to_string),
        in_stock: true,
    }
}

/// The launch catalog: three sweeteners, three bakery items, three pickles.
pub fn products() -> Vec<Product> {
    use ProductCategory::*;

    vec![
        product(
            "stevia-jar",
            "Grevia Stevia Jar",
            "Premium stevia in elegant glass jar",
            "Our signature Grevia Stevia Jar contains pure, organic stevia extract sourced from the finest stevia leaves. Perfect for everyday sweetening needs, this premium product comes in an elegant glass jar that preserves freshness and adds a touch of sophistication to your kitchen.",
            &["Organic Stevia Leaf Extract", "Natural Fiber (Inulin)"],
            499,
            4.9,
            128,
            PRODUCT_1,
            Sweeteners,
            Some("Best Seller"),
        ),
        product(
            "stevia-powder",
            "Grevia Stevia Powder",
            "Organic stevia in eco-friendly pouch",
            "Grevia Stevia Powder offers the same exceptional quality as our jar variant, packaged in an eco-conscious pouch for minimal environmental impact. This versatile powder dissolves instantly in hot or cold beverages and works perfectly in baking recipes.",
            &["Organic Stevia Leaf Extract", "Erythritol (Non-GMO)"],
            349,
            4.8,
            96,
            PRODUCT_2,
            Sweeteners,
            Some("New"),
        ),
        product(
            "monkfruit-drops",
            "Grevia Monkfruit Drops",
            "Liquid sweetener for beverages",
            "Our Monkfruit Drops provide a convenient liquid form of natural sweetness. Made from pure monk fruit extract, these drops are perfect for sweetening your coffee, tea, smoothies, and other beverages without any bitter aftertaste.",
            &["Monk Fruit Extract", "Purified Water", "Citric Acid"],
            299,
            4.7,
            74,
            PRODUCT_3,
            Sweeteners,
            None,
        ),
        product(
            "whole-grain-bread",
            "Artisan Whole Grain Bread",
            "Freshly baked with organic whole grains",
            "Our Artisan Whole Grain Bread is crafted with a blend of organic whole grains, offering a hearty texture and rich, nutty flavor. Baked fresh daily with traditional methods and no artificial preservatives.",
            &["Organic Whole Wheat Flour", "Oats", "Flax Seeds", "Honey", "Sea Salt", "Yeast"],
            189,
            4.8,
            64,
            BAKERY,
            Bakery,
            Some("Fresh Daily"),
        ),
        product(
            "butter-croissants",
            "Classic Butter Croissants",
            "Flaky, golden croissants made with pure butter",
            "Indulge in our Classic Butter Croissants, handcrafted with layers of pure butter and premium flour. Each croissant is perfectly flaky on the outside and soft on the inside, ideal for breakfast or an afternoon treat.",
            &["Refined Flour", "Pure Butter", "Milk", "Sugar", "Salt", "Yeast"],
            129,
            4.9,
            89,
            BAKERY,
            Bakery,
            None,
        ),
        product(
            "almond-cookies",
            "Roasted Almond Cookies",
            "Crunchy cookies with roasted almonds",
            "Our Roasted Almond Cookies are made with premium roasted almonds and traditional recipe. These crunchy, buttery cookies are perfect for tea time or as a healthy snack option.",
            &["Refined Flour", "Butter", "Roasted Almonds", "Brown Sugar", "Vanilla Extract", "Salt"],
            199,
            4.7,
            52,
            BAKERY,
            Bakery,
            None,
        ),
        product(
            "mango-pickle",
            "Traditional Mango Pickle",
            "Authentic recipe with raw mangoes and spices",
            "Our Traditional Mango Pickle is made using a time-honored family recipe. Fresh raw mangoes are carefully selected and pickled with a blend of aromatic spices and cold-pressed mustard oil, creating a perfect balance of tangy, spicy, and savory flavors.",
            &["Raw Mango", "Mustard Oil", "Red Chili Powder", "Fenugreek Seeds", "Mustard Seeds", "Salt", "Turmeric"],
            249,
            4.9,
            112,
            PICKLES,
            Pickles,
            Some("Traditional"),
        ),
        product(
            "lime-pickle",
            "Tangy Lime Pickle",
            "Zesty lime pickle with aromatic spices",
            "Experience the perfect blend of citrus and spice with our Tangy Lime Pickle. Made with fresh limes and a carefully curated mix of spices, this pickle adds a burst of flavor to any meal.",
            &["Fresh Lime", "Mustard Oil", "Red Chili", "Fenugreek", "Asafoetida", "Salt"],
            219,
            4.8,
            78,
            PICKLES,
            Pickles,
            None,
        ),
        product(
            "mixed-vegetable-pickle",
            "Mixed Vegetable Pickle",
            "A medley of garden vegetables in spiced oil",
            "Our Mixed Vegetable Pickle brings together a colorful assortment of fresh vegetables including carrots, cauliflower, and green chilies. Each vegetable is carefully pickled to retain its crunch while absorbing the rich, spicy flavors.",
            &["Carrot", "Cauliflower", "Green Chili", "Mustard Oil", "Spices", "Salt"],
            279,
            4.7,
            56,
            PICKLES,
            Pickles,
            Some("Popular"),
        ),
    ]
}

/// Top-level catalog categories.
pub fn categories() -> Vec<CatalogCategory> {
    vec![
        CatalogCategory {
            id: "sweeteners",
            name: "Premium Sweeteners",
            description: "Natural sweeteners for health-conscious living",
            image: None,
        },
        CatalogCategory {
            id: "bakery",
            name: "Bakery Items",
            description: "Freshly prepared, minimally processed baked goods made for everyday indulgence.",
            image: Some(BAKERY),
        },
        CatalogCategory {
            id: "pickles",
            name: "Pickles & Preserves",
            description: "Traditional recipes crafted with natural ingredients and no artificial preservatives.",
            image: Some(PICKLES),
        },
    ]
}

/// Look up a seed product by id.
pub fn product_by_id(id: &str) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}
