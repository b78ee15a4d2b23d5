//! Read-only product catalog.
//!
//! # Responsibility
//! - Hold the fixed, ordered product list the storefront renders.
//! - Answer id lookups, category filters and the distinct category set.
//!
//! # Invariants
//! - Catalog order is stable; nothing here ever mutates a product.

use crate::model::cart::Product;

/// Fixed, ordered product list.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps an arbitrary product list, preserving its order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo storefront (prices in VND minor units).
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks one product up by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products of one category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Sorted distinct category names.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .products
            .iter()
            .map(|product| product.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

fn demo_products() -> Vec<Product> {
    fn product(
        id: &str,
        name: &str,
        price: i64,
        image: &str,
        description: &str,
        category: &str,
        stock: u32,
        rating: f32,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            stock,
            rating,
        }
    }

    vec![
        product(
            "laptop-1",
            "MacBook Pro 14\" M3",
            45_990_000,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
            "Powerful laptop with M3 chip, 16GB RAM, 512GB SSD. Perfect for developers and creatives.",
            "Electronics",
            15,
            4.8,
        ),
        product(
            "phone-1",
            "iPhone 15 Pro Max",
            32_990_000,
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
            "Latest iPhone with titanium design, A17 Pro chip, and advanced camera system.",
            "Electronics",
            25,
            4.9,
        ),
        product(
            "headphones-1",
            "Sony WH-1000XM5",
            8_990_000,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            "Industry-leading noise canceling headphones with 30-hour battery life.",
            "Audio",
            30,
            4.7,
        ),
        product(
            "watch-1",
            "Apple Watch Series 9",
            10_990_000,
            "https://images.unsplash.com/photo-1551816230-ef5deaed4a26?w=400",
            "Advanced health monitoring, fitness tracking, and seamless iPhone integration.",
            "Wearables",
            20,
            4.6,
        ),
        product(
            "tablet-1",
            "iPad Pro 12.9\"",
            26_990_000,
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400",
            "Professional tablet with M2 chip, Liquid Retina display, and Apple Pencil support.",
            "Electronics",
            12,
            4.8,
        ),
        product(
            "speaker-1",
            "HomePod mini",
            2_790_000,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400",
            "Compact smart speaker with amazing sound and Siri intelligence.",
            "Audio",
            35,
            4.5,
        ),
        product(
            "camera-1",
            "Canon EOS R6 Mark II",
            67_990_000,
            "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400",
            "Full-frame mirrorless camera with 24.2MP sensor and advanced autofocus.",
            "Photography",
            8,
            4.9,
        ),
        product(
            "gaming-1",
            "PlayStation 5",
            13_990_000,
            "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?w=400",
            "Next-gen gaming console with ray tracing, 3D audio, and lightning-fast SSD.",
            "Gaming",
            10,
            4.8,
        ),
        product(
            "keyboard-1",
            "Magic Keyboard",
            3_690_000,
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
            "Wireless keyboard with scissor mechanism and Lightning connector.",
            "Accessories",
            40,
            4.4,
        ),
        product(
            "mouse-1",
            "Magic Mouse",
            2_290_000,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400",
            "Multi-Touch wireless mouse with optimized foot design.",
            "Accessories",
            45,
            4.2,
        ),
        product(
            "monitor-1",
            "Studio Display",
            43_990_000,
            "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=400",
            "27-inch 5K Retina display with 600 nits brightness and P3 wide color.",
            "Electronics",
            6,
            4.7,
        ),
        product(
            "charger-1",
            "MagSafe Charger",
            1_190_000,
            "https://images.unsplash.com/photo-1609592606130-0bb4fef1cad3?w=400",
            "Wireless charger with perfect alignment for iPhone 12 and later.",
            "Accessories",
            60,
            4.3,
        ),
    ]
}
