//! Demo catalog contents.

use catalog_entity::product::{CreateProduct, Gender};

struct DemoProduct {
    title: &'static str,
    price: f64,
    description: &'static str,
    stock: i32,
    sizes: &'static [&'static str],
    gender: Gender,
    tags: &'static [&'static str],
    images: &'static [&'static str],
}

const DEMO_PRODUCTS: &[DemoProduct] = &[
    DemoProduct {
        title: "Men's Chill Crew Neck Sweatshirt",
        price: 75.0,
        description: "Relaxed fit crew neck in a heavyweight cotton blend.",
        stock: 7,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: Gender::Men,
        tags: &["sweatshirt"],
        images: &["1740176-00-A_0_2000.jpg", "1740176-00-A_1.jpg"],
    },
    DemoProduct {
        title: "Men's Quilted Shirt Jacket",
        price: 200.0,
        description: "Water-resistant quilted shell with snap closures.",
        stock: 5,
        sizes: &["XS", "S", "M", "XL", "XXL"],
        gender: Gender::Men,
        tags: &["jacket"],
        images: &["1740507-00-A_0_2000.jpg", "1740507-00-A_1.jpg"],
    },
    DemoProduct {
        title: "Women's Cropped Puffer Jacket",
        price: 225.0,
        description: "Cropped silhouette with a high collar and recycled fill.",
        stock: 85,
        sizes: &["XS", "S", "M"],
        gender: Gender::Women,
        tags: &["hoodie"],
        images: &["1740535-00-A_0_2000.jpg", "1740535-00-A_1.jpg"],
    },
    DemoProduct {
        title: "Kids Racing Stripe Tee",
        price: 30.0,
        description: "Soft cotton tee with a contrast racing stripe.",
        stock: 10,
        sizes: &["XS", "S", "M", "L"],
        gender: Gender::Kid,
        tags: &["shirt"],
        images: &["1742693-00-A_0_2000.jpg", "1742693-00-A_1.jpg"],
    },
    DemoProduct {
        title: "Unisex Logo Beanie",
        price: 35.0,
        description: "Ribbed knit beanie with a woven logo patch.",
        stock: 100,
        sizes: &[],
        gender: Gender::Unisex,
        tags: &["hats"],
        images: &["1740417-00-A_0_2000.jpg"],
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Create inputs for the demo catalog.
pub fn demo_products() -> Vec<CreateProduct> {
    DEMO_PRODUCTS
        .iter()
        .map(|demo| CreateProduct {
            title: demo.title.to_string(),
            price: Some(demo.price),
            description: Some(demo.description.to_string()),
            slug: None,
            stock: Some(demo.stock),
            sizes: strings(demo.sizes),
            gender: demo.gender,
            tags: Some(strings(demo.tags)),
            images: strings(demo.images),
        })
        .collect()
}
