//! The static, in-memory product catalog.
//!
//! The storefront has no backend: the catalog is a hardcoded, read-only list
//! of products and categories, resolved by the display layer before any cart
//! operation is invoked.

use shopfront_core::{CategoryId, ProductId};

use crate::product::{Category, Product, Rating};

/// Read-only product/category catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The built-in demo catalog (4 categories, 12 products).
    pub fn seed() -> Self {
        Self::new(seed_products(), seed_categories())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a product id to its record, if present.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Resolve a category id to its record, if present.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All products in a category (case-insensitive label match), in catalog order.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

fn product(
    id: u32,
    name: &str,
    price: u64,
    image: &str,
    category: &str,
    rating_tenths: u8,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        image: image.to_string(),
        category: category.to_string(),
        rating: Rating::from_tenths(rating_tenths),
        description: description.to_string(),
    }
}

fn category(id: u32, name: &str, image: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        image: image.to_string(),
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        category(
            1,
            "Electronics",
            "https://images.unsplash.com/photo-1498049794561-7780e7231661?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
        ),
        category(
            2,
            "Clothing",
            "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
        ),
        category(
            3,
            "Home & Kitchen",
            "https://images.unsplash.com/photo-1556911220-bff31c812dba?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
        ),
        category(
            4,
            "Books",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
        ),
    ]
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Wireless Headphones",
            12999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Electronics",
            45,
            "Premium wireless headphones with noise cancellation and 30-hour battery life.",
        ),
        product(
            2,
            "Smartphone",
            79999,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Electronics",
            48,
            "Latest smartphone with 6.7\" display, 128GB storage, and triple camera system.",
        ),
        product(
            3,
            "Laptop",
            129999,
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Electronics",
            47,
            "Powerful laptop with 16GB RAM, 512GB SSD, and dedicated graphics card.",
        ),
        product(
            4,
            "Smart Watch",
            24999,
            "https://images.unsplash.com/photo-1508685096489-7aacd43bd3b1?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Electronics",
            42,
            "Smart watch with fitness tracking, heart rate monitoring, and GPS.",
        ),
        product(
            5,
            "Cotton T-Shirt",
            1999,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Clothing",
            41,
            "Comfortable cotton t-shirt available in multiple colors and sizes.",
        ),
        product(
            6,
            "Denim Jeans",
            5999,
            "https://images.unsplash.com/photo-1542272604-787c3835535d?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Clothing",
            43,
            "Classic denim jeans with straight fit and durable fabric.",
        ),
        product(
            7,
            "Coffee Maker",
            8999,
            "https://images.unsplash.com/photo-1606483956061-46a898dce538?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Home & Kitchen",
            46,
            "Programmable coffee maker with 12-cup capacity and built-in grinder.",
        ),
        product(
            8,
            "Blender",
            6999,
            "https://images.unsplash.com/photo-1570222094114-d054a817e56b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Home & Kitchen",
            40,
            "High-speed blender for smoothies, soups, and more with multiple speed settings.",
        ),
        product(
            9,
            "Bestselling Novel",
            1499,
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Books",
            49,
            "Award-winning novel from a bestselling author that will keep you on the edge of your seat.",
        ),
        product(
            10,
            "Cookbook",
            2499,
            "https://images.unsplash.com/photo-1589998059171-988d887df646?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Books",
            44,
            "Collection of 100+ recipes for beginners and experienced cooks alike.",
        ),
        product(
            11,
            "Wireless Earbuds",
            7999,
            "https://images.unsplash.com/photo-1572569511254-d054a817e56b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Electronics",
            43,
            "Compact wireless earbuds with charging case and water resistance.",
        ),
        product(
            12,
            "Hooded Sweatshirt",
            3999,
            "https://images.unsplash.com/photo-1556821840-3a63f95609a7?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60",
            "Clothing",
            42,
            "Warm and cozy hooded sweatshirt perfect for colder weather.",
        ),
    ]
}
