use std::fmt;

/// Represents a single product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    // Signed so sales adjustments can drive it negative; the system reports
    // low stock rather than enforcing a floor.
    pub stock: i64,
    pub category: String,
}

impl Product {
    pub fn new(product_id: u32, name: &str, price: f64, stock: i64, category: &str) -> Self {
        Product {
            product_id,
            name: name.to_string(),
            price,
            stock,
            category: category.to_string(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={}, stock={}, category={})",
            self.product_id, self.name, self.price, self.stock, self.category
        )
    }
}
