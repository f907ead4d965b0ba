use std::fmt;

use crate::product::Product;

// Products at or below this stock level trigger a restocking warning.
// Process-wide and fixed; there is no way to change it at runtime.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

//Warning produced when a mutation leaves a product's stock at or below the
//threshold. Carries enough to name the product without holding a borrow on
//the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockWarning {
    pub product_id: u32,
    pub name: String,
    pub stock: i64,
}

impl fmt::Display for LowStockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WARNING: Stock for product '{}' (ID: {}) is low! Consider restocking.",
            self.name, self.product_id
        )
    }
}

//Invoked after every mutating operation that touches stock. Pure check, no
//state change; the caller decides how to surface the warning.
pub fn check_stock_level(product: &Product) -> Option<LowStockWarning> {
    if product.stock <= LOW_STOCK_THRESHOLD {
        Some(LowStockWarning {
            product_id: product.product_id,
            name: product.name.clone(),
            stock: product.stock,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, true)]
    #[case(0, true)]
    #[case(-3, true)]
    #[case(6, false)]
    #[case(100, false)]
    fn warns_at_or_below_threshold(#[case] stock: i64, #[case] expect_warning: bool) {
        let product = Product::new(7, "Widget", 9.99, stock, "Hardware");
        assert_eq!(check_stock_level(&product).is_some(), expect_warning);
    }

    #[test]
    fn warning_names_the_product() {
        let product = Product::new(3, "Bolt", 0.10, 2, "Hardware");
        let warning = check_stock_level(&product).unwrap();
        assert_eq!(
            warning.to_string(),
            "WARNING: Stock for product 'Bolt' (ID: 3) is low! Consider restocking."
        );
        assert_eq!(warning.stock, 2);
    }
}
