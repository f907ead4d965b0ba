use tracing::{info, warn};

use crate::error::InventoryError;
use crate::inventory::{Inventory, permissions, stock};
use crate::inventory::stock::LowStockWarning;
use crate::product::Product;

//Result of a successful create: the assigned id plus the low-stock warning,
//if the product already starts at or below the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProduct {
    pub product_id: u32,
    pub warning: Option<LowStockWarning>,
}

//Result of a successful stock adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    pub new_stock: i64,
    pub warning: Option<LowStockWarning>,
}

//Field changes for update_product. None leaves the field untouched; Some is
//applied even when the value is zero or an empty string, so "set price to 0"
//and "no change requested" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

//Create (admin only). Ids come from a monotonic counter, so an id freed by a
//delete is never handed out again.
pub fn create_product(
    inventory: &mut Inventory,
    name: &str,
    price: f64,
    stock_level: i64,
    category: &str,
) -> Result<CreatedProduct, InventoryError> {
    permissions::check_admin_privilege(inventory)?;

    let product_id = inventory.next_product_id;
    inventory.next_product_id += 1;

    let product = Product::new(product_id, name, price, stock_level, category);
    let warning = check_and_log(&product);
    info!(product_id, name, "product created");
    inventory.products.push(product);

    Ok(CreatedProduct { product_id, warning })
}

//Update (admin only). Applies only the fields present in `changes` to the
//first product matching the id.
pub fn update_product(
    inventory: &mut Inventory,
    product_id: u32,
    changes: ProductUpdate,
) -> Result<Option<LowStockWarning>, InventoryError> {
    permissions::check_admin_privilege(inventory)?;

    let product = find_mut(inventory, product_id)?;
    if let Some(name) = changes.name {
        product.name = name;
    }
    if let Some(price) = changes.price {
        product.price = price;
    }
    if let Some(stock_level) = changes.stock {
        product.stock = stock_level;
    }

    let warning = check_and_log(product);
    info!(product_id, "product updated");
    Ok(warning)
}

//Case-insensitive substring search on the product name, in catalog order.
pub fn search_by_name<'a>(inventory: &'a Inventory, term: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    inventory
        .products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&term))
        .collect()
}

//Case-insensitive exact match on the category, in catalog order.
pub fn filter_by_category<'a>(inventory: &'a Inventory, category: &str) -> Vec<&'a Product> {
    inventory
        .products
        .iter()
        .filter(|product| product.category.eq_ignore_ascii_case(category))
        .collect()
}

//All products at or below the low-stock threshold, in catalog order.
pub fn low_stock_products(inventory: &Inventory) -> Vec<&Product> {
    inventory
        .products
        .iter()
        .filter(|product| product.stock <= stock::LOW_STOCK_THRESHOLD)
        .collect()
}

//Adjust stock by a signed amount, no floor at zero. Deliberately not
//admin-gated at this layer; the console decides who can reach it (see
//DESIGN.md).
pub fn adjust_stock(
    inventory: &mut Inventory,
    product_id: u32,
    amount: i64,
) -> Result<StockAdjustment, InventoryError> {
    let product = find_mut(inventory, product_id)?;
    product.stock += amount;
    let new_stock = product.stock;

    let warning = check_and_log(product);
    info!(product_id, amount, new_stock, "stock adjusted");
    Ok(StockAdjustment { new_stock, warning })
}

//Delete (admin only). Removes the first product matching the id.
pub fn delete_product(inventory: &mut Inventory, product_id: u32) -> Result<(), InventoryError> {
    permissions::check_admin_privilege(inventory)?;

    let position = inventory
        .products
        .iter()
        .position(|product| product.product_id == product_id)
        .ok_or(InventoryError::ProductNotFound(product_id))?;
    inventory.products.remove(position);
    info!(product_id, "product deleted");
    Ok(())
}

//Linear scan for the first product with the given id.
fn find_mut(inventory: &mut Inventory, product_id: u32) -> Result<&mut Product, InventoryError> {
    inventory
        .products
        .iter_mut()
        .find(|product| product.product_id == product_id)
        .ok_or(InventoryError::ProductNotFound(product_id))
}

fn check_and_log(product: &Product) -> Option<LowStockWarning> {
    let warning = stock::check_stock_level(product);
    if let Some(ref warning) = warning {
        warn!(
            product_id = warning.product_id,
            name = %warning.name,
            stock = warning.stock,
            "stock is low"
        );
    }
    warning
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::accounts;
    use rstest::{fixture, rstest};

    //Inventory with an admin logged in, ready for gated operations.
    #[fixture]
    fn admin_session() -> Inventory {
        let mut inventory = Inventory::new();
        accounts::register(&mut inventory, "root", "pw", "admin").unwrap();
        accounts::register(&mut inventory, "clerk", "pw", "employee").unwrap();
        accounts::login(&mut inventory, "root", "pw").unwrap();
        inventory
    }

    fn seed_catalog(inventory: &mut Inventory) {
        create_product(inventory, "Blue Shirt", 19.99, 12, "Apparel").unwrap();
        create_product(inventory, "Pants", 29.99, 8, "Apparel").unwrap();
        create_product(inventory, "Headphones", 59.99, 4, "electronics").unwrap();
    }

    #[rstest]
    fn create_requires_admin(mut admin_session: Inventory) {
        accounts::login(&mut admin_session, "clerk", "pw").unwrap();
        let result = create_product(&mut admin_session, "Widget", 1.0, 10, "Misc");
        assert_eq!(result, Err(InventoryError::AdminRequired));
        assert!(admin_session.products().is_empty());
    }

    #[rstest]
    fn create_assigns_sequential_ids(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let ids: Vec<u32> = admin_session
            .products()
            .iter()
            .map(|product| product.product_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn ids_are_not_reissued_after_delete(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        delete_product(&mut admin_session, 2).unwrap();

        let created = create_product(&mut admin_session, "Socks", 4.99, 30, "Apparel").unwrap();
        assert_eq!(created.product_id, 4);
    }

    #[rstest]
    fn create_warns_when_starting_low(mut admin_session: Inventory) {
        let created = create_product(&mut admin_session, "Widget", 9.99, 3, "Hardware").unwrap();
        let warning = created.warning.unwrap();
        assert_eq!(warning.product_id, 1);
        assert_eq!(warning.stock, 3);

        let created = create_product(&mut admin_session, "Crate", 5.0, 50, "Hardware").unwrap();
        assert!(created.warning.is_none());
    }

    #[rstest]
    fn update_applies_explicit_zero(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        update_product(
            &mut admin_session,
            1,
            ProductUpdate {
                price: Some(0.0),
                stock: Some(0),
                ..ProductUpdate::default()
            },
        )
        .unwrap();

        let product = &admin_session.products()[0];
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.name, "Blue Shirt");
    }

    #[rstest]
    fn update_skips_absent_fields(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        update_product(
            &mut admin_session,
            2,
            ProductUpdate {
                name: Some("Chinos".to_string()),
                ..ProductUpdate::default()
            },
        )
        .unwrap();

        let product = &admin_session.products()[1];
        assert_eq!(product.name, "Chinos");
        assert_eq!(product.price, 29.99);
        assert_eq!(product.stock, 8);
    }

    #[rstest]
    fn update_warns_when_stock_drops_low(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let warning = update_product(
            &mut admin_session,
            1,
            ProductUpdate {
                stock: Some(2),
                ..ProductUpdate::default()
            },
        )
        .unwrap();
        assert_eq!(warning.unwrap().stock, 2);
    }

    #[rstest]
    fn search_is_case_insensitive_substring(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let matches = search_by_name(&admin_session, "shirt");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Blue Shirt");

        assert!(search_by_name(&admin_session, "boots").is_empty());
    }

    #[rstest]
    fn category_filter_is_case_insensitive_exact(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let matches = filter_by_category(&admin_session, "Electronics");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Headphones");

        // Substrings do not match categories.
        assert!(filter_by_category(&admin_session, "Electro").is_empty());
    }

    #[rstest]
    fn low_stock_listing_preserves_order(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        adjust_stock(&mut admin_session, 1, -10).unwrap();

        let low: Vec<u32> = low_stock_products(&admin_session)
            .iter()
            .map(|product| product.product_id)
            .collect();
        assert_eq!(low, vec![1, 3]);
    }

    #[rstest]
    fn adjust_stock_has_no_floor(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let adjustment = adjust_stock(&mut admin_session, 2, -20).unwrap();
        assert_eq!(adjustment.new_stock, -12);
        assert!(adjustment.warning.is_some());
    }

    #[rstest]
    fn adjust_stock_is_open_to_employees(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        accounts::login(&mut admin_session, "clerk", "pw").unwrap();

        let adjustment = adjust_stock(&mut admin_session, 2, 5).unwrap();
        assert_eq!(adjustment.new_stock, 13);
        assert!(adjustment.warning.is_none());
    }

    #[rstest]
    fn unknown_ids_report_not_found(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        let before = admin_session.products().to_vec();

        assert_eq!(
            delete_product(&mut admin_session, 99),
            Err(InventoryError::ProductNotFound(99))
        );
        assert_eq!(
            update_product(&mut admin_session, 99, ProductUpdate::default()),
            Err(InventoryError::ProductNotFound(99))
        );
        assert_eq!(
            adjust_stock(&mut admin_session, 99, 1),
            Err(InventoryError::ProductNotFound(99))
        );
        assert_eq!(admin_session.products(), before.as_slice());
    }

    #[rstest]
    fn delete_requires_admin(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        accounts::login(&mut admin_session, "clerk", "pw").unwrap();

        assert_eq!(
            delete_product(&mut admin_session, 1),
            Err(InventoryError::AdminRequired)
        );
        assert_eq!(admin_session.products().len(), 3);
    }

    #[rstest]
    fn delete_removes_first_match(mut admin_session: Inventory) {
        seed_catalog(&mut admin_session);
        delete_product(&mut admin_session, 2).unwrap();

        let ids: Vec<u32> = admin_session
            .products()
            .iter()
            .map(|product| product.product_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
