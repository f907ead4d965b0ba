use crate::product::Product;
use crate::user::{Role, User};

pub mod accounts;
pub mod catalog;
pub mod permissions;
pub mod stock;

//Inventory struct declaration: the whole system state lives here, owned by
//whoever runs the console loop. There is no process-wide singleton.
#[derive(Debug)]
pub struct Inventory {
    pub(crate) users: Vec<User>,
    pub(crate) products: Vec<Product>,
    // Index into `users` for the logged-in user, if any. At most one session
    // exists for the whole process.
    pub(crate) session: Option<usize>,
    // Monotonic id counter. Deliberately independent of `products.len()` so
    // ids are never reissued after a delete.
    pub(crate) next_product_id: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            users: Vec::new(),
            products: Vec::new(),
            session: None,
            next_product_id: 1,
        }
    }

    //Constructor used by main: starts with the fixed default admin already
    //registered so the menu is usable immediately.
    pub fn with_default_admin() -> Self {
        let mut inventory = Inventory::new();
        inventory.users.push(User::new("admin", "password", Role::Admin));
        inventory
    }

    //Catalog getter, insertion order preserved.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
