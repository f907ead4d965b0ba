use crate::error::InventoryError;
use crate::inventory::{Inventory, accounts};

//Checks that the logged-in user has admin privileges (done before execution
//of every gated catalog operation). Nobody logged in counts as denied.
pub fn check_admin_privilege(inventory: &Inventory) -> Result<(), InventoryError> {
    match accounts::current_user(inventory) {
        Some(user) if user.is_admin() => Ok(()),
        _ => Err(InventoryError::AdminRequired),
    }
}
