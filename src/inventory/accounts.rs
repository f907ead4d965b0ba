use tracing::info;

use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::user::{Role, User};

//Registers a new user. The role string must parse; anything else leaves the
//registry untouched. There is no duplicate-username check: registering the
//same name twice is allowed and login will match the first occurrence.
pub fn register(
    inventory: &mut Inventory,
    username: &str,
    password: &str,
    role: &str,
) -> Result<Role, InventoryError> {
    let role: Role = role.parse()?;
    inventory.users.push(User::new(username, password, role));
    info!(username, %role, "user registered");
    Ok(role)
}

//Logs in with a linear scan for the first exact match on both fields.
//Case-sensitive. On failure the current session, if any, is left untouched.
pub fn login<'a>(
    inventory: &'a mut Inventory,
    username: &str,
    password: &str,
) -> Result<&'a User, InventoryError> {
    let found = inventory
        .users
        .iter()
        .position(|user| user.username == username && user.password == password);

    match found {
        Some(index) => {
            inventory.session = Some(index);
            let user = &inventory.users[index];
            info!(username, role = %user.role, "login succeeded");
            Ok(user)
        }
        None => {
            info!(username, "login failed");
            Err(InventoryError::InvalidCredentials)
        }
    }
}

//Clears the session. Returns the user that was logged out so the caller can
//name them in the goodbye line.
pub fn logout(inventory: &mut Inventory) -> Result<User, InventoryError> {
    let index = inventory.session.take().ok_or(InventoryError::NotLoggedIn)?;
    let user = inventory.users[index].clone();
    info!(username = %user.username, "logged out");
    Ok(user)
}

//Session getter.
pub fn current_user(inventory: &Inventory) -> Option<&User> {
    inventory.session.and_then(|index| inventory.users.get(index))
}
