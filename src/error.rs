use thiserror::Error;

// Every failure the library can produce. The console layer renders these via
// Display and returns to the menu; nothing propagates past the loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Invalid role '{0}'. Must be 'admin' or 'employee'.")]
    InvalidRole(String),

    #[error("Login failed. Incorrect username or password.")]
    InvalidCredentials,

    #[error("No user is currently logged in.")]
    NotLoggedIn,

    #[error("Permission denied: admin privileges required to perform this action.")]
    AdminRequired,

    #[error("Product with ID {0} not found.")]
    ProductNotFound(u32),
}
