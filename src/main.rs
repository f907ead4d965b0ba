mod console;
mod error;
mod inventory;
mod product;
mod user;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::inventory::Inventory;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr (RUST_LOG to enable) so they never interleave
    // with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    //Default admin is registered before the menu loop begins.
    let mut inventory = Inventory::with_default_admin();
    println!("User admin registered successfully as admin.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run(&mut inventory)
}
