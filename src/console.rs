use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::inventory::catalog::ProductUpdate;
use crate::inventory::{Inventory, accounts, catalog};

//The interactive menu loop. Generic over its reader and writer so tests can
//script a whole session; main wires it to stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn run(mut self, inventory: &mut Inventory) -> io::Result<()> {
        loop {
            self.print_menu(inventory)?;

            let Some(choice) = self.read_line("Enter your choice: ")? else {
                // EOF behaves like choice 12.
                writeln!(self.output, "Exiting system. Goodbye!")?;
                return Ok(());
            };

            let logged_in = accounts::current_user(inventory).is_some();
            let admin = accounts::current_user(inventory).is_some_and(|user| user.is_admin());

            match choice.as_str() {
                "1" => self.register(inventory)?,
                "2" => self.login(inventory)?,
                "3" => self.view(inventory)?,
                "4" => self.search(inventory)?,
                "5" => self.filter_category(inventory)?,
                "6" => self.filter_low_stock(inventory)?,
                "7" if admin => self.create(inventory)?,
                "8" if admin => self.update(inventory)?,
                "9" if admin => self.adjust(inventory)?,
                "10" if admin => self.delete(inventory)?,
                "11" if logged_in => self.logout(inventory)?,
                "12" => {
                    writeln!(self.output, "Exiting system. Goodbye!")?;
                    return Ok(());
                }
                // Unknown commands and privilege misses share this line on
                // purpose.
                _ => writeln!(self.output, "Invalid choice or insufficient permissions.")?,
            }
        }
    }

    fn print_menu(&mut self, inventory: &Inventory) -> io::Result<()> {
        let admin = accounts::current_user(inventory).is_some_and(|user| user.is_admin());

        writeln!(self.output)?;
        writeln!(self.output, "Inventory Management System")?;
        writeln!(self.output, "1. Register")?;
        writeln!(self.output, "2. Login")?;
        writeln!(self.output, "3. View Products")?;
        writeln!(self.output, "4. Search Product by Name")?;
        writeln!(self.output, "5. Filter Products by Category")?;
        writeln!(self.output, "6. Filter Low Stock Products")?;
        if admin {
            writeln!(self.output, "7. Create Product")?;
            writeln!(self.output, "8. Update Product")?;
            writeln!(self.output, "9. Adjust Stock")?;
            writeln!(self.output, "10. Delete Product")?;
        }
        writeln!(self.output, "11. Logout")?;
        writeln!(self.output, "12. Exit")?;
        Ok(())
    }

    fn register(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(username) = self.read_line("Username: ")? else {
            return Ok(());
        };
        let Some(password) = self.read_line("Password: ")? else {
            return Ok(());
        };
        let Some(role) = self.read_line("Role (admin/employee): ")? else {
            return Ok(());
        };

        match accounts::register(inventory, &username, &password, &role) {
            Ok(role) => writeln!(
                self.output,
                "User {username} registered successfully as {role}."
            )?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn login(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(username) = self.read_line("Username: ")? else {
            return Ok(());
        };
        let Some(password) = self.read_line("Password: ")? else {
            return Ok(());
        };

        match accounts::login(inventory, &username, &password) {
            Ok(user) => {
                let line = format!("Logged in as {} ({}).", user.username, user.role);
                writeln!(self.output, "{line}")?;
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn view(&mut self, inventory: &Inventory) -> io::Result<()> {
        if inventory.products().is_empty() {
            writeln!(self.output, "No products available.")?;
            return Ok(());
        }
        for product in inventory.products() {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    fn search(&mut self, inventory: &Inventory) -> io::Result<()> {
        let Some(term) = self.read_line("Enter product name to search: ")? else {
            return Ok(());
        };

        let found = catalog::search_by_name(inventory, &term);
        if found.is_empty() {
            writeln!(self.output, "No products found matching that search term.")?;
        } else {
            for product in found {
                writeln!(self.output, "{product}")?;
            }
        }
        Ok(())
    }

    fn filter_category(&mut self, inventory: &Inventory) -> io::Result<()> {
        let Some(category) = self.read_line("Enter category to filter: ")? else {
            return Ok(());
        };

        let found = catalog::filter_by_category(inventory, &category);
        if found.is_empty() {
            writeln!(self.output, "No products found in category '{category}'.")?;
        } else {
            for product in found {
                writeln!(self.output, "{product}")?;
            }
        }
        Ok(())
    }

    fn filter_low_stock(&mut self, inventory: &Inventory) -> io::Result<()> {
        let low = catalog::low_stock_products(inventory);
        if low.is_empty() {
            writeln!(self.output, "No products with low stock.")?;
            return Ok(());
        }
        writeln!(self.output, "Products with low stock:")?;
        for product in low {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    fn create(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(name) = self.read_line("Product Name: ")? else {
            return Ok(());
        };
        let Some(price) = self.read_number::<f64>("Product Price: ")? else {
            return Ok(());
        };
        let Some(stock_level) = self.read_number::<i64>("Product Stock: ")? else {
            return Ok(());
        };
        let Some(category) = self.read_line("Product Category: ")? else {
            return Ok(());
        };

        match catalog::create_product(inventory, &name, price, stock_level, &category) {
            Ok(created) => {
                writeln!(
                    self.output,
                    "Product '{name}' created successfully with ID {}.",
                    created.product_id
                )?;
                if let Some(warning) = created.warning {
                    writeln!(self.output, "{warning}")?;
                }
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn update(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(product_id) = self.read_number::<u32>("Product ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.read_line("New Name (press Enter to skip): ")? else {
            return Ok(());
        };
        let Some(price) = self.read_optional_number::<f64>("New Price (press Enter to skip): ")?
        else {
            return Ok(());
        };
        let Some(stock_level) =
            self.read_optional_number::<i64>("New Stock (press Enter to skip): ")?
        else {
            return Ok(());
        };

        let changes = ProductUpdate {
            name: (!name.is_empty()).then_some(name),
            price,
            stock: stock_level,
        };

        match catalog::update_product(inventory, product_id, changes) {
            Ok(warning) => {
                writeln!(self.output, "Product {product_id} updated successfully.")?;
                if let Some(warning) = warning {
                    writeln!(self.output, "{warning}")?;
                }
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn adjust(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(product_id) = self.read_number::<u32>("Product ID to adjust stock: ")? else {
            return Ok(());
        };
        let prompt = "Enter stock adjustment (positive for restocking, negative for sales): ";
        let Some(amount) = self.read_number::<i64>(prompt)? else {
            return Ok(());
        };

        match catalog::adjust_stock(inventory, product_id, amount) {
            Ok(adjustment) => {
                writeln!(
                    self.output,
                    "Stock adjusted for product {product_id}. New stock level: {}.",
                    adjustment.new_stock
                )?;
                if let Some(warning) = adjustment.warning {
                    writeln!(self.output, "{warning}")?;
                }
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn delete(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        let Some(product_id) = self.read_number::<u32>("Product ID to delete: ")? else {
            return Ok(());
        };

        match catalog::delete_product(inventory, product_id) {
            Ok(()) => writeln!(self.output, "Product {product_id} deleted successfully.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn logout(&mut self, inventory: &mut Inventory) -> io::Result<()> {
        match accounts::logout(inventory) {
            Ok(user) => writeln!(self.output, "User {} logged out.", user.username)?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    //Prompts and reads one line. None on EOF; the trailing newline is
    //stripped, nothing else.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    //Reads a required numeric field. A malformed number prints a message and
    //aborts back to the menu instead of ending the process.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        let Some(raw) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid number '{raw}'. Returning to menu.")?;
                Ok(None)
            }
        }
    }

    //Reads an optional numeric field for update prompts: empty input means
    //"skip this field" (inner None), a malformed number aborts to the menu
    //(outer None).
    fn read_optional_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<Option<T>>> {
        let Some(raw) = self.read_line(prompt)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(None));
        }
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(Some(value))),
            Err(_) => {
                writeln!(self.output, "Invalid number '{raw}'. Returning to menu.")?;
                Ok(None)
            }
        }
    }
}
