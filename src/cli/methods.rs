//! Methods command handler
//!
//! Lists the available generation methods.

use crate::error::Result;
use crate::generator::describe_methods;

/// Run the methods command
pub fn run() -> Result<()> {
    println!("Available generation methods:");
    for info in describe_methods() {
        println!(
            "  {:<9} - {} (parameters: {})",
            info.key,
            info.description,
            info.parameters.join(", ")
        );
    }
    Ok(())
}
