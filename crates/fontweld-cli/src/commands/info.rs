//! Info command implementation
//!
//! Reports the compiler capability the way the session startup check
//! would, without starting a session.

use fontweld_core::error::Result;
use fontweld_forge::{find_compiler, COMPILER_ENV};

pub fn run() -> Result<()> {
    println!("Fontweld v{}", env!("CARGO_PKG_VERSION"));
    println!();

    match find_compiler() {
        Some(path) => println!("FontForge: {}", path.display()),
        None => {
            println!("FontForge: not found (font generation disabled)");
            println!("  Install FontForge or set {COMPILER_ENV} to its binary.");
        }
    }

    Ok(())
}
