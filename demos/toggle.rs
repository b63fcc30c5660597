/// `UrlManager` usage example
use parq::{UrlManager, UrlParam};

fn main() -> Result<(), parq::ManagerError> {
    // Parse a URL into a base path and toggleable parameters
    let mut manager = UrlManager::parse("http://example.com/search?q=rust&page=2&debug=1")?;

    println!("base: {}", manager.base()); // http://example.com/search
    println!("parsed: {manager}");
    println!();

    // Disable a parameter without removing it
    if let Some(debug) = manager.get_param_mut("debug", 1)? {
        debug.disable();
    }
    println!("debug off: {manager}"); // http://example.com/search?q=rust&page=2
    println!();

    // Update an existing value in place
    manager.update_param("page", "3");
    println!("next page: {manager}");
    println!();

    // Upsert: update if present, append otherwise
    manager.upsert_param("lang", "en")?;
    manager.upsert_param("lang", "de")?;
    println!("with lang: {manager}"); // ...&lang=de (no duplicate)
    println!();

    // Append a staged parameter and toggle it back on later
    manager.add_param(UrlParam::new("verbose", "true")?);
    if let Some(debug) = manager.get_param_mut("debug", 1)? {
        debug.toggle();
    }
    println!("final: {manager}");

    // Walk all parameters, including disabled ones
    for param in manager.iter() {
        println!("  {} = {} (enabled: {})", param.key(), param.value(), param.status());
    }
    Ok(())
}
