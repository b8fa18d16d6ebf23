use crate::config::MarkerConfig;
use std::path::Path;

/// Validate a marker config and print the resolved table. Configuration
/// problems (empty list, duplicate tokens, unknown roles) surface here
/// as errors instead of at parse time.
pub fn execute(markers: Option<&Path>) -> anyhow::Result<()> {
    let config = MarkerConfig::resolve(markers)?;
    let table = config.table()?;

    match markers {
        Some(path) => println!("Marker config {} is valid.", path.display()),
        None => println!("Built-in marker config is valid."),
    }
    for (token, role) in table.entries() {
        println!("  {token} -> {role}");
    }
    println!("Banners: {:?} .. {:?}", config.banners.begin, config.banners.end);
    Ok(())
}
