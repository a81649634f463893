use std::env;
use std::path::PathBuf;

use folio::boot;
use folio::catalog::Catalog;
use folio::models::category::Category;

/// Preview tool: loads the catalog and prints the display selection for a
/// filter (first argument, default `all`) as JSON — a stand-in for the
/// rendering layer.
#[tokio::main]
async fn main() {
    env_logger::init();

    let data_dir = env::var("FOLIO_DATA_DIR").unwrap_or_else(|_| "portfolio-data".to_string());
    let data_dir = PathBuf::from(data_dir);

    // Boot check — surface missing category directories/files up front
    boot::run(&data_dir);

    let catalog = Catalog::load(&data_dir).await;
    log::info!("Loaded {} projects", catalog.len());
    for cat in Category::ALL {
        let count = catalog
            .projects()
            .iter()
            .filter(|p| p.category == cat.id())
            .count();
        log::info!("  {:<17} {}", cat.label(), count);
    }

    let filter = env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let selection = catalog.select_for_display(&filter);
    match serde_json::to_string_pretty(&selection) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize selection: {}", e),
    }
}
