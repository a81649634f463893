use log::{error, info, warn};
use std::path::Path;

use crate::catalog::DATA_FILE;
use crate::models::category::Category;

/// Run the data-layout check. Call this before the first catalog load.
///
/// Nothing here is fatal — a missing directory or file just means that
/// category loads as empty — but surfacing the gaps at startup beats
/// discovering them as a silently thin catalog.
pub fn run(data_dir: &Path) {
    info!("Folio boot check starting...");

    if !data_dir.exists() {
        error!(
            "  MISSING data directory: {} (catalog will be empty)",
            data_dir.display()
        );
        return;
    }

    let mut present = 0u32;
    let mut warnings = 0u32;

    for cat in Category::ALL {
        let dir = data_dir.join(cat.id());
        if !dir.is_dir() {
            warn!("  Missing category directory: {}", dir.display());
            warnings += 1;
            continue;
        }
        let file = dir.join(DATA_FILE);
        if !file.is_file() {
            warn!("  Missing data file: {}", file.display());
            warnings += 1;
            continue;
        }
        present += 1;
    }

    if warnings == 0 {
        info!("Boot check passed — all {} category files present", present);
    } else {
        info!(
            "Boot check finished — {} category files present, {} warnings",
            present, warnings
        );
    }
}
