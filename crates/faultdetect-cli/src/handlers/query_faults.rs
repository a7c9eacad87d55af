//! Query-faults command handler.
//!
//! Maintenance tool: dumps every fault record in the store to stdout.
//! Reads through the concrete repository's dump helper rather than the
//! service layer, which intentionally exposes no listing.

use anyhow::Result;

use crate::config::Config;
use faultdetect_db::{SqliteFaultRepository, setup_database};

/// Execute the query-faults command.
pub async fn execute(config: Config) -> Result<()> {
    let pool = setup_database(&config.database_path).await?;
    let repo = SqliteFaultRepository::new(pool.clone());

    let faults = repo.dump_all().await?;

    if faults.is_empty() {
        println!("No faults found in the store");
    } else {
        println!("Found {} fault(s):", faults.len());
        for fault in faults {
            let image_url = fault.image_url.as_deref().unwrap_or("-");
            println!(
                "{}  product={}  type={}  confidence={}  detected_at={}  image_url={}",
                fault.id,
                fault.product_id,
                fault.fault_type,
                fault.confidence,
                fault.detected_at.to_rfc3339(),
                image_url
            );
        }
    }

    pool.close().await;
    Ok(())
}
