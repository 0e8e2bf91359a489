use anyhow::Result;
use mymove::domain::orders::Affiliation;
use mymove::features::orders::ports::RankOptionsService;
use mymove::features::orders::ranks::StaticRankCatalog;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::warn;

/// Prints the rank options of `affiliation` as a JSON array. Unknown branches print `[]`.
pub async fn print_ranks(affiliation: &str) -> Result<()> {
    let options = match Affiliation::from_str(affiliation) {
        Ok(affiliation) => StaticRankCatalog.list(affiliation).await?,
        Err(_) => {
            warn!(affiliation, "Unknown affiliation");
            Vec::new()
        },
    };

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &options)?;
    writeln!(out)?;
    Ok(())
}
