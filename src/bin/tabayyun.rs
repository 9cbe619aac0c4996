// ─────────────────────────────────────────────────────────────────────────────
//  Tabayyun — Recipient Risk Check
//  Part of the Al-Hafiz Project, the Guardian Layer of BismillahDAO.
//
//  Tabayyun (تبيّن): "Verify first" — looks at a recipient's on-chain history
//  before value is sent, so a sender can see what they are sending into.
//
//  Designed to preserve trust, empower security, and uphold responsibility in Web3.
//
//  In the name of Allah, the Most Gracious, the Most Merciful.
// ─────────────────────────────────────────────────────────────────────────────

use std::path::PathBuf;

use clap::Parser;
use tabayyun::engine::RunOptions;
use tabayyun::engine::Tabayyun;
use tabayyun::error::Result;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "tabayyun", version, about = "Assess the risk of sending to a Stacks address")]
struct Cli {
    /// TOML config; defaults apply when the file is missing
    #[arg(short, long, default_value = "Config.toml")]
    config: PathBuf,

    /// Override the indexer base URL
    #[arg(long)]
    indexer_url: Option<Url>,

    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Read addresses from stdin, one per line, as a recipient field being edited
    #[arg(short, long, conflicts_with = "addresses")]
    watch: bool,

    /// Addresses to assess
    #[arg(required_unless_present = "watch")]
    addresses: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Tabayyun::run(RunOptions {
        config_path: cli.config,
        indexer_url: cli.indexer_url,
        json:        cli.json,
        watch:       cli.watch,
        addresses:   cli.addresses,
    })
    .await?;
    Ok(())
}
