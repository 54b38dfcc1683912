//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use clap::Parser;
use std::path::PathBuf;

/// Where the exported inventory goes when the command line doesn't say.
pub const DEFAULT_EXPORT: &str = "export_inventory.csv";

/// Returns the parsed command line: the `Args` return value's `import` field
/// is the file of acquired items to merge (if any), `export` is the file the
/// inventory is written to, and `sort` is the requested row order, passed
/// through to the renderer uninterpreted.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    let export = parsed.export.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT));
    Args { import: parsed.import, export, sort: parsed.sort }
}

/// The parsed command line.
pub struct Args {
    /// `import` is the CSV file of acquired items, merged into the inventory
    /// before export and display. `None` means nothing to import.
    pub import: Option<PathBuf>,
    /// `export` is the CSV file the inventory is written to. Defaults to
    /// [`DEFAULT_EXPORT`], and is always written.
    pub export: PathBuf,
    /// `sort` is the requested row order (`count,asc` or `count,desc`).
    /// Unrecognized values are the renderer's problem, not an argument error.
    pub sort: Option<String>,
}

#[derive(Debug, Parser)]
#[command(name = "hoard", version)]
/// Tally inventory items, merge acquired loot, and import/export CSV item lists
struct CliArgs {
    /// CSV file of acquired items to merge into the inventory
    import: Option<PathBuf>,
    /// Destination CSV file for the exported inventory
    export: Option<PathBuf>,
    /// Sort table rows by count: "count,asc" or "count,desc"
    #[arg(long)]
    sort: Option<String>,
}
