use anyhow::Result;
use hoard::inventory::Inventory;
use hoard::io::{export_to, import_into};
use hoard::table::render;
use is_terminal::IsTerminal;
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = hoard::args::parsed();

    let mut inventory: Inventory =
        [("rope", 1), ("torch", 6), ("gold coin", 42), ("dagger", 1), ("arrow", 12)]
            .into_iter()
            .collect();
    inventory.merge(["gold coin", "dagger", "gold coin", "gold coin", "ruby"]);

    import_into(&mut inventory, args.import.as_deref())?;
    export_to(&inventory, &args.export)?;

    let sort = args.sort.as_deref();
    if io::stdout().is_terminal() {
        render(&inventory, sort, io::stdout().lock())?;
    } else {
        render(&inventory, sort, io::BufWriter::new(io::stdout().lock()))?;
    };
    Ok(())
}
