//! Moves item lists between `Inventory` values and CSV files
use crate::inventory::Inventory;
use anyhow::{Context, Result};
use std::iter::repeat;
use std::path::Path;

/// Reads the comma-delimited file at `source` and merges its contents into
/// `inventory`. All fields of all records are flattened, in row-major order,
/// into one sequence of item names. A `source` of `None` means no import was
/// asked for, and the inventory is left untouched.
///
/// Fails if the file is missing, unreadable, or malformed; the error names
/// the offending path.
pub fn import_into(inventory: &mut Inventory, source: Option<&Path>) -> Result<()> {
    let Some(path) = source else { return Ok(()) };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Can't read file: {}", path.display()))?;

    let mut acquired = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Error reading file: {}", path.display()))?;
        acquired.extend(record.iter().map(str::to_owned));
    }
    log::info!("merging {} items imported from {}", acquired.len(), path.display());
    inventory.merge(&acquired);
    Ok(())
}

/// Writes `inventory` to the file at `destination` as a single
/// comma-delimited record holding, for each entry in iteration order, the
/// entry's name repeated count times. The destination is created if absent
/// and truncated if present.
pub fn export_to(inventory: &Inventory, destination: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(destination)
        .with_context(|| format!("Can't create file: {}", destination.display()))?;
    let occurrences =
        inventory.iter().flat_map(|(name, count)| repeat(name).take(count as usize));
    writer
        .write_record(occurrences)
        .with_context(|| format!("Error writing file: {}", destination.display()))?;
    writer.flush().with_context(|| format!("Error writing file: {}", destination.display()))?;
    log::info!("exported {} items to {}", inventory.total(), destination.display());
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    #[test]
    fn import_with_no_source_is_a_noop() {
        let mut inventory: Inventory = [("rope", 1)].into_iter().collect();
        import_into(&mut inventory, None).unwrap();
        assert_eq!(inventory.count("rope"), 1);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn import_fails_when_the_file_is_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.child("no_such.csv");
        let mut inventory = Inventory::new();
        let err = import_into(&mut inventory, Some(missing.path())).unwrap_err();
        assert!(err.to_string().contains("Can't read file"), "got: {err}");
    }

    #[test]
    fn import_flattens_all_rows_and_fields_before_merging() {
        let temp = TempDir::new().unwrap();
        let loot = temp.child("loot.csv");
        loot.write_str("rope,ruby,torch\nruby\nruby,torch\n").unwrap();

        let mut inventory = Inventory::new();
        import_into(&mut inventory, Some(loot.path())).unwrap();

        assert_eq!(inventory.count("rope"), 1);
        assert_eq!(inventory.count("ruby"), 3);
        assert_eq!(inventory.count("torch"), 2);
        assert_eq!(inventory.total(), 6);
    }

    #[test]
    fn export_repeats_each_name_count_times_in_one_record() {
        let temp = TempDir::new().unwrap();
        let out = temp.child("export.csv");
        let inventory: Inventory = [("arrow", 3), ("rope", 1)].into_iter().collect();

        export_to(&inventory, out.path()).unwrap();

        let written = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(written, "arrow,arrow,arrow,rope\n");
    }

    #[test]
    fn export_truncates_an_existing_destination() {
        let temp = TempDir::new().unwrap();
        let out = temp.child("export.csv");
        out.write_str("stale,contents,that,must,vanish\nand,a,second,row\n").unwrap();
        let inventory: Inventory = [("torch", 2)].into_iter().collect();

        export_to(&inventory, out.path()).unwrap();

        let written = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(written, "torch,torch\n");
    }

    #[test]
    fn exporting_then_importing_reproduces_the_counts() {
        let temp = TempDir::new().unwrap();
        let out = temp.child("roundtrip.csv");
        let original: Inventory =
            [("gold coin", 4), ("dagger", 2), ("ruby", 1)].into_iter().collect();

        export_to(&original, out.path()).unwrap();
        let mut reimported = Inventory::new();
        import_into(&mut reimported, Some(out.path())).unwrap();

        for (name, count) in original.iter() {
            assert_eq!(reimported.count(name), count, "for {name:?}");
        }
        assert_eq!(reimported.total(), original.total());
    }
}
