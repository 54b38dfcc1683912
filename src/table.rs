//! Renders an `Inventory` as a right-justified, column-aligned text table,
//! optionally sorted by count
use crate::inventory::Inventory;
use anyhow::Result;
use std::cmp::Reverse;
use std::io;

const RULE_GLYPH: &str = "⯎";
const ERROR_ROW: &str = "error ☹";

/// The orders `render` knows how to produce. An order specification the
/// parser doesn't recognize has no `SortOrder`, and renders as an inline
/// error row instead of entries.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum SortOrder {
    Unsorted,
    CountAscending,
    CountDescending,
}

fn sort_order(spec: Option<&str>) -> Option<SortOrder> {
    match spec {
        None => Some(SortOrder::Unsorted),
        Some("count,asc") => Some(SortOrder::CountAscending),
        Some("count,desc") => Some(SortOrder::CountDescending),
        Some(_) => None,
    }
}

/// Column widths for a single rendering, computed from the inventory being
/// rendered and passed along explicitly.
struct ColWidths {
    count: usize,
    item: usize,
}

impl ColWidths {
    /// Each column is 3 wider than its widest value: the longest count as
    /// printed, and the longest item name.
    fn of(inventory: &Inventory) -> ColWidths {
        let count =
            inventory.iter().map(|(_, count)| count.to_string().len()).max().unwrap_or(0);
        let item = inventory.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
        ColWidths { count: count + 3, item: item + 3 }
    }
}

/// Prints `inventory` to `out` as a two-column table: an `Inventory:`
/// heading, a right-justified header row, a rule, one row per entry (count
/// then name), another rule, and a total line summing every count.
///
/// `order` is the requested row order: `None` keeps insertion order,
/// `"count,asc"` and `"count,desc"` sort by count with ties left in
/// insertion order. Any other value prints a centered error row in place of
/// the entries; heading, header, rules, and total still print.
pub fn render(inventory: &Inventory, order: Option<&str>, mut out: impl io::Write) -> Result<()> {
    let widths = ColWidths::of(inventory);
    writeln!(out, "Inventory:")?;
    writeln!(out, "{:>cw$} {:>iw$}", "count", "item name", cw = widths.count, iw = widths.item)?;
    rule(&mut out, &widths)?;
    match sort_order(order) {
        Some(order) => {
            for (name, count) in rows(inventory, order) {
                writeln!(out, "{count:>cw$} {name:>iw$}", cw = widths.count, iw = widths.item)?;
            }
        }
        None => writeln!(out, "{ERROR_ROW:^width$}", width = widths.count + widths.item)?,
    }
    rule(&mut out, &widths)?;
    writeln!(out, "Total number of items: {}", inventory.total())?;
    out.flush()?;
    Ok(())
}

/// A rule spans both columns plus the single space between them.
fn rule(out: &mut impl io::Write, widths: &ColWidths) -> Result<()> {
    writeln!(out, "{}", RULE_GLYPH.repeat(widths.count + widths.item + 1))?;
    Ok(())
}

/// The inventory's entries in the requested order. `sort_by_key` is stable,
/// so entries with equal counts keep their insertion order.
fn rows(inventory: &Inventory, order: SortOrder) -> Vec<(&str, u32)> {
    let mut rows: Vec<(&str, u32)> = inventory.iter().collect();
    match order {
        SortOrder::Unsorted => {}
        SortOrder::CountAscending => rows.sort_by_key(|&(_, count)| count),
        SortOrder::CountDescending => rows.sort_by_key(|&(_, count)| Reverse(count)),
    }
    rows
}
