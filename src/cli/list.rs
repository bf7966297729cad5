use super::ui;
use crate::store::MemoryDataSource;
use anyhow::Result;
use comfy_table::Cell;

/// Renders every record of the dataset as one table.
pub fn display_dataset(source: &MemoryDataSource) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Alpha-2"),
        ui::header_cell("Alpha-3"),
        ui::header_cell("Numeric"),
        ui::header_cell("Name"),
        ui::header_cell("Currencies"),
    ]);

    for record in source.records() {
        table.add_row(vec![
            Cell::new(&record.alpha2),
            Cell::new(&record.alpha3),
            Cell::new(&record.numeric),
            Cell::new(&record.name),
            ui::currencies_cell(&record.currency),
        ]);
    }

    format!("{table}\n\n{} countries", source.len())
}

pub fn run(source: &MemoryDataSource) -> Result<()> {
    println!("{}", display_dataset(source));
    Ok(())
}
