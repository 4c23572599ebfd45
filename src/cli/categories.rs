use comfy_table::{Cell, Table};

use crate::catalog::CATALOG;
use crate::error::Result;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Color"]);
    for c in CATALOG {
        table.add_row(vec![Cell::new(c.key), Cell::new(c.name), Cell::new(c.color)]);
    }
    println!("Categories\n{table}");
    Ok(())
}
