//! JSON and CSV exchange of product lists.

use std::io::{Read, Write};

use tracing::debug;

use crate::error::Result;
use crate::product::Product;
use crate::render::render_fields;

/// CSV columns and the record fields each one renders.
const CSV_COLUMNS: [(&str, &[&str]); 10] = [
    ("type", &["type"]),
    ("id", &["id"]),
    ("name", &["name"]),
    ("brand", &["brand"]),
    ("thc", &["thc"]),
    ("cbd", &["cbd"]),
    ("price", &["price"]),
    ("rating", &["rating"]),
    ("effects", &["effects"]),
    ("flavors", &["flavorProfile", "flavors"]),
];

/// Writes products as a pretty-printed JSON array of `type`-tagged objects.
pub fn write_json<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    serde_json::to_writer_pretty(writer, products)?;
    debug!(count = products.len(), "exported json");
    Ok(())
}

/// Reads a JSON array written by [`write_json`].
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_reader(reader)?;
    debug!(count = products.len(), "imported json");
    Ok(products)
}

/// Writes products as CSV with a fixed header row.
///
/// Fields a category lacks are left empty. Tag lists are joined with `", "`.
pub fn write_csv<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_COLUMNS.iter().map(|(header, _)| *header))?;

    for product in products {
        let row: Vec<String> = CSV_COLUMNS
            .iter()
            .map(|&(_, fields)| render_fields(product, fields).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    debug!(count = products.len(), "exported csv");
    Ok(())
}
