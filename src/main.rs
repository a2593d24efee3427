use std::{env, fs};
use ticklib::math::table_gen::{self, TableParams};

/// Prints the tick multiplier table for `math/constants.rs`.
///
/// Takes an optional path to a JSON file with `TableParams`; the checked-in
/// parameters are used otherwise.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let params = match env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "Loading table parameters");
            serde_json::from_str::<TableParams>(&fs::read_to_string(&path)?)?
        }
        None => TableParams::canonical(),
    };

    let table = table_gen::generate(&params)?;
    if params != TableParams::canonical() {
        tracing::warn!("Parameters differ from the checked-in table; the tick math tests will need new vectors");
    }

    print!("{}", table_gen::render_table(&params, &table));
    Ok(())
}
