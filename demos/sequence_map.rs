//! A small demonstration client: parse "ani" as three literals, then
//! decorate each collected result. Run with:
//!
//! ```sh
//! cargo run --example sequence_map
//! ```

use parsnip::prelude::*;

fn main() {
    let parser = sequence([literal("a"), literal("n"), literal("i")]).map(|value| {
        match value {
            Value::Seq(items) => Value::Seq(
                items
                    .into_iter()
                    .map(|item| Value::Str(format!("* - {}", item)))
                    .collect(),
            ),
            other => other,
        }
    });

    match parser.run("ani").into_result() {
        Ok(value) => println!("{}", value),
        Err(err) => println!("parse failed: {}", err),
    }
}
