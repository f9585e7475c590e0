//! Convert one ingredient quantity to spoons from the command line
//! Usage: cargo run --bin convert_ingredient -- <name> [quantity] [unit] [--locale fr|en]

use spoonconv::config::Config;
use spoonconv::{Ingredient, Locale, Quantity};

const USAGE: &str = "usage: convert_ingredient <name> [quantity] [unit] [--locale fr|en]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut locale: Option<Locale> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--locale" {
            let value = args.next().ok_or(USAGE)?;
            locale = Some(value.parse()?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next().ok_or(USAGE)?;
    let quantity = positional.next().map(Quantity::from);
    let unit = positional.next();

    let locale = match locale {
        Some(l) => l,
        None => Config::from_env()?.locale,
    };

    let ingredient = Ingredient {
        name,
        quantity,
        unit,
    };
    let result = ingredient.convert(locale);

    println!("{}", result);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
