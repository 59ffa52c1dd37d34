//! Basic location resolution
//!
//! This example walks the bundled demo hierarchy with the queries it was designed around:
//! - Exact and partial paths
//! - Ambiguous names found under several parents
//! - Placeholders, ranking and limits

use geoslice::{LocateConfig, LocateConfigBuilder, Locator, MatchResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let locator = Locator::new_embedded()?;
    let default = LocateConfig::default();

    for text in [
        "New York, USA",
        "New York",
        "Pearl Street, New York, USA",
        "Pearl Street, USA",
        "Pearl Street",
    ] {
        run(&locator, text, &default)?;
    }

    println!("With return_empty=true");
    run(&locator, "103 Alkazam, New York, USA", &LocateConfigBuilder::trace().build())?;
    println!("With return_empty=false");
    run(&locator, "103 Alkazam, New York, USA", &default)?;

    println!("With no max_rank");
    run(&locator, "101 C, Alley A, Pearl Street, New York", &default)?;
    println!("With max_rank=70");
    let strict = LocateConfigBuilder::new().max_rank(70).build();
    run(&locator, "101 C, Alley A, Pearl Street, New York", &strict)?;

    for text in [
        "101 C, Alley A, Pearl Street, New York, USA",
        "101 C, Alley A, Pearl Street, ",
        "101 C, New York ",
        "101 C, Alley A, New York ",
    ] {
        run(&locator, text, &default)?;
    }

    println!("With no limit");
    run(&locator, "101 C", &default)?;
    println!("With limit=2");
    run(&locator, "101 C", &LocateConfigBuilder::new().limit(2).build())?;

    Ok(())
}

fn run(locator: &Locator, text: &str, config: &LocateConfig) -> geoslice::error::Result<()> {
    println!("Query is: {text:?}");
    let results = locator.locate_str(text, config)?;
    print_results(&results);
    println!();
    Ok(())
}

fn print_results(results: &[MatchResult<'_>]) {
    if results.is_empty() {
        println!("  (no results)");
    }
    for (i, result) in results.iter().enumerate() {
        println!("  {}. {result}", i + 1);
    }
}
