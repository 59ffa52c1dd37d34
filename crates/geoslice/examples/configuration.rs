//! Configuring searches and loading your own hierarchy
//!
//! Set `GEOSLICE_HIERARCHY` to a JSON hierarchy file to search it instead of the demo data.

use geoslice::{
    HierarchySpec, LocateConfigBuilder, Locator,
    data_processing::{EntrySpec, NodeSpec},
    error::GeosliceError,
};
use tracing::Level;

fn main() -> Result<(), GeosliceError> {
    geoslice::init_logging(Level::INFO)?;

    // 1. Whatever the environment selects, the embedded demo by default
    let locator = Locator::from_env()?;
    println!("Loaded hierarchy: {:?}", locator.stats());

    let config = LocateConfigBuilder::trace().max_rank(50).limit(10).build();
    println!("Using {config:?}");
    for result in locator.locate_str("Time Square, New York", &config)? {
        println!("  {result}");
    }

    // 2. A hierarchy built in code
    let spec = HierarchySpec::new(NodeSpec::partition(
        "",
        vec![NodeSpec::partition(
            "FRANCE",
            vec![
                NodeSpec::pool(
                    "PARIS",
                    vec![
                        EntrySpec::new("RUE DE RIVOLI"),
                        EntrySpec::with_address("1", ["RUE DE RIVOLI"]),
                    ],
                ),
                NodeSpec::pool("LYON", vec![EntrySpec::new("RUE DE LA REPUBLIQUE")]),
            ],
        )],
    ));
    println!("\nHierarchy as JSON:\n{}", spec.to_json_string()?);

    let custom = Locator::from_spec(spec)?;
    let strict = LocateConfigBuilder::strict().build();
    for text in ["1, Rue de Rivoli, Paris", "Rue de la Republique", "Avenue Foch, Paris"] {
        let results = custom.locate_str(text, &strict)?;
        println!("{text:?} -> {} result(s)", results.len());
        for result in &results {
            println!("  {result}");
        }
    }

    // 3. Several queries at once
    let queries = vec![vec!["FRANCE", "PARIS"], vec!["RUE DE RIVOLI"], vec![]];
    let batches = custom.locate_bulk(&queries, &LocateConfigBuilder::new().build())?;
    for (query, batch) in queries.iter().zip(&batches) {
        println!("{query:?}: {} result(s)", batch.len());
    }

    Ok(())
}
