//! Tags command implementation
//!
//! Lists the tag vocabulary of a document, one name per line or as a
//! JSON array. This is the selection list the apply command consumes.

use std::fs;

use fontweld_core::error::{FontweldError, MarkupError, Result};
use fontweld_core::report::Event;
use fontweld_markup::extract_tags;

use crate::cli::TagsArgs;

pub fn run(args: &TagsArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file).map_err(|source| MarkupError::Read {
        path: args.file.display().to_string(),
        source,
    })?;

    let names: Vec<String> = extract_tags(&text)?.into_iter().collect();
    log::info!(
        "{}",
        Event::TagsExtracted {
            file: args.file.clone(),
            count: names.len(),
        }
    );

    if args.json {
        let json = serde_json::to_string(&names)
            .map_err(|e| FontweldError::Config(format!("JSON encoding failed: {e}")))?;
        println!("{json}");
    } else {
        for name in &names {
            println!("{name}");
        }
    }

    Ok(())
}
