use crate::cli::actions::render;
use anyhow::Result;
use carpool_ui::content::{self, PAGES};
use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct Args {
    pub slug: Option<String>,
    pub search: Option<String>,
}

/// # Errors
/// Returns an error if writing to stdout fails.
pub fn execute(args: &Args) -> Result<()> {
    let mut out = io::stdout().lock();
    run(args, &mut out)
}

/// # Errors
/// Returns an error if writing fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    if let Some(query) = &args.search {
        let results = content::search_help(query);
        if results.is_empty() {
            writeln!(out, "No help articles match \"{}\".", query.trim())?;
        }
        for (category, faq) in results {
            writeln!(out, "[{category}] {}", faq.question)?;
            writeln!(out, "  {}", faq.answer)?;
        }
        return Ok(());
    }

    match args.slug.as_deref().and_then(content::page) {
        Some(page) => render::page(out, page)?,
        None => {
            for page in &PAGES {
                writeln!(out, "{:<20} {}", page.slug, page.title)?;
            }
        }
    }
    Ok(())
}
