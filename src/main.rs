use clap::Parser;
use std::time::Instant;

use podsift::{
    audit_index, load_index_file, search, LoadError, QueryOutcome, SearchOptions,
    NO_RESULTS_MESSAGE,
};

mod cli;
use cli::display::{self, section_bot, section_mid, section_top};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            limit,
            min_len,
            query,
        } => run_search(
            &index,
            &query,
            &SearchOptions {
                min_query_len: min_len,
                max_results: limit,
            },
        ),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", display::error("error:"), e);
        std::process::exit(1);
    }
}

fn run_search(path: &str, query: &str, options: &SearchOptions) -> Result<(), String> {
    let index = load_index_file(path).map_err(|e: LoadError| e.to_string())?;
    log::info!("loaded {} documents from {}", index.len(), path);

    let start = Instant::now();
    let outcome = search(&index, query, options);
    let elapsed = start.elapsed();

    match outcome {
        QueryOutcome::BelowThreshold => {
            println!(
                "{}",
                display::warn(&format!(
                    "Query shorter than {} characters; nothing to show.",
                    options.min_query_len
                ))
            );
        }
        QueryOutcome::Matches(docs) if docs.is_empty() => {
            println!("{}", NO_RESULTS_MESSAGE);
        }
        QueryOutcome::Matches(docs) => {
            for (i, doc) in docs.iter().enumerate() {
                println!(
                    "{} {} {}",
                    display::rank(i + 1),
                    doc.title,
                    display::feed_badge(&doc.feed)
                );
                println!("    {}", display::url(&doc.url));
            }
            log::debug!(
                "{} of {} documents matched in {:?}",
                docs.len(),
                index.len(),
                elapsed
            );
        }
    }
    Ok(())
}

fn run_inspect(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        LoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        }
        .to_string()
    })?;
    let audit = audit_index(&raw).map_err(|e| e.to_string())?;

    section_top("INDEX");
    display::row(&format!(" File        {}", display::truncate(path, 56)));
    display::row(&format!(" Size        {}", display::format_size(raw.len())));
    display::row(&format!(" Documents   {}", audit.documents));
    display::row(&format!(
        " Text        {}",
        display::format_size(audit.text_bytes)
    ));

    section_mid("FEEDS");
    if audit.feeds.is_empty() {
        display::row(" (none)");
    }
    for (feed, count) in &audit.feeds {
        let badge = display::pad_right(&display::feed_badge(feed), 40);
        display::row(&format!(" {} {:>6}", badge, count));
    }

    section_mid("DATA QUALITY");
    if audit.malformed.is_empty() {
        display::row(&format!(" {}", display::ok("All entries have four string fields")));
    } else {
        display::row(&format!(
            " {}",
            display::warn(&format!(
                "{} entries will render with blank fields",
                audit.malformed.len()
            ))
        ));
        for entry in audit.malformed.iter().take(20) {
            display::row(&format!(
                "   #{:<6} missing or not text: {}",
                entry.position,
                entry.fields.join(", ")
            ));
        }
        if audit.malformed.len() > 20 {
            display::row(&format!("   … and {} more", audit.malformed.len() - 20));
        }
    }
    section_bot();
    Ok(())
}
