//! Collection binary: fetch all anecdote pages, persist the records, then
//! search them interactively.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use anekdot_scraper::{logging, search, storage, Collector, HttpFetcher, ScraperConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ScraperConfig::default();
    logging::init(config.log_path.as_deref())?;

    // The HTTP session lives exactly as long as the collection phase.
    {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        let collector = Collector::new(&fetcher, &config)?;
        let records = collector.collect_all().await;
        storage::write_records(&config.output_path, config.delimiter, &records);
        info!("{}", collector.stats());
    }

    let term = prompt("Search term: ")?;
    let stored = storage::read_records(&config.output_path, config.delimiter)?;
    let matches = search::find_matching(&stored, &term, config.search_limit);

    if matches.is_empty() {
        println!("No anecdotes matched '{term}'.");
    } else {
        for (index, record) in matches.iter().enumerate() {
            println!("{}. {}", index + 1, record.body);
        }
    }
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
