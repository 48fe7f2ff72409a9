use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use cinescope::browse::BrowseQuery;
use cinescope::catalog::{Category, Language};
use cinescope::config::Config;
use cinescope::logging;
use cinescope::ui;

/// Terminal browser for a movie metadata catalog.
#[derive(Debug, Parser)]
#[command(name = "cinescope", version, about)]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Category to open with (popular, top_rated, now_playing, upcoming).
    #[arg(long)]
    category: Option<String>,

    /// Content language code to open with (en, hi, es, fr, de).
    #[arg(long)]
    language: Option<String>,

    /// Search text to open with; takes precedence over the category.
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let query = initial_query(&cli, &config)?;
    ui::run(config, query).await
}

fn initial_query(cli: &Cli, config: &Config) -> anyhow::Result<BrowseQuery> {
    let category_key = cli.category.as_deref().unwrap_or(&config.defaults.category);
    let Some(category) = Category::from_key(category_key) else {
        bail!("unknown category '{category_key}' (expected popular, top_rated, now_playing, or upcoming)");
    };

    let language_code = cli.language.as_deref().unwrap_or(&config.defaults.language);
    let Some(language) = Language::from_code(language_code) else {
        bail!("unsupported language '{language_code}' (expected en, hi, es, fr, or de)");
    };

    let mut query = BrowseQuery::new(category, language);
    if let Some(search) = &cli.search {
        query.search_text = search.clone();
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("cinescope").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_come_from_the_config() {
        let query = initial_query(&cli(&[]), &Config::default()).unwrap();
        assert_eq!(query.category, Category::Popular);
        assert_eq!(query.language, Language::En);
        assert!(!query.search_active());
    }

    #[test]
    fn cli_overrides_win() {
        let query = initial_query(
            &cli(&["--category", "top_rated", "--language", "fr", "--search", "dune"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(query.category, Category::TopRated);
        assert_eq!(query.language, Language::Fr);
        assert_eq!(query.search_text, "dune");
        assert!(query.search_active());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = initial_query(&cli(&["--category", "bestest"]), &Config::default());
        assert!(err.is_err());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = initial_query(&cli(&["--language", "xx"]), &Config::default());
        assert!(err.is_err());
    }
}
