//! Catalog browser - Entry Point

use catview::config::{self, CliOverrides};
use catview::state::AppState;
use catview::view::{CatalogStyles, ColorConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Catalog browser - search and page through a JSON item catalog
#[derive(Parser, Debug)]
#[command(name = "catview")]
#[command(version)]
#[command(about = "TUI for searching and paging through a JSON item catalog")]
pub struct Args {
    /// Path to JSON catalog (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Start with this search term already applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Items per page (must be positive)
    #[arg(
        short,
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub page_size: Option<usize>,

    /// Pause after the last keystroke before filtering, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Show only Prev/Next in the pagination bar
    #[arg(long)]
    pub no_page_numbers: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override lower configuration layers.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            page_size: self.page_size,
            debounce_ms: self.debounce_ms,
            show_page_numbers: self.no_page_numbers.then_some(false),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged)?;
        config::apply_cli_overrides(with_env, &args.overrides())
    };
    let settings = config.controller_settings()?;

    let _log_guard = catview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = catview::source::detect_input_source(args.file.clone())?;

    let app_state = match args.search {
        Some(term) => AppState::with_initial_term(settings, term),
        None => AppState::new(settings),
    };
    let styles = CatalogStyles::new(ColorConfig::from_env_and_args(args.no_color));

    catview::view::run_with_source(input_source, app_state, styles)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["catview", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["catview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["catview"]);
        assert_eq!(args.file, None);
        assert_eq!(args.search, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.debounce_ms, None);
        assert!(!args.no_page_numbers);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["catview", "pokedex.json"]);
        assert_eq!(args.file, Some(PathBuf::from("pokedex.json")));
    }

    #[test]
    fn test_search_short_and_long() {
        let short = Args::parse_from(["catview", "-s", "char"]);
        let long = Args::parse_from(["catview", "--search", "saur"]);
        assert_eq!(short.search.as_deref(), Some("char"));
        assert_eq!(long.search.as_deref(), Some("saur"));
    }

    #[test]
    fn test_page_size_short_flag() {
        let args = Args::parse_from(["catview", "-p", "24"]);
        assert_eq!(args.page_size, Some(24));
        assert_eq!(args.overrides().page_size, Some(24));
    }

    #[test]
    fn test_page_size_rejects_values_past_u64() {
        let err = Args::try_parse_from(["catview", "-p", "18446744073709551616"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let err = Args::try_parse_from(["catview", "--page-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_negative() {
        assert!(Args::try_parse_from(["catview", "-p", "-3"]).is_err());
    }

    #[test]
    fn test_debounce_accepts_zero() {
        let args = Args::parse_from(["catview", "--debounce-ms", "0"]);
        assert_eq!(args.overrides().debounce_ms, Some(0));
    }

    #[test]
    fn test_no_page_numbers_overrides_to_false() {
        let args = Args::parse_from(["catview", "--no-page-numbers"]);
        assert_eq!(args.overrides().show_page_numbers, Some(false));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["catview", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "catview",
            "items.json",
            "-s",
            "mew",
            "-p",
            "8",
            "--debounce-ms",
            "250",
            "--no-color",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("items.json")));
        assert_eq!(args.search.as_deref(), Some("mew"));
        assert_eq!(args.page_size, Some(8));
        assert_eq!(args.debounce_ms, Some(250));
        assert!(args.no_color);
    }

    #[test]
    fn test_cli_page_size_flows_through_precedence_chain() {
        use catview::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            page_size: Some(30),
            debounce_ms: Some(100),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.page_size, 30, "Config file should override default");

        let args = Args::parse_from(["catview", "-p", "5"]);
        let resolved = apply_cli_overrides(merged, &args.overrides());

        assert_eq!(resolved.page_size, 5, "CLI should override all other sources");
        assert_eq!(resolved.debounce_ms, 100);
        assert_eq!(resolved.controller_settings().unwrap().page_size.get(), 5);
    }
}
