//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calprint")]
#[command(about = "Render a calendar file as an HTML page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Calendar file: JSON entries, a terminal calendar save file, or a data.js script
    #[arg(value_name = "INPUT", default_value = "calendar.json")]
    pub input: PathBuf,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit only the rendered entry blocks, without the surrounding page
    #[arg(long)]
    pub fragment: bool,

    /// Day to highlight (default: current local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Config file (default: $CALPRINT_CONFIG or ./calprint.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on keys that are neither dates nor weekday names
    #[arg(long)]
    pub strict: bool,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["calprint"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("calendar.json"));
        assert!(cli.output.is_none());
        assert!(!cli.fragment);
        assert!(!cli.strict);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "calprint",
            "cal.json",
            "-o",
            "out.html",
            "--fragment",
            "--today",
            "2024-01-10",
            "--config",
            "my.toml",
            "--strict",
            "--title",
            "Plans",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("cal.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.fragment);
        assert_eq!(cli.today.as_deref(), Some("2024-01-10"));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(cli.strict);
        assert_eq!(cli.title.as_deref(), Some("Plans"));
        assert!(cli.verbose);
    }
}
