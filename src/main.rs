use calprint::application::{resolve_today, PrintOptions, PrintService};
use calprint::cli::{format_summary, Cli};
use calprint::error::CalprintError;
use calprint::infrastructure::logging;
use calprint::infrastructure::Config;
use clap::Parser;
use std::fs;
use std::io::Write;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(logging::log_level(cli.verbose)) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CalprintError> {
    // Config file first, then flags on top
    let cwd = std::env::current_dir()?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if cli.strict {
        config.strict = true;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }

    let today = resolve_today(cli.today.as_deref())?;

    let service = PrintService::new(config);
    let report = service.execute(&PrintOptions {
        input: cli.input,
        fragment: cli.fragment,
        today,
    })?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &report.document)?;
            eprintln!("{}", format_summary(&report.summary, &path));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.document.as_bytes())?;
            if !report.document.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
