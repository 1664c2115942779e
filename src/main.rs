use clap::Parser;
use dayone2obs::application::{ConvertOptions, ConvertService};
use dayone2obs::cli::{format_report, Cli};
use dayone2obs::error::ConvertError;
use dayone2obs::infrastructure::Config;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("dayone2obs={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    let options = ConvertOptions::from_config(
        config,
        cli.input,
        cli.output,
        cli.backup_dirs,
        cli.journal_name,
        !cli.no_stars,
    );

    let report = ConvertService::new(options).execute()?;
    print!("{}", format_report(&report));

    Ok(())
}
