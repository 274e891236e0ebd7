use explorer::config::{ExplorerConfig, Options, USAGE};
use explorer::error::ExplorerError;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so tables and JSON stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let options = match Options::parse(&args, ExplorerConfig::from_env()) {
        Ok(options) => options,
        Err(e @ (ExplorerError::Usage(_) | ExplorerError::Config(_))) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", explorer::run(&options)?);
    Ok(())
}
