use clap::Parser;
use quadro::cli::{Cli, Commands};
use quadro::types::config::Config;
use quadro::QuadroResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> QuadroResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        // Use config value if no flag was specified
        config.general.log_level.clone()
    };

    // Initialize logging with appropriate level
    let filter = EnvFilter::from_default_env().add_directive(
        format!("quadro={}", log_level)
            .parse()
            .unwrap_or_else(|_| "quadro=info".parse().expect("fallback directive is valid")),
    );

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            quadro::cli::commands::init(path).await?;
        }
        Commands::Status => {
            quadro::cli::commands::status(&config).await?;
        }
        Commands::Config => {
            quadro::cli::commands::config_cmd(&cli.config).await?;
        }
        Commands::Query {
            sql,
            start,
            end,
            predicates,
            no_cache,
            ttl,
        } => {
            quadro::cli::commands::query(sql, start, end, predicates, no_cache, ttl, &config)
                .await?;
        }
        Commands::Export {
            output,
            title,
            start,
            end,
        } => {
            quadro::cli::commands::export(output, title, start, end, &config).await?;
        }
        Commands::Version => {
            quadro::cli::commands::version();
        }
    }

    Ok(())
}
