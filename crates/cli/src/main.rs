use clap::Parser;
use ferrous_walk_domain::{CliOverrides, LookupMode};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-walk")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Walk - iterative DNS resolver that walks root, TLD and authoritative servers")]
struct Cli {
    /// Lookup mode (iterative, recursive)
    mode: LookupMode,

    /// Domain name to resolve
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum delegation rounds (0 disables the bound)
    #[arg(long, value_name = "N")]
    max_hops: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures.
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let cli_overrides = CliOverrides {
        query_timeout_secs: cli.timeout,
        max_hops: cli.max_hops,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new(&config);

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling resolution");
            ctrl_c_token.cancel();
        }
    });

    let start = Instant::now();

    match cli.mode {
        LookupMode::Iterative => {
            match use_cases
                .resolve_iteratively
                .execute(&cli.domain, &cancel)
                .await
            {
                Ok(resolution) => {
                    debug!(
                        stage = %resolution.stage,
                        hops = resolution.hops(),
                        record = %resolution.answer,
                        "Iterative resolution finished"
                    );
                    println!("[SUCCESS] {} -> {}", cli.domain, resolution.answer.data);
                }
                Err(e) => println!("[ERROR] {}", e),
            }
        }
        LookupMode::Recursive => {
            let report = use_cases.recursive_lookup.execute(&cli.domain).await;

            for phase in [&report.nameservers, &report.addresses] {
                match phase {
                    Ok(records) => {
                        for record in records {
                            println!("[SUCCESS] {} -> {}", cli.domain, record);
                        }
                    }
                    Err(e) => println!("[ERROR] Recursive lookup failed: {}", e),
                }
            }
        }
    }

    println!("Time taken: {:.3} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
