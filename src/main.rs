use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use release_gen::config::Config;

#[derive(Parser)]
#[command(name = "release-gen")]
#[command(version, about = "ApplicationSet plugin generator serving curated release parameters")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    let config = Config::from_env()?;
    init_logging(&config.log_level);

    if config.github_token.is_none() {
        info!(
            "GITHUB_PAT is not set; private repositories are inaccessible and unauthenticated requests are limited to 60 per hour"
        );
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(release_gen::api::server::run_server(config))
}

fn init_logging(level_str: &str) {
    let level = parse_level(level_str);

    let mut filter = EnvFilter::from_default_env();

    if std::env::var("RUST_LOG").is_err() {
        filter = filter
            .add_directive(format!("release_gen={}", level).parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
