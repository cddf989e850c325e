mod check;

use std::fmt;
use std::sync::Arc;

use api::{ProxyConfig, ProxyState, WolframEngine};
use services::{HttpQueryTransport, QueryClient, external_url};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FILTER: &str = "app=info,api=debug,services=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Serve,
    Query { text: String },
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    command: Command,
    addr: String,
    proxy: String,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyQuery,
    InvalidAddr { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyQuery => write!(f, "query requires some text"),
            ArgsError::InvalidAddr { raw } => write!(f, "invalid --addr value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.into())
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(
            std::env::args().skip(1),
            env_or("PROOFMASTER_ADDR", DEFAULT_ADDR),
            env_or("PROOFMASTER_PROXY_URL", services::query_client::DEFAULT_PROXY_URL),
        )
    }

    fn parse_from(
        args: impl IntoIterator<Item = String>,
        mut addr: String,
        mut proxy: String,
    ) -> Result<Self, ArgsError> {
        let mut args = args.into_iter().peekable();
        let command = match args.peek().map(String::as_str) {
            Some("serve") => {
                args.next();
                Command::Serve
            }
            Some("query") => {
                args.next();
                Command::Query {
                    text: String::new(),
                }
            }
            Some("check") => {
                args.next();
                Command::Check
            }
            _ => Command::Serve,
        };

        let mut words: Vec<String> = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--addr" => {
                    let value = require_value(&mut args, "--addr")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidAddr { raw: value });
                    }
                    addr = value;
                }
                "--proxy" => {
                    proxy = require_value(&mut args, "--proxy")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if matches!(command, Command::Query { .. }) && !arg.starts_with("--") => {
                    words.push(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let command = match command {
            Command::Query { .. } => {
                let text = words.join(" ");
                if text.trim().is_empty() {
                    return Err(ArgsError::EmptyQuery);
                }
                Command::Query { text }
            }
            other => other,
        };

        Ok(Self {
            command,
            addr,
            proxy,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [serve] [--addr <host:port>]");
    eprintln!("  app query <text...> [--proxy <url>]");
    eprintln!("  app check [--addr <host:port>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --addr <host:port>        Bind address (default: {DEFAULT_ADDR})");
    eprintln!(
        "  --proxy <url>             Proxy base URL (default: {})",
        services::query_client::DEFAULT_PROXY_URL
    );
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WOLFRAM_APP_ID, PROOFMASTER_UPSTREAM_URL, PROOFMASTER_UNITS,");
    eprintln!("  PROOFMASTER_ADDR, PROOFMASTER_PROXY_URL, RUST_LOG");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = ProxyConfig::from_env();
    if !config.has_app_id() {
        warn!("WOLFRAM_APP_ID is not set; queries will fail with 500");
    }
    let engine = WolframEngine::new(config.upstream_url.clone());
    let state = ProxyState::new(config, Arc::new(engine));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "query proxy listening");
    axum::serve(listener, api::router(state)).await?;
    Ok(())
}

async fn query(text: &str, proxy: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = QueryClient::new(HttpQueryTransport::new(proxy));
    match client.query(text).await {
        Ok(Some(result)) => {
            println!("{result}");
            Ok(())
        }
        Ok(None) => Err(ArgsError::EmptyQuery.into()),
        Err(err) => {
            if let Ok(url) = external_url(text) {
                eprintln!("Try it on the web: {url}");
            }
            Err(err.into())
        }
    }
}

fn run_check(addr: &str) {
    let lines = check::preflight(&ProxyConfig::from_env(), addr);
    for line in &lines {
        println!("{line}");
    }
    if !check::passed(&lines) {
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing();

    match &args.command {
        Command::Serve => serve(&args.addr).await,
        Command::Query { text } => query(text, &args.proxy).await,
        Command::Check => {
            run_check(&args.addr);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse_from(
            args.iter().map(|s| (*s).to_string()),
            DEFAULT_ADDR.into(),
            "http://proxy".into(),
        )
    }

    #[test]
    fn serve_is_the_default_command() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, Command::Serve);
        assert_eq!(args.addr, DEFAULT_ADDR);

        let args = parse(&["--addr", "127.0.0.1:8080"]).unwrap();
        assert_eq!(args.command, Command::Serve);
        assert_eq!(args.addr, "127.0.0.1:8080");
    }

    #[test]
    fn query_joins_words_and_takes_proxy_flag() {
        let args = parse(&["query", "2^5", "+", "1", "--proxy", "http://other"]).unwrap();
        assert_eq!(
            args.command,
            Command::Query {
                text: "2^5 + 1".into()
            }
        );
        assert_eq!(args.proxy, "http://other");
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(parse(&["query"]), Err(ArgsError::EmptyQuery)));
        assert!(matches!(
            parse(&["serve", "--addr"]),
            Err(ArgsError::MissingValue { flag: "--addr" })
        ));
        assert!(matches!(
            parse(&["check", "extra"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "extra"
        ));
    }
}
