use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::Level;

use rawhttp::config::CONFIG_PATH_ENV;
use rawhttp::{Config, HttpClient, RequestArgs};

/// Minimal HTTP/1.1 client that writes every byte on the wire itself.
#[derive(Debug, Parser)]
#[command(name = "rawhttp", version)]
struct Cli {
    /// Optional method (GET or POST, anything else means GET) followed by the URL
    #[arg(value_name = "[METHOD] URL", num_args = 1..=2, required = true)]
    target: Vec<String>,

    /// Request argument, repeatable; sent as query string (GET) or form body (POST)
    #[arg(short, long = "arg", value_name = "KEY=VALUE")]
    args: Vec<String>,

    /// YAML configuration file
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_args(raw: &[String]) -> RequestArgs {
    raw.iter()
        .map(|pair| pair.split_once('=').unwrap_or((pair.as_str(), "")))
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (method, url) = match cli.target.as_slice() {
        [url] => ("GET", url.as_str()),
        [method, url] => (method.as_str(), url.as_str()),
        _ => anyhow::bail!("expected [METHOD] URL"),
    };

    let cfg = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    let client = HttpClient::new(&cfg);
    let args = parse_args(&cli.args);

    tokio::select! {
        res = client.command(url, method, &args) => {
            let response = res.with_context(|| format!("{method} {url} failed"))?;
            println!("{response}");
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning request");
            anyhow::bail!("interrupted");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_url_alone() {
        let cli = Cli::try_parse_from(["rawhttp", "http://example.com"]).unwrap();
        assert_eq!(cli.target, vec!["http://example.com"]);
    }

    #[test]
    fn cli_takes_config_path() {
        let cli = Cli::try_parse_from(["rawhttp", "-c", "client.yaml", "http://a"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("client.yaml")));
    }

    #[test]
    fn cli_requires_a_url() {
        assert!(Cli::try_parse_from(["rawhttp"]).is_err());
    }

    #[test]
    fn cli_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["rawhttp", "GET", "http://a", "extra"]).is_err());
    }

    #[test]
    fn args_split_on_first_equals() {
        let raw = vec!["q=a=b".to_string(), "flag".to_string()];
        let args = parse_args(&raw);
        assert_eq!(args.to_form_string(), "q=a=b&flag=&");
    }
}
