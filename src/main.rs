//! query-endpoints
//!
//! Resolves the Store API endpoint flags of a querier into the merged,
//! validated endpoint groups and prints them.
//!
//! ```text
//! --endpoint.config-file / --endpoint.config  ─┐
//! --endpoint, --endpoint.sd-files             ─┼─▶ load_config ─▶ stdout (yaml | json)
//! --endpoint-strict                           ─┤
//! --grpc-client-tls-*                         ─┘
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use query_endpoints::observability::{logging, LogFormat};
use query_endpoints::{load_config, EndpointGroup, FileSdConfig, TlsConfiguration};

#[derive(Parser, Debug)]
#[command(name = "query-endpoints")]
#[command(about = "Merge and validate Store API endpoint configuration", long_about = None)]
struct Cli {
    /// Store API address to query; repeatable.
    #[arg(long = "endpoint", value_name = "ADDR")]
    endpoints: Vec<String>,

    /// Store API address that is always kept, even when unhealthy; repeatable.
    #[arg(long = "endpoint-strict", value_name = "ADDR")]
    strict_endpoints: Vec<String>,

    /// File-SD target files for the --endpoint group; repeatable.
    #[arg(long = "endpoint.sd-files", value_name = "PATH")]
    sd_files: Vec<String>,

    /// Refresh interval for --endpoint.sd-files.
    #[arg(
        long = "endpoint.sd-interval",
        value_name = "DURATION",
        default_value = "5m",
        value_parser = humantime::parse_duration
    )]
    sd_interval: Duration,

    /// Path to the YAML endpoint-group document.
    #[arg(long = "endpoint.config-file", value_name = "PATH", conflicts_with = "config")]
    config_file: Option<PathBuf>,

    /// Inline YAML endpoint-group document.
    #[arg(long = "endpoint.config", value_name = "YAML")]
    config: Option<String>,

    /// Client certificate for the flag endpoint groups.
    #[arg(long = "grpc-client-tls-cert", value_name = "PATH")]
    tls_cert: Option<String>,

    /// Client key for the flag endpoint groups.
    #[arg(long = "grpc-client-tls-key", value_name = "PATH")]
    tls_key: Option<String>,

    /// CA bundle for the flag endpoint groups.
    #[arg(long = "grpc-client-tls-ca", value_name = "PATH")]
    tls_ca: Option<String>,

    /// Server name to verify on the flag endpoint groups.
    #[arg(long = "grpc-client-server-name", value_name = "NAME")]
    server_name: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,

    #[arg(long = "log.format", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl Cli {
    fn document(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        if let Some(path) = &self.config_file {
            return std::fs::read(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e).into());
        }
        Ok(self.config.clone().unwrap_or_default().into_bytes())
    }

    fn file_sd_config(&self) -> Option<FileSdConfig> {
        if self.sd_files.is_empty() {
            return None;
        }
        Some(FileSdConfig::new(self.sd_files.clone()).with_refresh_interval(self.sd_interval))
    }

    fn tls_config(&self) -> TlsConfiguration {
        TlsConfiguration {
            cert_file: self.tls_cert.clone(),
            key_file: self.tls_key.clone(),
            ca_file: self.tls_ca.clone(),
            server_name: self.server_name.clone(),
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let document = cli.document()?;
    let groups = load_config(
        &document,
        &cli.endpoints,
        &cli.strict_endpoints,
        cli.file_sd_config().as_ref(),
        &cli.tls_config(),
    )?;
    render(&groups, cli.output)
}

fn render(groups: &[EndpointGroup], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(groups)?,
        OutputFormat::Json => serde_json::to_string_pretty(groups)? + "\n",
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    match run(&cli) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid endpoint configuration");
            ExitCode::FAILURE
        }
    }
}
