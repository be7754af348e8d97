//! profiler-registry CLI - inspect dialects, converters and column classification.

use clap::{Parser, Subcommand};
use profiler_registry::{
    classify, classify_catalog, native_type_for, Config, CustomType, DataType, Dialect,
    NativeType, ProfilePlan, RegistryError, NOT_COMPUTE_OM,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "profiler-registry")]
#[command(about = "Column type classification and dialect lookup for data profiling")]
#[command(version)]
struct Cli {
    /// Path to YAML profiler configuration file
    #[arg(short, long, default_value = "profiler.yaml")]
    config: PathBuf,

    /// Output JSON to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered dialects and their connection schemes
    Dialects,

    /// List registered scalar converters
    Converters,

    /// Classify a single column type
    Classify {
        /// Catalog data type (e.g. INT, VARCHAR)
        #[arg(long, required_unless_present = "native_type")]
        data_type: Option<String>,

        /// Driver type class (e.g. Integer, Varchar); overrides the catalog mapping
        #[arg(long)]
        native_type: Option<String>,
    },

    /// Build a profile plan from the configuration file
    Plan,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), RegistryError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format)
        .map_err(|e| RegistryError::Config(e.to_string()))?;

    match cli.command {
        Commands::Dialects => {
            if cli.output_json {
                let entries: Vec<_> = Dialect::ALL
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "service_type": d.service_type(),
                            "scheme": d.scheme(),
                            "bytes": d.scheme().is_bytes(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for dialect in Dialect::ALL {
                    let scheme = dialect.scheme();
                    let marker = if scheme.is_bytes() { " (bytes)" } else { "" };
                    println!("{:<12} {}{}", dialect.service_type(), scheme, marker);
                }
            }
        }

        Commands::Converters => {
            if cli.output_json {
                let entries: Vec<_> = CustomType::ALL
                    .iter()
                    .map(|c| {
                        let converter = c.converter();
                        serde_json::json!({
                            "name": c.name(),
                            "converter": converter.name(),
                            "impl_type": converter.impl_type(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for custom in CustomType::ALL {
                    let converter = custom.converter();
                    println!(
                        "{:<6} {:<14} decorates {}",
                        custom.name(),
                        converter.name(),
                        converter.impl_type()
                    );
                }
            }
        }

        Commands::Classify {
            data_type,
            native_type,
        } => {
            let data_type = data_type.map(|s| s.parse::<DataType>()).transpose()?;
            let native_override = native_type.map(|s| s.parse::<NativeType>()).transpose()?;
            let native_type = native_override.or_else(|| data_type.map(native_type_for));

            let class = match (data_type, native_override) {
                (Some(dt), _) if NOT_COMPUTE_OM.contains(&dt) => classify_catalog(dt),
                (_, Some(native)) => classify(&native),
                (Some(dt), None) => classify_catalog(dt),
                (None, None) => {
                    return Err(RegistryError::Config(
                        "either --data-type or --native-type is required".to_string(),
                    ))
                }
            };
            debug!("Classified {:?} / {:?} as {}", data_type, native_type, class);

            if cli.output_json {
                let result = serde_json::json!({
                    "data_type": data_type,
                    "native_type": native_type,
                    "class": class,
                    "metrics": class.metrics(),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                if let Some(dt) = data_type {
                    println!("Data type:   {}", dt);
                }
                if let Some(native) = native_type {
                    println!("Native type: {}", native);
                }
                println!("Class:       {}", class);
                let metrics: Vec<String> =
                    class.metrics().iter().map(|m| format!("{:?}", m)).collect();
                if metrics.is_empty() {
                    println!("Metrics:     none");
                } else {
                    println!("Metrics:     {}", metrics.join(", "));
                }
            }
        }

        Commands::Plan => {
            let config = Config::load(&cli.config)?;
            info!("Loaded configuration from {:?}", cli.config);

            let plan = ProfilePlan::build(&config)?;

            if cli.output_json {
                println!("{}", plan.to_json()?);
            } else {
                println!("Dialect: {} (scheme: {})", plan.dialect, plan.scheme);
                for table in &plan.tables {
                    println!(
                        "\n{} ({}/{} columns computable)",
                        table.name,
                        table.computable_columns(),
                        table.columns.len()
                    );
                    for column in &table.columns {
                        let converter = column
                            .converter
                            .map(|c| format!(" via {}", c))
                            .unwrap_or_default();
                        println!(
                            "  {:<24} {:<12} {:<14} {}{}",
                            column.name,
                            column.data_type,
                            column.native_type,
                            column.class,
                            converter
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
