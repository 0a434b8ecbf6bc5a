//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DeployOptions};
use crate::domain::{AppError, DefaultOverrides, OdooVersion};

#[derive(Parser)]
#[command(name = "odoogen")]
#[command(version)]
#[command(
    about = "Generate docker-compose.yaml, odoo.conf, and the database secret for an Odoo deployment",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Used when no subcommand is given; rejected alongside one.
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for deployment parameters and write the artifacts (default)
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Print the compose file built from defaults, without prompting or writing
    #[clap(visible_alias = "r")]
    Render {
        #[command(flatten)]
        target: TargetArgs,
        /// Odoo version tag (13.0, 14, 15, 16, 17)
        #[arg(long, default_value = "17", value_parser = parse_odoo_version)]
        odoo_version: OdooVersion,
    },
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    target: TargetArgs,
    /// Do not offer to start the services afterwards
    #[arg(long)]
    skip_launch: bool,
}

/// Directory and prompt defaults shared by every command.
#[derive(Args, Debug, Clone)]
struct TargetArgs {
    /// Directory to write the deployment into
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
    /// Default host port for Odoo
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,
    /// Default PostgreSQL image tag
    #[arg(long)]
    postgres_version: Option<String>,
    /// Default PostgreSQL database name
    #[arg(long)]
    postgres_db: Option<String>,
    /// Default PostgreSQL user
    #[arg(long)]
    postgres_user: Option<String>,
}

impl TargetArgs {
    fn into_parts(self) -> (PathBuf, DefaultOverrides) {
        let overrides = DefaultOverrides {
            port: self.port,
            postgres_version: self.postgres_version,
            postgres_db: self.postgres_db,
            postgres_user: self.postgres_user,
        };
        (self.dir, overrides)
    }
}

fn parse_odoo_version(value: &str) -> Result<OdooVersion, String> {
    OdooVersion::from_tag(value).ok_or_else(|| {
        let supported: Vec<&str> = OdooVersion::ALL.iter().map(|v| v.tag()).collect();
        format!("unsupported Odoo version '{}' (supported: {})", value, supported.join(", "))
    })
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("odoogen={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Generate(cli.generate));

    let result: Result<(), AppError> = match command {
        Commands::Generate(args) => run_generate(args),
        Commands::Render { target, odoo_version } => run_render(target, odoo_version),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs { target, skip_launch } = args;
    let (dir, overrides) = target.into_parts();
    let summary = api::deploy_at(dir, overrides, &DeployOptions { skip_launch })?;

    tracing::info!(
        version = %summary.parameters.odoo_version(),
        port = summary.parameters.port(),
        created_dirs = summary.generated.created_dirs.len(),
        launch = ?summary.launch,
        "deployment generated"
    );
    Ok(())
}

fn run_render(target: TargetArgs, version: OdooVersion) -> Result<(), AppError> {
    let (dir, overrides) = target.into_parts();
    let yaml = api::render_at(dir, overrides, version)?;
    print!("{}", yaml);
    Ok(())
}
