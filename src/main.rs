use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fiber_reports::config::{self, ConfigFile, CredentialFlags};
use fiber_reports::report::{self, DEFAULT_OUTPUT};
use fiber_reports::rpc::{AuthContext, BssEndpoints, GrpcBssDirectory, GrpcInventoryDirectory};
use fiber_reports::time_format::{DEFAULT_TIME_ZONE, TimestampFormatter};
use fiber_reports::{Result, inventory, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::init()?;
    match cli.command {
        Command::WorkOrders(args) => execute_work_orders(args).await,
        Command::Inventory(args) => execute_inventory(args).await,
    }
}

async fn execute_work_orders(args: WorkOrderArgs) -> Result<()> {
    let auth = args.connection.resolve_auth()?;
    let formatter = TimestampFormatter::new(&args.time_zone)?;
    let endpoints = args.endpoints();
    let directory = GrpcBssDirectory::connect(&endpoints, &auth)?;

    report::write_report(&directory, &formatter, &args.output).await?;

    println!(
        "Excel file created successfully: {}",
        args.output.display()
    );
    println!("You can open it with Excel or any compatible spreadsheet software.");
    println!("Done.");
    Ok(())
}

async fn execute_inventory(args: InventoryArgs) -> Result<()> {
    let auth = args.connection.resolve_auth()?;
    let directory = GrpcInventoryDirectory::connect(&args.inventory_endpoint, &auth)?;
    let summary = inventory::walk(&directory).await?;
    println!(
        "Visited {} points-of-presence and {} devices.",
        summary.pops, summary.devices
    );
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reports over the fiber business-support services."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the work-order status report as an Excel workbook.
    WorkOrders(WorkOrderArgs),
    /// Walk every point-of-presence and its devices.
    Inventory(InventoryArgs),
}

#[derive(clap::Args)]
struct ConnectionArgs {
    /// Optional JSON file holding `vault-token` and `fiber-operator-id`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bearer token; falls back to the config file, then VAULT_TOKEN.
    #[arg(long)]
    vault_token: Option<String>,

    /// Fiber operator the calls act as; falls back to the config file, then
    /// FIBER_OPERATOR_ID.
    #[arg(long)]
    fiber_operator_id: Option<String>,
}

impl ConnectionArgs {
    fn resolve_auth(&self) -> Result<AuthContext> {
        let file = match &self.config {
            Some(path) => Some(ConfigFile::load(path)?),
            None => None,
        };
        let flags = CredentialFlags {
            vault_token: self.vault_token.clone(),
            fiber_operator_id: self.fiber_operator_id.clone(),
        };
        config::resolve_auth(&flags, file.as_ref(), config::process_env)
    }
}

#[derive(clap::Args)]
struct WorkOrderArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Work-order service address.
    #[arg(long, default_value = "http://localhost:9999")]
    work_order_endpoint: String,

    /// Installation service address; defaults to the work-order service.
    #[arg(long)]
    installation_endpoint: Option<String>,

    /// Subscription service address.
    #[arg(long, default_value = "http://localhost:9998")]
    subscription_endpoint: String,

    /// Access-point service address.
    #[arg(long, default_value = "http://localhost:9997")]
    access_point_endpoint: String,

    /// Output workbook path.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Time zone the timestamps are rendered in.
    #[arg(long, default_value = DEFAULT_TIME_ZONE)]
    time_zone: String,
}

impl WorkOrderArgs {
    fn endpoints(&self) -> BssEndpoints {
        BssEndpoints {
            work_orders: self.work_order_endpoint.clone(),
            subscriptions: self.subscription_endpoint.clone(),
            access_points: self.access_point_endpoint.clone(),
            installations: self
                .installation_endpoint
                .clone()
                .unwrap_or_else(|| self.work_order_endpoint.clone()),
        }
    }
}

#[derive(clap::Args)]
struct InventoryArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Inventory service address.
    #[arg(long, default_value = "http://localhost:9999")]
    inventory_endpoint: String,
}
