// stocklist-cli/src/main.rs
// ============================================================================
// Module: Stocklist CLI Entry Point
// Description: Command dispatcher for the stocklist inventory tool.
// Purpose: Drive the presentation controller from a command-line surface.
// Dependencies: clap, stocklist-core, stocklist-config, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The Stocklist CLI is the user surface over the presentation controller:
//! every subcommand maps a user intent (add, edit, remove, list) onto
//! controller operations and never touches the storage interface directly.
//! Storage failures and rejected form input surface on stderr with a nonzero
//! exit code; structured diagnostics flow through the tracing subscriber.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use stocklist_config::StocklistConfig;
use stocklist_core::Item;
use stocklist_core::ItemId;
use stocklist_core::ItemListController;
use stocklist_core::ItemStore;
use stocklist_core::SharedItemStore;
use stocklist_core::SortSpec;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "stocklist", version, about = "Persistent inventory list manager")]
struct Cli {
    /// Optional config file path (defaults to stocklist.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new item.
    Add(AddCommand),
    /// Edit an existing item.
    Edit(EditCommand),
    /// Remove an item.
    Remove(RemoveCommand),
    /// List items under a sort order.
    List(ListCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `add` command.
#[derive(Args, Debug)]
struct AddCommand {
    /// Item name.
    #[arg(long, value_name = "NAME")]
    name: String,
    /// Item quantity; validated as an integer before any storage call.
    #[arg(long, value_name = "QTY")]
    quantity: String,
}

/// Arguments for the `edit` command.
#[derive(Args, Debug)]
struct EditCommand {
    /// Identifier of the item to edit.
    #[arg(long, value_name = "ID")]
    id: i64,
    /// Replacement item name.
    #[arg(long, value_name = "NAME")]
    name: String,
    /// Replacement quantity; validated as an integer before any storage call.
    #[arg(long, value_name = "QTY")]
    quantity: String,
}

/// Arguments for the `remove` command.
#[derive(Args, Debug)]
struct RemoveCommand {
    /// Identifier of the item to remove.
    #[arg(long, value_name = "ID")]
    id: i64,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
struct ListCommand {
    /// Sort order applied to the listing.
    #[arg(long, value_enum, default_value_t = SortArg::NameAz)]
    sort: SortArg,
    /// Output format for the listing.
    #[arg(long, value_enum, default_value_t = ListFormat::Plain)]
    format: ListFormat,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the resolved configuration file.
    Validate,
}

/// Sort orders selectable on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum SortArg {
    /// Name ascending.
    NameAz,
    /// Name descending.
    NameZa,
    /// Quantity ascending.
    QtyLh,
    /// Quantity descending.
    QtyHl,
    /// Quantity ascending, then name ascending.
    QtyLhNameAz,
    /// Quantity descending, then name descending.
    QtyHlNameZa,
}

impl SortArg {
    /// Maps the CLI selection onto the core sort specification.
    const fn spec(self) -> SortSpec {
        match self {
            Self::NameAz => SortSpec::NameAz,
            Self::NameZa => SortSpec::NameZa,
            Self::QtyLh => SortSpec::QtyLh,
            Self::QtyHl => SortSpec::QtyHl,
            Self::QtyLhNameAz => SortSpec::QtyLhNameAz,
            Self::QtyHlNameZa => SortSpec::QtyHlNameZa,
        }
    }
}

/// Output formats for listings.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ListFormat {
    /// Tab-separated lines, one item per line.
    Plain,
    /// Pretty-printed JSON array.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    init_tracing()?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Add(command) => command_add(cli.config.as_deref(), &command),
        Commands::Edit(command) => command_edit(cli.config.as_deref(), &command),
        Commands::Remove(command) => command_remove(cli.config.as_deref(), &command),
        Commands::List(command) => command_list(cli.config.as_deref(), &command),
        Commands::Config {
            command,
        } => command_config(cli.config.as_deref(), &command),
    }
}

/// Installs the tracing subscriber with an env-derived filter.
fn init_tracing() -> CliResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::new(format!("tracing init failed: {err}")))
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `add` command.
fn command_add(config: Option<&Path>, command: &AddCommand) -> CliResult<ExitCode> {
    let mut controller = open_controller(config)?;
    controller.set_form(command.name.clone(), command.quantity.clone());
    controller.submit().map_err(|err| CliError::new(err.to_string()))?;
    let total = controller.items().len();
    write_stdout_line(&format!("added {} ({total} items total)", command.name.trim()))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `edit` command.
fn command_edit(config: Option<&Path>, command: &EditCommand) -> CliResult<ExitCode> {
    let mut controller = open_controller(config)?;
    controller.refresh().map_err(|err| CliError::new(err.to_string()))?;
    controller
        .start_edit(ItemId::new(command.id))
        .map_err(|err| CliError::new(err.to_string()))?;
    controller.set_form(command.name.clone(), command.quantity.clone());
    controller.submit().map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!("updated item {}", command.id))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `remove` command.
fn command_remove(config: Option<&Path>, command: &RemoveCommand) -> CliResult<ExitCode> {
    let mut controller = open_controller(config)?;
    controller.remove(ItemId::new(command.id)).map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!("removed item {}", command.id))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `list` command.
fn command_list(config: Option<&Path>, command: &ListCommand) -> CliResult<ExitCode> {
    let mut controller = open_controller(config)?;
    controller
        .set_sort(command.sort.spec())
        .map_err(|err| CliError::new(err.to_string()))?;
    let rendered = render_items(controller.items(), command.format)?;
    write_stdout_line(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `config` command group.
fn command_config(config: Option<&Path>, command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => {
            StocklistConfig::load(config).map_err(|err| CliError::new(err.to_string()))?;
            write_stdout_line("config ok")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration, opens the configured store, and wraps it in a
/// controller. The schema bootstrap runs on every start.
fn open_controller(path: Option<&Path>) -> CliResult<ItemListController<SharedItemStore>> {
    let config = StocklistConfig::load(path).map_err(|err| CliError::new(err.to_string()))?;
    let store = config.build_store().map_err(|err| CliError::new(err.to_string()))?;
    store.initialize().map_err(|err| CliError::new(err.to_string()))?;
    tracing::debug!("item store ready");
    Ok(ItemListController::new(store, SortSpec::default()))
}

/// Renders an item listing in the requested format.
fn render_items(items: &[Item], format: ListFormat) -> CliResult<String> {
    match format {
        ListFormat::Plain => {
            if items.is_empty() {
                return Ok("no items yet".to_string());
            }
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("{}\t{}\t{}", item.id, item.name, item.quantity))
                .collect();
            Ok(lines.join("\n"))
        }
        ListFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|err| CliError::new(format!("json encode failed: {err}"))),
    }
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
        .map_err(|err| CliError::new(format!("stdout write failed: {err}")))
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits a final error message and maps it to a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
