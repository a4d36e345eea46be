use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finreport::cli::{handle_report_command, ReportCommands};
use finreport::config::{ReportPaths, Settings};
use finreport::display::format_month_list;
use finreport::logging;
use finreport::services::HttpReportClient;
use finreport::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "finreport",
    version,
    about = "Monthly financial reports in the terminal",
    long_about = "finreport fetches a month's income, expenses, savings and balance \
                  from the report service, shows them on an interactive screen, \
                  and exports them as an A4 PDF."
)]
struct Cli {
    /// Base URL of the report service
    #[arg(long, global = true, env = "FINREPORT_API_URL")]
    api_url: Option<String>,

    /// User whose reports are requested
    #[arg(long, global = true, env = "FINREPORT_USER_ID")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive report screen (default)
    #[command(alias = "ui")]
    Tui,

    /// Fetch, print and export reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the selectable months
    Months,

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to config.json
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(cli.api_url, cli.user)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init_file(&paths)?;
            let client = HttpReportClient::from_settings(&settings)?;
            run_tui(&settings, Arc::new(client))?;
        }
        Commands::Report(cmd) => {
            logging::init_stderr();
            handle_report_command(&settings, cmd)?;
        }
        Commands::Months => {
            println!("{}", format_month_list());
        }
        Commands::Config { save } => {
            if save {
                settings.save(&paths)?;
            }
            println!("finreport Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!(
                "Settings file:  {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not written, using defaults)" }
            );
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Report service: {}", settings.api_base_url);
            println!("  User:           {}", settings.user_id);
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Export dir:     {}", settings.export_dir().display());
            match settings.request_timeout_secs {
                Some(secs) => println!("  Timeout:        {}s", secs),
                None => println!("  Timeout:        none"),
            }
            println!("  Capture scale:  {}x", settings.capture_scale);
        }
    }

    Ok(())
}
