use clap::Parser;
use tracing::debug;

use bipagem::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand, ReportCommand};
use bipagem::adapter::inbound::cli::output::{self, OutputConfig};
use bipagem::adapter::inbound::cli::{config, load_config, paths, report};
use bipagem::error::Result;

fn run(cli: Cli) -> Result<()> {
    let config_arg = match &cli.command {
        Commands::Report(ReportCommand::Show(args) | ReportCommand::Insights(args)) => {
            &args.config
        }
        Commands::Report(ReportCommand::Export(args)) => &args.report.config,
        Commands::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => arg,
    };
    let settings = load_config(config_arg)?;
    settings.init_logging(cli.verbose);
    debug!(command = ?cli.command, "bipagem starting");

    match &cli.command {
        Commands::Report(ReportCommand::Show(args)) => report::handler::execute_show(args, &settings),
        Commands::Report(ReportCommand::Insights(args)) => {
            report::handler::execute_insights(args, &settings)
        }
        Commands::Report(ReportCommand::Export(args)) => {
            report::handler::execute_export(&args.report, args.output.as_deref(), &settings)
        }
        Commands::Config(ConfigCommand::Show(arg)) => {
            let path = paths::config_or_default(arg.config.as_deref());
            config::execute_show(&settings, &path)
        }
        Commands::Config(ConfigCommand::Validate(arg)) => {
            let path = paths::config_or_default(arg.config.as_deref());
            config::execute_validate(&settings, &path)
        }
    }
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
