use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

use gns3tui::cli::{Cli, Commands, ProjectCommands};
use gns3tui::commands;
use gns3tui::config::Config;
use gns3tui::controller::Gns3Controller;
use gns3tui::error::{Gns3Error, Result};
use gns3tui::output;
use gns3tui::tui::{self, App};
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _log_guard = gns3tui::logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/controller
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gns3tui", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run().await?;
        }
        None | Some(Commands::Tui) => {
            let config = Config::load()?;
            let server = config.resolve_server(cli.server.as_deref())?;
            debug!(?server, "starting dashboard");

            let mut app = App::new(config.timeout());
            if let Some(addr) = server {
                app.connect(&addr.to_string()).await;
            }
            tui::run(&mut app).await?;
        }
        // Commands that require a controller
        Some(command) => {
            let config = Config::load()?;
            let addr = config
                .resolve_server(cli.server.as_deref())?
                .ok_or(Gns3Error::NotConnected)?;
            let controller = Gns3Controller::with_timeout(addr, config.timeout())?;

            match command {
                Commands::Projects => {
                    commands::projects::list(&controller).await?;
                }
                Commands::Project { action } => match action {
                    ProjectCommands::Show { id } => {
                        commands::projects::show(&controller, &id).await?;
                    }
                    ProjectCommands::Delete(args) => {
                        commands::projects::delete(&controller, args).await?;
                    }
                    ProjectCommands::Rename(args) => {
                        commands::projects::rename(&controller, args).await?;
                    }
                    ProjectCommands::Duplicate(args) => {
                        commands::projects::duplicate(&controller, args).await?;
                    }
                },
                Commands::Version => {
                    commands::version::show(&controller).await?;
                }
                Commands::Completions { .. } | Commands::Init | Commands::Tui => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
