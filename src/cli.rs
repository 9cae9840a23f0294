use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "gns3tui")]
#[command(about = "A terminal dashboard for GNS3 server projects", version)]
#[command(after_help = "EXAMPLES:
    gns3tui --server 172.30.4.21:3080      Open the dashboard
    gns3tui projects                       List projects
    gns3tui project rename <ID> \"Lab 2\"    Rename a project
    gns3tui project delete <ID>            Delete a project")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// GNS3 server address (host:port); overrides GNS3_SERVER and the config file
    #[arg(long, short, global = true)]
    pub server: Option<String>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Tui,
    /// List projects
    #[command(after_help = "EXAMPLES:
    gns3tui projects
    gns3tui projects --json")]
    Projects,
    /// Manage a single project
    #[command(after_help = "EXAMPLES:
    gns3tui project show <ID>
    gns3tui project rename <ID> \"New name\"
    gns3tui project duplicate <ID> \"Copy of lab\"
    gns3tui project delete <ID> --yes")]
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Show the server version
    Version,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gns3tui completions bash > ~/.bash_completion.d/gns3tui
    gns3tui completions zsh > ~/.zfunc/_gns3tui")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show project details
    Show {
        /// Project ID
        id: String,
    },
    /// Delete a project
    Delete(DeleteArgs),
    /// Rename a project
    Rename(NameArgs),
    /// Duplicate a project under a new name
    Duplicate(NameArgs),
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Project ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args)]
pub struct NameArgs {
    /// Project ID
    pub id: String,

    /// New project name
    pub name: String,
}
