use std::io::{self, Write};

use crate::config::Config;
use crate::error::Result;
use crate::types::ServerAddr;

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("GNS3 TUI Configuration");
    println!("======================\n");

    let default = ServerAddr::default();
    print!("Enter the address and port of the GNS3 server [{default}]: ");
    io::stdout().flush()?;

    let mut server = String::new();
    io::stdin().read_line(&mut server)?;
    let server = server.trim();

    let server: ServerAddr = if server.is_empty() {
        default
    } else {
        server.parse()?
    };

    let config = Config {
        server: Some(server),
        timeout_secs: None,
    };
    let path = config.save()?;

    println!("\nConfig saved to {}", path.display());
    println!("Run 'gns3tui' to open the dashboard.");

    Ok(())
}
