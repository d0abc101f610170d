use anyhow::Context;
use clap::{Parser, Subcommand};
use relm4::prelude::*;
use std::path::PathBuf;
use vitrine::config;
use vitrine::gui::app::{AppInit, AppModel};
use vitrine::sys::runtime;

#[derive(Parser)]
#[command(version, about = "Animated portfolio showcase")]
struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in configuration to the config path and exit
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if let Some(Commands::InitConfig) = cli.command {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    let runtime = runtime::start_background_services(tx.clone(), config_path.clone())
        .context("failed to start background runtime")?;

    // GTK must not see our own flags
    let app = RelmApp::new("org.vitrine.showcase").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        tx,
        rx,
        handle: runtime.handle().clone(),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_config_with_explicit_path() {
        let cli = Cli::try_parse_from(["vitrine", "--config", "/tmp/v.toml", "init-config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/v.toml")));
        assert!(matches!(cli.command, Some(Commands::InitConfig)));
    }
}
