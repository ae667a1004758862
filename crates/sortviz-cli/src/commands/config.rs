//! Settings file inspection.

use crate::commands::common::SettingsArgs;
use clap::{Args, Subcommand};
use sortviz_config::Settings;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings (file plus overrides) as TOML
    Show(SettingsArgs),

    /// Print the settings file path
    Path(SettingsArgs),

    /// Write a settings file from the defaults plus any overrides
    Init {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show(settings) => {
            print!("{}", settings.resolve()?.to_toml()?);
        }
        ConfigAction::Path(settings) => {
            println!("{}", settings.path().display());
        }
        ConfigAction::Init { settings, force } => {
            let path = settings.path();
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            settings.apply(Settings::default())?.save(&path)?;
            tracing::info!(path = %path.display(), "wrote settings");
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
