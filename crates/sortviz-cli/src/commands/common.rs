//! Shared CLI helpers used across multiple commands.

use clap::Args;
use sortviz_config::{Settings, default_settings_path};
use sortviz_core::Waveform;
use std::path::PathBuf;

/// Settings file selection plus per-field overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay per operation in milliseconds (0-500)
    #[arg(short, long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Number of bars (10-100)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Sorter id (see `sortviz sorters`)
    #[arg(long)]
    pub sorter: Option<String>,

    /// Generator seed for a reproducible array
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tone shape for reads (sine, square, triangle, sawtooth)
    #[arg(long, value_name = "SHAPE")]
    pub read_waveform: Option<Waveform>,

    /// Tone shape for writes (sine, square, triangle, sawtooth)
    #[arg(long, value_name = "SHAPE")]
    pub write_waveform: Option<Waveform>,
}

impl SettingsArgs {
    /// Path of the settings file in effect.
    pub fn path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_settings_path)
    }

    /// Load the settings file, apply overrides and validate the result.
    pub fn resolve(&self) -> anyhow::Result<Settings> {
        let path = self.path();
        let settings = Settings::load_or_default(&path)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        self.apply(settings)
    }

    /// Apply the overrides to `settings` and validate the result.
    pub fn apply(&self, mut settings: Settings) -> anyhow::Result<Settings> {
        if let Some(delay) = self.delay {
            settings.delay_ms = delay;
        }
        if let Some(size) = self.size {
            settings.array_size = size;
        }
        if let Some(sorter) = &self.sorter {
            settings.sorter.clone_from(sorter);
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(shape) = self.read_waveform {
            settings.read_waveform = shape;
        }
        if let Some(shape) = self.write_waveform {
            settings.write_waveform = shape;
        }

        settings.validate()?;
        Ok(settings)
    }
}
