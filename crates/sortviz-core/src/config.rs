//! Live configuration read by the engine.
//!
//! The delay is read fresh on every pause, so a user moving a slider in the
//! middle of a run affects the very next operation.

use crate::port::Waveform;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::time::Duration;

/// Source of the per-operation delay and tone shapes.
pub trait ConfigSource: Send + Sync {
    /// Current full-operation delay.
    fn delay(&self) -> Duration;

    /// Tone shape for reads.
    fn read_waveform(&self) -> Waveform {
        Waveform::Sine
    }

    /// Tone shape for writes.
    fn write_waveform(&self) -> Waveform {
        Waveform::Sawtooth
    }
}

/// Lock-free [`ConfigSource`] shared between a control surface and the
/// sort thread.
///
/// The control side calls the setters, the sort thread calls the getters.
#[derive(Debug)]
pub struct SharedConfig {
    delay_micros: AtomicU64,
    read_waveform: AtomicU8,
    write_waveform: AtomicU8,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(30))
    }
}

impl SharedConfig {
    /// Create a config with the given delay and default tone shapes.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_micros: AtomicU64::new(duration_to_micros(delay)),
            read_waveform: AtomicU8::new(Waveform::Sine.to_u8()),
            write_waveform: AtomicU8::new(Waveform::Sawtooth.to_u8()),
        }
    }

    /// Builder-style tone shape selection.
    pub fn with_waveforms(self, read: Waveform, write: Waveform) -> Self {
        self.set_read_waveform(read);
        self.set_write_waveform(write);
        self
    }

    /// Change the delay; takes effect at the next pause.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_micros
            .store(duration_to_micros(delay), Ordering::Release);
    }

    /// Change the read tone shape.
    pub fn set_read_waveform(&self, shape: Waveform) {
        self.read_waveform.store(shape.to_u8(), Ordering::Release);
    }

    /// Change the write tone shape.
    pub fn set_write_waveform(&self, shape: Waveform) {
        self.write_waveform.store(shape.to_u8(), Ordering::Release);
    }
}

impl ConfigSource for SharedConfig {
    fn delay(&self) -> Duration {
        Duration::from_micros(self.delay_micros.load(Ordering::Acquire))
    }

    fn read_waveform(&self) -> Waveform {
        Waveform::from_u8(self.read_waveform.load(Ordering::Acquire))
    }

    fn write_waveform(&self) -> Waveform {
        Waveform::from_u8(self.write_waveform.load(Ordering::Acquire))
    }
}

fn duration_to_micros(delay: Duration) -> u64 {
    u64::try_from(delay.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_panel_defaults() {
        let config = SharedConfig::default();
        assert_eq!(config.delay(), Duration::from_millis(30));
        assert_eq!(config.read_waveform(), Waveform::Sine);
        assert_eq!(config.write_waveform(), Waveform::Sawtooth);
    }

    #[test]
    fn setters_are_visible_through_trait() {
        let config = SharedConfig::new(Duration::ZERO)
            .with_waveforms(Waveform::Triangle, Waveform::Square);
        config.set_delay(Duration::from_millis(125));

        let source: &dyn ConfigSource = &config;
        assert_eq!(source.delay(), Duration::from_millis(125));
        assert_eq!(source.read_waveform(), Waveform::Triangle);
        assert_eq!(source.write_waveform(), Waveform::Square);
    }
}
