//! Terminal-side port adapters.
//!
//! The bars are kept in a [`MemoryVisualizer`](sortviz_core::MemoryVisualizer)
//! and drawn as sparklines; tones and traced variables are emitted as
//! tracing events.

use sortviz_core::{AudioPlayer, TraceRenderer, TraceValue, Value, Waveform};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per bar, scaled to `max`.
pub fn sparkline(values: &[Value], max: Value) -> String {
    let max = max.max(1);
    values
        .iter()
        .map(|&v| {
            let level = (u64::from(v.min(max)) * 7 / u64::from(max)) as usize;
            BLOCKS[level]
        })
        .collect()
}

/// Equal-tempered frequency of a tone index, MIDI numbering (69 = A4).
pub fn tone_frequency(tone: u32) -> f32 {
    440.0 * 2f32.powf((tone as f32 - 69.0) / 12.0)
}

/// Audio port that logs each tone at trace level.
#[derive(Debug, Default)]
pub struct ToneLogger {
    played: u64,
}

impl ToneLogger {
    /// Number of tones played so far.
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioPlayer for ToneLogger {
    fn sound(&mut self, tone: u32, shape: Waveform) {
        self.played += 1;
        tracing::trace!(tone, shape = %shape, freq_hz = tone_frequency(tone), "tone");
    }
}

/// Variable panel that logs every update at debug level.
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl TraceRenderer for TracingRenderer {
    fn render(&mut self, name: &str, value: &TraceValue) {
        tracing::debug!(target: "sortviz::vars", %name, %value, "set");
    }

    fn remove(&mut self, name: &str) {
        tracing::debug!(target: "sortviz::vars", %name, "delete");
    }

    fn clear(&mut self) {
        tracing::debug!(target: "sortviz::vars", "clear");
    }
}
