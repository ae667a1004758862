//! Collaborator ports consumed by the engine.
//!
//! The renderer and the sound output live outside this crate. The engine
//! only needs the narrow contracts below, so tests can satisfy them with
//! in-memory fakes.

use crate::error::{ParseWaveformError, PortError};
use std::fmt;
use std::str::FromStr;

/// Element type of the visualized array.
pub type Value = u32;

/// Highlight applied to a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// First operand of a comparison.
    CompareA,
    /// Second operand of a comparison.
    CompareB,
    /// First cell of a swap.
    SwapA,
    /// Second cell of a swap.
    SwapB,
    /// Plain read.
    Read,
    /// Plain write.
    Write,
}

impl StyleKind {
    /// All style kinds.
    pub const ALL: [StyleKind; 6] = [
        StyleKind::CompareA,
        StyleKind::CompareB,
        StyleKind::SwapA,
        StyleKind::SwapB,
        StyleKind::Read,
        StyleKind::Write,
    ];

    /// Class name a DOM or terminal renderer would attach to the bar.
    pub const fn class_name(&self) -> &'static str {
        match self {
            StyleKind::CompareA => "bar-compare-a",
            StyleKind::CompareB => "bar-compare-b",
            StyleKind::SwapA => "bar-swap-a",
            StyleKind::SwapB => "bar-swap-b",
            StyleKind::Read => "bar-read",
            StyleKind::Write => "bar-write",
        }
    }
}

/// Tone shape for the audio port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Waveform {
    /// Pure fundamental.
    #[default]
    Sine,
    /// Odd harmonics, hollow.
    Square,
    /// Odd harmonics, soft.
    Triangle,
    /// All harmonics, bright.
    Sawtooth,
}

impl Waveform {
    /// All waveforms.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }

    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            Waveform::Sine => 0,
            Waveform::Square => 1,
            Waveform::Triangle => 2,
            Waveform::Sawtooth => 3,
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Waveform::Square,
            2 => Waveform::Triangle,
            3 => Waveform::Sawtooth,
            _ => Waveform::Sine,
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Waveform::ALL
            .into_iter()
            .find(|w| w.name() == lower)
            .ok_or_else(|| ParseWaveformError(s.to_string()))
    }
}

/// Owner of the array contents and their on-screen highlighting.
///
/// The engine holds no copy of the values; every access it makes goes
/// through this trait.
pub trait Visualizer: Send {
    /// Current value at `index`.
    fn value(&self, index: usize) -> Result<Value, PortError>;

    /// Replace the value at `index`.
    fn set_value(&mut self, index: usize, value: Value) -> Result<(), PortError>;

    /// Number of cells.
    fn len(&self) -> usize;

    /// True if there are no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highlight one cell.
    fn set_style(&mut self, index: usize, style: StyleKind) -> Result<(), PortError>;

    /// Remove every highlight.
    fn clear_styles(&mut self) -> Result<(), PortError>;

    /// Replace the whole array with `values`.
    fn rebuild(&mut self, values: &[Value]);

    /// Copy of the current contents, bypassing the engine's counters.
    ///
    /// For controllers and tests inspecting the array between runs.
    fn snapshot(&self) -> Result<Vec<Value>, PortError> {
        (0..self.len()).map(|i| self.value(i)).collect()
    }
}

/// Sound output keyed by tone index and shape. Fire-and-forget.
pub trait AudioPlayer: Send {
    /// Play one short tone.
    fn sound(&mut self, tone: u32, shape: Waveform);
}

/// Audio port that discards every tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl AudioPlayer for Silence {
    fn sound(&mut self, _tone: u32, _shape: Waveform) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_parse_is_case_insensitive() {
        assert_eq!("Sawtooth".parse::<Waveform>(), Ok(Waveform::Sawtooth));
        assert_eq!(" square ".parse::<Waveform>(), Ok(Waveform::Square));
        assert!("noise".parse::<Waveform>().is_err());
    }

    #[test]
    fn waveform_raw_roundtrip_covers_all() {
        for w in Waveform::ALL {
            assert_eq!(Waveform::from_u8(w.to_u8()), w);
        }
    }

    #[test]
    fn style_class_names_are_unique() {
        let mut names: Vec<_> = StyleKind::ALL.iter().map(StyleKind::class_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleKind::ALL.len());
    }
}
