//! Sortviz Core - observable array engine for sorting visualization
//!
//! This crate turns an in-memory array into an instrumented, animatable,
//! cancellable sequence of atomic operations. Sorting algorithms drive the
//! engine through a small vocabulary of operations and never see the
//! renderer, the clock or the sound output.
//!
//! # Core Abstractions
//!
//! ## Engine
//!
//! - [`ObservableArray`] - The single gateway for array access
//! - [`OperationContext`] - Capabilities handed to one command body
//! - [`Stats`] / [`StatsHandle`] - Operation counters shared with monitors
//!
//! ## Collaborator Ports
//!
//! - [`Visualizer`] - Owns the array contents and highlight styles
//! - [`AudioPlayer`] - Plays a tone per read/write
//! - [`ConfigSource`] - Per-operation delay and tone shapes, read live
//! - [`AbortSignal`] - Cooperative cancellation token for one run
//!
//! ## Sorter Protocol
//!
//! - [`Sorter`] - Strategy trait implemented by each algorithm
//! - [`VariableTrace`] - Live-rendered bag of named scratch variables
//! - [`run_sorter`] - Runs a sorter and classifies the outcome
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use sortviz_core::{CompareOp, MemoryVisualizer, ObservableArray, SharedConfig, Silence};
//!
//! let config = Arc::new(SharedConfig::new(Duration::ZERO));
//! let mut array = ObservableArray::new(
//!     Box::new(MemoryVisualizer::new(vec![3, 1, 2])),
//!     Box::new(Silence),
//!     config,
//! );
//!
//! if array.compare(0, CompareOp::Gt, 1).unwrap() {
//!     array.swap(0, 1).unwrap();
//! }
//!
//! assert_eq!(array.visualizer().snapshot().unwrap(), vec![1, 3, 2]);
//! assert_eq!(array.stats().comparisons, 1);
//! assert_eq!(array.stats().swaps, 1);
//! ```
//!
//! # Design Principles
//!
//! - **One choke point**: every read and write is counted, sounded, paced
//!   and cancellable because the engine is the only way to reach the array
//! - **Object-safe traits**: ports and sorters are used as trait objects so
//!   a registry can pick an algorithm by name at runtime
//! - **Cooperative cancellation**: the abort signal is polled at every
//!   read, write and pause; nothing is rolled back

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod memory;
pub mod port;
pub mod signal;
pub mod sorter;
pub mod stats;
pub mod trace;

pub use compare::CompareOp;
pub use config::{ConfigSource, SharedConfig};
pub use engine::{ObservableArray, OperationContext};
pub use error::{ParseOperatorError, ParseWaveformError, PortError, SortError};
pub use memory::MemoryVisualizer;
pub use port::{AudioPlayer, Silence, StyleKind, Value, Visualizer, Waveform};
pub use signal::AbortSignal;
pub use sorter::{SortOutcome, Sorter, run_sorter};
pub use stats::{Stats, StatsHandle};
pub use trace::{NullRenderer, TraceRenderer, TraceValue, VariableTrace};
