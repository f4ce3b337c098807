//! Halfband - Polyphase IIR Half-band Filter Designer
//!
//! Designs the allpass coefficients of a two-path polyphase half-band
//! filter and runs them for 2x decimation and interpolation.
//!
//! # Architecture
//!
//! - `design`: elliptic parameters, series accumulation, coefficient formula
//!   and the cascade driver, plus attenuation-based sizing
//! - `dsp`: allpass chain, 2x downsampler and 2x upsampler
//! - `audio`: audio buffers, WAV I/O and whole-file resampling
//! - `cli`: argument parsing and command implementations for the binary
//!
//! ```
//! use halfband::design::design_coefficients;
//!
//! let set = design_coefficients(4, 0.05).unwrap();
//! assert_eq!(set.len(), 4);
//! assert!(set.coefficients().iter().all(|&c| c > 0.0 && c < 1.0));
//! ```

pub mod audio;
pub mod cli;
pub mod design;
pub mod dsp;
pub mod error;

pub use design::{design, design_coefficients, CoefficientSet, DesignRequest};
pub use error::{HalfbandError, Result};
