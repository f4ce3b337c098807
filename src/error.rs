//! Error handling for the half-band designer
//!
//! Every failure carries enough context to tell the user what to change.

use thiserror::Error;

/// Result type alias for designer operations
pub type Result<T> = std::result::Result<T, HalfbandError>;

/// Main error type for design, filtering and CLI operations
#[derive(Error, Debug)]
pub enum HalfbandError {
    // Command-line Errors
    #[error("{message}")]
    Usage { message: String },

    #[error("Cannot convert argument {index} ('{value}') to a number: {reason}")]
    Parse {
        index: usize,
        value: String,
        reason: String,
    },

    // Design Errors
    #[error("Transition bandwidth {transition} is outside the open interval (0, 0.5)")]
    Domain { transition: f64 },

    #[error("Stop-band attenuation must be a positive number of dB, got {attenuation}")]
    InvalidAttenuation { attenuation: f64 },

    #[error("Invalid stage count {stage_count}: {reason}")]
    InvalidStageCount { stage_count: usize, reason: String },

    #[error("Numeric failure at stage {stage}: {reason}")]
    Numeric { stage: usize, reason: String },

    #[error("Series for stage {stage} did not converge after {iterations} terms")]
    NonConvergence { stage: usize, iterations: usize },

    // Processing Errors
    #[error("Block size mismatch: {input} input samples for {output} output samples")]
    InvalidBlockSize { input: usize, output: usize },

    #[error("Audio contains no samples")]
    EmptyAudio,

    #[error("Invalid audio layout: {reason}")]
    InvalidAudio { reason: String },

    // I/O Errors
    #[error("Failed to read audio file {path}: {source}")]
    AudioRead {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write audio file {path}: {source}")]
    AudioWrite {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HalfbandError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            HalfbandError::Usage { .. } => "USAGE_ERROR",
            HalfbandError::Parse { .. } => "PARSE_ERROR",
            HalfbandError::Domain { .. } => "DOMAIN_ERROR",
            HalfbandError::InvalidAttenuation { .. } => "INVALID_ATTENUATION",
            HalfbandError::InvalidStageCount { .. } => "INVALID_STAGE_COUNT",
            HalfbandError::Numeric { .. } => "NUMERIC_ERROR",
            HalfbandError::NonConvergence { .. } => "NUMERIC_ERROR",
            HalfbandError::InvalidBlockSize { .. } => "INVALID_BLOCK_SIZE",
            HalfbandError::EmptyAudio => "EMPTY_AUDIO",
            HalfbandError::InvalidAudio { .. } => "INVALID_AUDIO",
            HalfbandError::AudioRead { .. } => "AUDIO_READ_ERROR",
            HalfbandError::AudioWrite { .. } => "AUDIO_WRITE_ERROR",
            HalfbandError::Io(_) => "IO_ERROR",
            HalfbandError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the error was caused by user input rather than the computation
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HalfbandError::Usage { .. }
                | HalfbandError::Parse { .. }
                | HalfbandError::Domain { .. }
                | HalfbandError::InvalidAttenuation { .. }
                | HalfbandError::InvalidStageCount { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            HalfbandError::Usage { .. } => vec![
                "Pass exactly two arguments: the stage count and the transition bandwidth",
                "Run with --help to list the available subcommands",
            ],
            HalfbandError::Parse { .. } => vec![
                "The stage count must be a non-negative integer",
                "The transition bandwidth must be a decimal number such as 0.05",
            ],
            HalfbandError::Domain { .. } => vec![
                "Use a transition bandwidth strictly between 0 and 0.5",
                "Typical values for 2x oversampling are 0.01 to 0.1",
            ],
            HalfbandError::InvalidAttenuation { .. } => vec![
                "Use a positive attenuation such as 96 (dB)",
                "Targets beyond a few hundred dB are below double precision",
            ],
            HalfbandError::InvalidStageCount { .. } => {
                vec!["Use a stage count between 1 and a few dozen"]
            }
            HalfbandError::Numeric { .. } | HalfbandError::NonConvergence { .. } => vec![
                "Try a wider transition bandwidth",
                "Reduce the number of stages",
            ],
            HalfbandError::AudioRead { .. } => vec![
                "Check the file path is correct",
                "Only WAV input is supported",
            ],
            _ => vec![],
        }
    }
}
