use thiserror::Error;

/// Color axis named in step-count errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Hue,
    Saturation,
    Value,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Hue => write!(f, "hue"),
            Axis::Saturation => write!(f, "saturation"),
            Axis::Value => write!(f, "value"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Invalid step count {steps} on {axis} axis")]
    InvalidStepCount { axis: Axis, steps: u32 },

    #[error("Input out of range: {0}")]
    OutOfRangeInput(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Writer unavailable for {target}: {source}")]
    WriterUnavailable {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaletteError {
    /// Rewraps an I/O failure as the writer-level condition for `target`.
    ///
    /// Non-I/O errors pass through unchanged.
    pub fn into_writer_unavailable(self, target: impl Into<String>) -> Self {
        match self {
            PaletteError::Io(source) => PaletteError::WriterUnavailable {
                target: target.into(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;
