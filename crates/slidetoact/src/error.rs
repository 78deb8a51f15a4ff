/// Rejected configuration or layout.
///
/// Raised only at construction and on layout. Invalid state transitions
/// such as resetting a slider that never completed are silent no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlideToActError {
    #[error("completion threshold must be within (0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("start window ({low}, {high}) px contains no position")]
    EmptyStartWindow { low: i32, high: i32 },

    #[error("{name} must be a finite, non-negative size, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("display density must be positive, got {0}")]
    InvalidDensity(f32),

    #[error("track {width}x{height} px is invalid: height must not exceed width")]
    InvalidTrack { width: i32, height: i32 },
}
