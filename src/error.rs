/// Errors reported by the engine's fallible operations.
///
/// Every failure is synchronous and recoverable; a failed mutation
/// leaves the simulation state exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid grid dimension {0}")]
    InvalidDimension(i32),
    #[error("coordinate ({x}, {y}) out of bounds for grid of size {size}")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("rule index {0} outside 0..=8")]
    IndexOutOfRange(usize),
    #[error("tick period must be greater than zero")]
    InvalidPeriod,
}
