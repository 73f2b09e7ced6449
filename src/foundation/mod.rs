/// Small shared value types (canvas size, fps, frame indices).
pub mod core;
/// Error taxonomy shared by every stage of a run.
pub mod error;
