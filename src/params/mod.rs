/// Immutable render configuration and presets.
pub mod model;
/// Persisted key/value parameter files.
pub mod source;
