//! Synthesis pipeline, from parameters to the finished stereogram

/// Fetch, synthesize and store as one host-facing operation
pub mod invocation;
/// Random background tiles
pub mod noise;
/// Parameter forms and their validation
pub mod parameters;
/// Left-to-right shift propagation within a row
pub mod propagation;
/// Stereogram synthesizer
pub mod synthesizer;
