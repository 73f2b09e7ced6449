/// Frame type and the renderer seam used by the pipeline.
pub mod backend;
/// Parallel multi-frame rendering and encoder hand-off.
pub mod pipeline;
/// Rasterization surface with a native (non-RGB) pixel layout.
pub mod surface;
/// Closed-form spiral synthesizer.
pub mod synth;
