//! Sumi Transform: the geometric stages between parsing and drawing
//!
//! Every stage is a pure function from one [`sumi_core::Path`] to the next,
//! with a matching [`sumi_core::PathStage`] wrapper for the chain:
//!
//! - [`subdivide`] - Halve every segment, shape unchanged
//! - [`flatten`] - Sample curves into straight lines
//! - [`simplify`] - Douglas-Peucker keypoints refit as cubics
//! - [`round_corners`] - Quadratic fillets where two lines meet
//! - [`twist`] / [`roughen`] - Seeded hand-drawn distortion
//!
//! [`TransformPipeline`] runs them in their fixed order.

pub mod corners;
pub mod distort;
pub mod flatten;
pub mod pipeline;
pub mod simplify;
pub mod subdivide;

pub use corners::{corner_fillet, round_corners, Fillet, RoundCorners};
pub use distort::{jitter, roughen, twist, JitterStream, Roughen, Twist};
pub use flatten::{cubic_point, flatten, quad_point, Linearize};
pub use pipeline::{apply_transforms, TransformPipeline, TransformPipelineBuilder};
pub use simplify::{fit_cubic, keypoint_indices, perpendicular_distance, simplify, Simplify};
pub use subdivide::{split_cubic, split_quad, subdivide, Subdivide};

#[cfg(test)]
mod proptests;
