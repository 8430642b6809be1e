//! The fixed chain of path stages
//!
//! Order matters and never changes: subdivide, linearize, simplify, round
//! corners, twist, roughen. A stage whose parameter is off is left out of
//! the chain entirely.

use crate::{
    corners::RoundCorners,
    distort::{Roughen, Twist},
    flatten::Linearize,
    simplify::Simplify,
    subdivide::Subdivide,
};
use sumi_core::{params::is_enabled, Path, PathStage, Seed, StyleParameters};

/// An ordered list of stages applied to every stroke
///
/// ```
/// use sumi_core::{Path, Seed, StyleParameters};
/// use sumi_transform::TransformPipeline;
///
/// let params = StyleParameters {
///     corner_radius: 2.0,
///     ..StyleParameters::default()
/// };
/// let pipeline = TransformPipeline::from_params(&params);
/// assert_eq!(pipeline.stage_names(), vec!["round-corners"]);
///
/// let mut path = Path::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((10.0, 0.0));
/// path.line_to((10.0, 10.0));
/// let rounded = pipeline.apply(&path, Seed::default());
/// assert_eq!(rounded.to_string(), "M0 0 L8 0 Q10 0 10 2 L10 10");
/// ```
#[derive(Default)]
pub struct TransformPipeline {
    stages: Vec<Box<dyn PathStage>>,
}

impl TransformPipeline {
    /// Start building a custom chain
    pub fn builder() -> TransformPipelineBuilder {
        TransformPipelineBuilder::new()
    }

    /// The standard chain for a parameter set
    pub fn from_params(params: &StyleParameters) -> Self {
        let mut builder = Self::builder();
        if params.add_points > 0 {
            builder = builder.stage(Box::new(Subdivide {
                passes: params.add_points,
            }));
        }
        if params.linearize_segments > 0 {
            builder = builder.stage(Box::new(Linearize {
                segments: params.linearize_segments,
            }));
        }
        if is_enabled(params.simplify_tolerance) {
            builder = builder.stage(Box::new(Simplify {
                tolerance: params.simplify_tolerance,
            }));
        }
        if is_enabled(params.corner_radius) {
            builder = builder.stage(Box::new(RoundCorners {
                radius: params.corner_radius,
            }));
        }
        if is_enabled(params.twist_amount) {
            builder = builder.stage(Box::new(Twist {
                amount: params.twist_amount,
            }));
        }
        if is_enabled(params.roughen_amount) {
            builder = builder.stage(Box::new(Roughen {
                amount: params.roughen_amount,
            }));
        }
        builder.build()
    }

    /// Run every stage in order
    pub fn apply(&self, path: &Path, seed: Seed) -> Path {
        let mut current = path.clone();
        for stage in &self.stages {
            log::debug!("Executing stage: {}", stage.name());
            current = stage.apply(&current, seed);
        }
        current
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }
}

/// Builder for [`TransformPipeline`]
#[derive(Default)]
pub struct TransformPipelineBuilder {
    stages: Vec<Box<dyn PathStage>>,
}

impl TransformPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage to the end of the chain
    pub fn stage(mut self, stage: Box<dyn PathStage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(self) -> TransformPipeline {
        TransformPipeline {
            stages: self.stages,
        }
    }
}

/// Apply the standard chain for `params` to one path
pub fn apply_transforms(path: &Path, params: &StyleParameters, seed: Seed) -> Path {
    TransformPipeline::from_params(params).apply(path, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{corners::round_corners, distort::twist, simplify::simplify, subdivide::subdivide};

    fn bent_line() -> Path {
        let mut path = Path::new();
        path.move_to((10.0, 10.0));
        path.line_to((60.0, 12.0));
        path.line_to((90.0, 80.0));
        path
    }

    #[test]
    fn test_default_params_build_empty_chain() {
        let pipeline = TransformPipeline::from_params(&StyleParameters::default());
        assert!(pipeline.is_empty());
        let path = bent_line();
        assert_eq!(pipeline.apply(&path, Seed::new(9)), path);
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let params = StyleParameters {
            add_points: 1,
            linearize_segments: 8,
            simplify_tolerance: 1.0,
            corner_radius: 2.0,
            twist_amount: 3.0,
            roughen_amount: 4.0,
            ..StyleParameters::default()
        };
        let pipeline = TransformPipeline::from_params(&params);
        assert_eq!(
            pipeline.stage_names(),
            vec!["subdivide", "linearize", "simplify", "round-corners", "twist", "roughen"]
        );
    }

    #[test]
    fn test_chain_matches_manual_composition() {
        let params = StyleParameters {
            add_points: 2,
            simplify_tolerance: 0.5,
            corner_radius: 3.0,
            twist_amount: 6.0,
            ..StyleParameters::default()
        };
        let seed = Seed::new(1234);
        let path = bent_line();
        let manual = twist(
            &round_corners(&simplify(&subdivide(&path, 2), 0.5), 3.0),
            6.0,
            seed,
        );
        assert_eq!(apply_transforms(&path, &params, seed), manual);
    }

    #[test]
    fn test_builder_accepts_custom_stages() {
        let pipeline = TransformPipeline::builder()
            .stage(Box::new(Twist { amount: 1.0 }))
            .stage(Box::new(Subdivide { passes: 1 }))
            .build();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.stage_names(), vec!["twist", "subdivide"]);
    }
}
