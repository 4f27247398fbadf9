//! Transform pipeline infrastructure
//!
//! The uwu pipeline is an ordered list of stages. Each stage takes the previous
//! stage's output and produces a new string; nothing is mutated in place and no
//! state is kept between runs.
//!
//! # Architecture Overview
//!
//! ## 1. The `Stage` Trait
//!
//! The interface every processing step implements:
//!
//! ```rust,ignore
//! pub trait Stage {
//!     fn name(&self) -> &str;
//!     fn apply(&self, text: &str) -> String;
//! }
//! ```
//!
//! Stages never fail. Edge cases (empty text, matches at the text boundaries)
//! have defined results instead of errors.
//!
//! ## 2. The `Pipeline` Type
//!
//! Stages are chained with [`Pipeline::then`]. Unlike a closure chain, the
//! pipeline keeps its stages as data, so it can be inspected and run stage by
//! stage with [`Pipeline::trace`]:
//!
//! ```rust,ignore
//! let pipeline = Pipeline::new()
//!     .then(Substitution::new("phonemes", PHONEMES))
//!     .then(Literal::new("emoticons", EMOTICONS));
//! ```
//!
//! ## 3. Static Lazy Pipelines
//!
//! The standard pipeline is built once, on first use, as a
//! `once_cell::sync::Lazy` static. See [`standard::UWU`].
//!
//! # Module Organization
//!
//! - [`stages`]: the stage kinds (rule tables, embellishment, literal swaps)
//! - [`standard`]: the pre-built uwu pipeline

pub mod stages;
pub mod standard;

/// A single step of the pipeline.
pub trait Stage {
    /// Short name used in traces and logs.
    fn name(&self) -> &str;

    /// Produce this stage's output for `text`.
    fn apply(&self, text: &str) -> String;
}

/// An ordered sequence of stages.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage + Send + Sync>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage, returning the extended pipeline.
    pub fn then<S>(mut self, stage: S) -> Self
    where
        S: Stage + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage in order.
    pub fn run(&self, text: &str) -> String {
        self.stages.iter().fold(text.to_string(), |text, stage| {
            let output = stage.apply(&text);
            tracing::trace!(stage = stage.name(), len = output.len(), "stage applied");
            output
        })
    }

    /// Run every stage in order, keeping the output of each one.
    pub fn trace(&self, text: &str) -> Vec<(&str, String)> {
        let mut current = text.to_string();
        let mut steps = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            current = stage.apply(&current);
            steps.push((stage.name(), current.clone()));
        }
        steps
    }

    /// Names of the stages, in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}
