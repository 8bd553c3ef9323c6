//! Statistical sentiment model: artifact loading, inference, and datasets.

mod artifact;
pub mod dataset;
mod store;

pub use artifact::{
    ARTIFACT_VERSION, ClassifierParams, ModelArtifact, SentimentModel, VectorizerParams,
};
pub use dataset::{LabeledText, load_tsv};
pub use store::{load, load_artifact, save};
