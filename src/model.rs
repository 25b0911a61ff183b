//! Contracts for the classifier and model persistence collaborators.
//!
//! Feature extraction, training, and serialization happen outside this crate;
//! these traits pin down the interfaces the corpus pipeline expects at its
//! edges.

use crate::error::ModelError;
use crate::types::Label;

/// Default location for the serialized trained pipeline.
pub const DEFAULT_MODEL_PATH: &str = "models/phishing_model.bin";

/// A classification result for one input text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class.
    pub label: Label,
    /// Confidence in the predicted class, in `[0, 1]`.
    pub confidence: f64,
}

/// A trained text classifier.
pub trait TextClassifier {
    /// Classify a single raw text.
    fn predict(&self, text: &str) -> Prediction;

    /// Classify an email given separate subject and body.
    ///
    /// Joins the two with a single space, matching how the email validator
    /// builds training text, so inference sees the same shape as training.
    fn predict_email(&self, subject: &str, body: &str) -> Prediction {
        self.predict(&format!("{subject} {body}"))
    }
}

/// Persistence for a trained model.
pub trait ModelStore {
    /// The model type this store persists.
    type Model;

    /// Serialize a trained model.
    fn save(&self, model: &Self::Model) -> Result<(), ModelError>;

    /// Load the previously saved model.
    ///
    /// A missing saved model must surface as [`ModelError::NotTrained`], not
    /// a generic I/O failure, so callers can tell the user to train first.
    fn load(&self) -> Result<Self::Model, ModelError>;
}
