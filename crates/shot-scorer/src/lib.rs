//! SmileTrack Shot Scorer
//!
//! Turns a video into a list of "shots":
//! - **Frames:** RGB24 images, optionally cropped to a face and downscaled
//! - **Sources:** Where frames come from (raw video streams, synthetic clips)
//! - **Classifiers:** Guess the dominant emotion in a frame
//! - **Windows:** Fixed-duration frame groups judged by simple majority
//!
//! A classifier failure never fails a run; it just counts as "not smiling".

pub mod classifier;
pub mod frame;
pub mod scorer;
pub mod source;
pub mod window;

pub use classifier::{ClassifierError, Emotion, EmotionClassifier};
pub use frame::{FaceRegion, Frame};
pub use scorer::{ScorerConfig, ShotScorer};
pub use source::FrameSource;
