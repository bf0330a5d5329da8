//! Emotion classification.
//!
//! The scorer treats the classifier as a black box: one image in, one
//! dominant emotion (or a failure) out. Only [`Emotion::Happy`] counts as
//! smiling.

use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smiletrack_common::error::{SmiletrackError, SmiletrackResult};

use crate::frame::Frame;

/// Dominant emotion label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
    Other(String),
}

impl Emotion {
    /// Parse a classifier label, ignoring case.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "angry" => Emotion::Angry,
            "disgust" => Emotion::Disgust,
            "fear" => Emotion::Fear,
            "happy" => Emotion::Happy,
            "sad" => Emotion::Sad,
            "surprise" => Emotion::Surprise,
            "neutral" => Emotion::Neutral,
            other => Emotion::Other(other.to_string()),
        }
    }

    pub fn is_smiling(&self) -> bool {
        matches!(self, Emotion::Happy)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::Angry => "angry",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
            Emotion::Other(label) => label.as_str(),
        };
        f.write_str(label)
    }
}

/// Why a frame could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("no face found")]
    NoFace,

    #[error("classifier backend failed: {0}")]
    Backend(String),
}

/// Guesses the dominant emotion in a single image.
pub trait EmotionClassifier {
    fn classify(&mut self, frame: &Frame) -> Result<Emotion, ClassifierError>;
}

impl<C: EmotionClassifier + ?Sized> EmotionClassifier for Box<C> {
    fn classify(&mut self, frame: &Frame) -> Result<Emotion, ClassifierError> {
        (**self).classify(frame)
    }
}

/// Coin-flip classifier for demos: half the frames are "happy".
#[derive(Debug, Clone)]
pub struct RandomClassifier {
    rng: StdRng,
    smile_probability: f64,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            smile_probability: 0.5,
        }
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier for RandomClassifier {
    fn classify(&mut self, _frame: &Frame) -> Result<Emotion, ClassifierError> {
        if self.rng.gen_bool(self.smile_probability) {
            Ok(Emotion::Happy)
        } else {
            Ok(Emotion::Neutral)
        }
    }
}

/// Replays precomputed per-frame labels.
///
/// The label track is JSONL: one JSON string (the dominant emotion) or
/// `null` (no face / failure) per frame. Blank lines and `#` comments are
/// ignored. Frames past the end of the track fail to classify.
#[derive(Debug, Clone, Default)]
pub struct ReplayClassifier {
    labels: VecDeque<Option<Emotion>>,
}

impl ReplayClassifier {
    pub fn new(labels: impl IntoIterator<Item = Option<Emotion>>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn open(path: &Path) -> SmiletrackResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SmiletrackError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => e.into(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> SmiletrackResult<Self> {
        let mut labels = VecDeque::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let label: Option<String> = serde_json::from_str(trimmed).map_err(|e| {
                SmiletrackError::scoring(format!("Bad label on line {}: {e}", line_no + 1))
            })?;
            labels.push_back(label.as_deref().map(Emotion::from_label));
        }
        Ok(Self { labels })
    }

    /// Labels not yet consumed.
    pub fn remaining(&self) -> usize {
        self.labels.len()
    }
}

impl EmotionClassifier for ReplayClassifier {
    fn classify(&mut self, _frame: &Frame) -> Result<Emotion, ClassifierError> {
        match self.labels.pop_front() {
            Some(Some(emotion)) => Ok(emotion),
            Some(None) => Err(ClassifierError::NoFace),
            None => Err(ClassifierError::Backend("label track exhausted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        assert_eq!(Emotion::from_label("HAPPY"), Emotion::Happy);
        assert_eq!(Emotion::from_label(" Happy "), Emotion::Happy);
        assert!(Emotion::from_label("happy").is_smiling());
        assert!(!Emotion::from_label("neutral").is_smiling());
        assert_eq!(
            Emotion::from_label("contempt"),
            Emotion::Other("contempt".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_labels() {
        assert_eq!(Emotion::Surprise.to_string(), "surprise");
        assert_eq!(Emotion::Other("meh".into()).to_string(), "meh");
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let frame = Frame::blank(1, 1);
        let mut a = RandomClassifier::seeded(7);
        let mut b = RandomClassifier::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.classify(&frame), b.classify(&frame));
        }
    }

    #[test]
    fn test_random_yields_both_outcomes() {
        let frame = Frame::blank(1, 1);
        let mut classifier = RandomClassifier::seeded(42);
        let smiles = (0..200)
            .filter(|_| classifier.classify(&frame).unwrap().is_smiling())
            .count();
        assert!(smiles > 0 && smiles < 200);
    }

    #[test]
    fn test_replay_from_reader() {
        let track = "# header\n\"happy\"\nnull\n\n\"Sad\"\n";
        let mut classifier = ReplayClassifier::from_reader(Cursor::new(track)).unwrap();
        let frame = Frame::blank(1, 1);

        assert_eq!(classifier.remaining(), 3);
        assert_eq!(classifier.classify(&frame), Ok(Emotion::Happy));
        assert_eq!(classifier.classify(&frame), Err(ClassifierError::NoFace));
        assert_eq!(classifier.classify(&frame), Ok(Emotion::Sad));
        assert!(matches!(
            classifier.classify(&frame),
            Err(ClassifierError::Backend(_))
        ));
    }

    #[test]
    fn test_replay_rejects_bad_line() {
        let err = ReplayClassifier::from_reader(Cursor::new("\"happy\"\n42\n")).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
