//! Video-to-shots analysis.
//!
//! # Algorithm
//!
//! 1. **Window size:** `trunc(fps) * window_secs` frames per shot.
//! 2. **Per frame:** crop to the face region (if any), downscale, classify.
//!    A classifier failure counts as "not smiling".
//! 3. **Per window:** strict majority of smiling frames marks the shot as
//!    smiling; the shot is stamped with the current time-of-day.
//! 4. **Stop** at end of stream, after `max_frames` frames, or once
//!    `max_shots` shots exist. A trailing partial window is dropped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smiletrack_common::clock::{SystemClock, WallClock};
use smiletrack_common::config::ScorerDefaults;
use smiletrack_common::error::SmiletrackResult;
use smiletrack_model::{ShotRecord, ShotReport, MAX_SHOTS};

use crate::classifier::EmotionClassifier;
use crate::frame::{FaceRegion, Frame};
use crate::source::FrameSource;
use crate::window::{frames_per_window, ShotWindow};

/// Configuration for the shot scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Length of one shot window in seconds.
    pub window_secs: u32,

    /// Stop reading after this many frames.
    pub max_frames: u64,

    /// Stop after this many shots. Values above 30 are treated as 30.
    pub max_shots: usize,

    /// Downscale frames to `(width, height)` before classification.
    pub resize: Option<(u32, u32)>,

    /// Crop frames to this region before resizing.
    pub face_region: Option<FaceRegion>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::from(&ScorerDefaults::default())
    }
}

impl From<&ScorerDefaults> for ScorerConfig {
    fn from(defaults: &ScorerDefaults) -> Self {
        Self {
            window_secs: defaults.window_secs,
            max_frames: defaults.max_frames,
            max_shots: defaults.max_shots,
            resize: Some((defaults.resize_width, defaults.resize_height)),
            face_region: None,
        }
    }
}

/// Per-run counters, logged when a run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames_read: u64,
    pub smiling_frames: u64,
    pub classifier_failures: u64,
    pub dropped_frames: u64,
}

/// Cuts a frame stream into shots.
pub struct ShotScorer {
    config: ScorerConfig,
    clock: Arc<dyn WallClock>,
}

impl ShotScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_defaults() -> Self {
        Self::new(ScorerConfig::default())
    }

    pub fn with_clock(config: ScorerConfig, clock: Arc<dyn WallClock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score a video and return its report.
    pub fn analyze<S, C>(&self, source: &mut S, classifier: &mut C) -> SmiletrackResult<ShotReport>
    where
        S: FrameSource + ?Sized,
        C: EmotionClassifier + ?Sized,
    {
        let (report, _) = self.analyze_with_stats(source, classifier)?;
        Ok(report)
    }

    /// Score a video, also returning per-run counters.
    pub fn analyze_with_stats<S, C>(
        &self,
        source: &mut S,
        classifier: &mut C,
    ) -> SmiletrackResult<(ShotReport, RunStats)>
    where
        S: FrameSource + ?Sized,
        C: EmotionClassifier + ?Sized,
    {
        let fps = source.frame_rate();
        let window_len = frames_per_window(fps, self.config.window_secs)?;
        let max_shots = self.config.max_shots.min(MAX_SHOTS);

        tracing::info!(
            fps = ?fps,
            frames_per_window = window_len,
            max_frames = self.config.max_frames,
            max_shots,
            "Starting shot analysis"
        );

        let mut window = ShotWindow::new(window_len);
        let mut shots = Vec::new();
        let mut stats = RunStats::default();

        while stats.frames_read < self.config.max_frames && shots.len() < max_shots {
            let Some(frame) = source.next_frame()? else {
                break;
            };
            stats.frames_read += 1;

            let smiling = self.judge(classifier, &frame, stats.frames_read - 1, &mut stats);
            if smiling {
                stats.smiling_frames += 1;
            }

            if let Some(smile_detected) = window.push(smiling) {
                let shot = ShotRecord::new(
                    shots.len() as u32 + 1,
                    smile_detected,
                    self.clock.time_of_day(),
                );
                tracing::debug!(
                    shot = shot.shot_number,
                    smile = shot.smile_detected,
                    "Shot window closed"
                );
                shots.push(shot);
            }
        }

        stats.dropped_frames = window.pending();
        let report = ShotReport::new(shots);

        tracing::info!(
            frames_read = stats.frames_read,
            shots = report.len(),
            smiles = report.smile_count(),
            classifier_failures = stats.classifier_failures,
            dropped_frames = stats.dropped_frames,
            "Shot analysis complete"
        );

        Ok((report, stats))
    }

    fn judge<C>(&self, classifier: &mut C, frame: &Frame, index: u64, stats: &mut RunStats) -> bool
    where
        C: EmotionClassifier + ?Sized,
    {
        let prepared = self.prepare(frame);
        match classifier.classify(&prepared) {
            Ok(emotion) => emotion.is_smiling(),
            Err(e) => {
                stats.classifier_failures += 1;
                tracing::debug!(frame = index, "Classifier failed: {e}");
                false
            }
        }
    }

    fn prepare(&self, frame: &Frame) -> Frame {
        let cropped = match &self.config.face_region {
            Some(region) => frame.crop(region).unwrap_or_else(|| {
                tracing::debug!(?region, "Face region outside frame, using full frame");
                frame.clone()
            }),
            None => frame.clone(),
        };

        match self.config.resize {
            Some((w, h)) => cropped.resize(w, h),
            None => cropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierError, Emotion, ReplayClassifier};
    use crate::source::SyntheticSource;

    fn quick_config() -> ScorerConfig {
        ScorerConfig {
            resize: None,
            ..ScorerConfig::default()
        }
    }

    struct SizeRecorder(Vec<(u32, u32)>);

    impl EmotionClassifier for SizeRecorder {
        fn classify(&mut self, frame: &Frame) -> Result<Emotion, ClassifierError> {
            self.0.push((frame.width(), frame.height()));
            Ok(Emotion::Neutral)
        }
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = ScorerConfig::default();
        assert_eq!(config.window_secs, 5);
        assert_eq!(config.max_frames, 3000);
        assert_eq!(config.max_shots, 30);
        assert_eq!(config.resize, Some((640, 360)));
    }

    #[test]
    fn test_frames_are_cropped_then_resized() {
        let config = ScorerConfig {
            resize: Some((8, 6)),
            face_region: Some(FaceRegion {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            }),
            ..ScorerConfig::default()
        };
        let scorer = ShotScorer::new(config);
        let mut source = SyntheticSource::new(Some(1.0), 2, 4, 4);
        let mut recorder = SizeRecorder(Vec::new());

        scorer.analyze(&mut source, &mut recorder).unwrap();
        assert_eq!(recorder.0, vec![(8, 6), (8, 6)]);
    }

    #[test]
    fn test_crop_only_passes_face() {
        let config = ScorerConfig {
            face_region: Some(FaceRegion {
                x: 1,
                y: 1,
                width: 2,
                height: 3,
            }),
            ..quick_config()
        };
        let scorer = ShotScorer::new(config);
        let mut source = SyntheticSource::new(Some(1.0), 1, 4, 4);
        let mut recorder = SizeRecorder(Vec::new());

        scorer.analyze(&mut source, &mut recorder).unwrap();
        assert_eq!(recorder.0, vec![(2, 3)]);
    }

    #[test]
    fn test_stats_count_failures_and_leftovers() {
        let scorer = ShotScorer::new(quick_config());
        // 1 fps -> 5-frame windows; 7 frames leaves 2 pending.
        let mut source = SyntheticSource::new(Some(1.0), 7, 2, 2);
        let mut classifier = ReplayClassifier::new(vec![
            Some(Emotion::Happy),
            None,
            Some(Emotion::Happy),
            Some(Emotion::Happy),
            None,
        ]);

        let (report, stats) = scorer
            .analyze_with_stats(&mut source, &mut classifier)
            .unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.shots()[0].smile_detected);
        assert_eq!(stats.frames_read, 7);
        assert_eq!(stats.smiling_frames, 3);
        assert_eq!(stats.classifier_failures, 4);
        assert_eq!(stats.dropped_frames, 2);
    }
}
