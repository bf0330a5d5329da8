//! Count smiling shots in a video.

use std::path::PathBuf;

use smiletrack_common::config::AppConfig;
use smiletrack_model::{BadgeTone, ShotReport};
use smiletrack_scorer::classifier::{RandomClassifier, ReplayClassifier};
use smiletrack_scorer::source::RawVideoSource;
use smiletrack_scorer::{EmotionClassifier, FaceRegion, ScorerConfig, ShotScorer};

use crate::ClassifierKind;

pub struct ScoreArgs {
    pub video: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub classifier: ClassifierKind,
    pub labels: Option<PathBuf>,
    pub seed: Option<u64>,
    pub face: Option<FaceRegion>,
    pub report: Option<PathBuf>,
}

pub fn run(config: &AppConfig, args: ScoreArgs) -> anyhow::Result<()> {
    println!("Analyzing video at: {}", args.video.display());

    let mut source = RawVideoSource::open(&args.video, args.width, args.height, args.fps)
        .map_err(|e| anyhow::anyhow!("Failed to open video: {e}"))?;

    let mut classifier: Box<dyn EmotionClassifier> = match args.classifier {
        ClassifierKind::Random => match args.seed {
            Some(seed) => Box::new(RandomClassifier::seeded(seed)),
            None => Box::new(RandomClassifier::new()),
        },
        ClassifierKind::Replay => {
            let path = args
                .labels
                .ok_or_else(|| anyhow::anyhow!("--labels is required for the replay classifier"))?;
            Box::new(
                ReplayClassifier::open(&path)
                    .map_err(|e| anyhow::anyhow!("Failed to load labels: {e}"))?,
            )
        }
    };

    let scorer_config = ScorerConfig {
        face_region: args.face,
        ..ScorerConfig::from(&config.scorer)
    };
    println!(
        "  {}x{} @ {}fps, {}s shots, classifier: {:?}",
        args.width, args.height, args.fps, scorer_config.window_secs, args.classifier
    );
    println!("  Running smile & shot detection...");

    tracing::debug!(
        video = %args.video.display(),
        fps = args.fps,
        window_secs = scorer_config.window_secs,
        max_frames = scorer_config.max_frames,
        "Scoring video"
    );
    let scorer = ShotScorer::new(scorer_config);
    let report = scorer
        .analyze(&mut source, &mut classifier)
        .map_err(|e| anyhow::anyhow!("Analysis failed: {e}"))?;

    tracing::info!(
        shots = report.len(),
        smiles = report.smile_count(),
        "Scoring complete"
    );
    print_report(&report);

    if let Some(path) = args.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write report {}: {e}", path.display()))?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}

fn print_report(report: &ShotReport) {
    println!();
    println!("📊 Smile & Shot Summary");
    println!("  Smiling Shots: {}", report.summary());
    println!();

    if report.is_empty() {
        println!("  No complete shot windows in this video.");
    } else {
        println!("  {:>4}  {:<4}  {:<5}  {}", "Shot", "Made", "Smile", "Time");
        for shot in report.shots() {
            println!(
                "  {:>4}  {:<4}  {:<5}  {}",
                shot.shot_number,
                yes_no(shot.shot_made),
                yes_no(shot.smile_detected),
                shot.timestamp
            );
        }
    }

    println!();
    println!("🏅 Badges Earned");
    for badge in report.badges() {
        let tag = match badge.tone() {
            BadgeTone::Success => "[OK]",
            BadgeTone::Info => "[INFO]",
            BadgeTone::Warning => "[WARN]",
        };
        println!("  {tag} {}", badge.message());
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
