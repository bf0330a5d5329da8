//! Shot windows: fixed-length runs of frames judged by majority.

use smiletrack_common::error::{SmiletrackError, SmiletrackResult};

/// Frames in one window of `window_secs` at `fps`.
///
/// Fractional frame rates are truncated (29.97 counts as 29). A missing,
/// non-finite, or sub-1 frame rate has no usable window and is rejected, as
/// is one so large that the window length overflows.
pub fn frames_per_window(fps: Option<f64>, window_secs: u32) -> SmiletrackResult<u64> {
    let fps = fps.unwrap_or(0.0);
    if !fps.is_finite() || fps < 1.0 {
        return Err(SmiletrackError::InvalidFrameRate { fps });
    }
    if window_secs == 0 {
        return Err(SmiletrackError::config("window_secs must be at least 1"));
    }
    (fps.trunc() as u64)
        .checked_mul(u64::from(window_secs))
        .ok_or(SmiletrackError::InvalidFrameRate { fps })
}

/// Accumulates per-frame smile judgments until a window fills.
#[derive(Debug)]
pub struct ShotWindow {
    frames_per_window: u64,
    frames: u64,
    smiles: u64,
}

impl ShotWindow {
    pub fn new(frames_per_window: u64) -> Self {
        Self {
            frames_per_window: frames_per_window.max(1),
            frames: 0,
            smiles: 0,
        }
    }

    /// Add one frame's judgment. When this frame completes the window,
    /// returns the window's verdict and starts a fresh window.
    pub fn push(&mut self, smiling: bool) -> Option<bool> {
        self.frames += 1;
        if smiling {
            self.smiles += 1;
        }

        if self.frames < self.frames_per_window {
            return None;
        }

        // Strict majority: an even split is not a smile.
        let verdict = self.smiles * 2 > self.frames;
        self.frames = 0;
        self.smiles = 0;
        Some(verdict)
    }

    /// Frames accumulated in the current, unfinished window.
    pub fn pending(&self) -> u64 {
        self.frames
    }

    pub fn frames_per_window(&self) -> u64 {
        self.frames_per_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_per_window() {
        assert_eq!(frames_per_window(Some(30.0), 5).unwrap(), 150);
        assert_eq!(frames_per_window(Some(29.97), 5).unwrap(), 145);
        assert_eq!(frames_per_window(Some(1.0), 5).unwrap(), 5);
    }

    #[test]
    fn test_unusable_frame_rates_rejected() {
        for fps in [
            None,
            Some(0.0),
            Some(0.5),
            Some(-24.0),
            Some(f64::NAN),
            Some(f64::INFINITY),
            Some(1e19),
            Some(f64::MAX),
        ] {
            let err = frames_per_window(fps, 5).unwrap_err();
            assert!(matches!(err, SmiletrackError::InvalidFrameRate { .. }));
        }
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(frames_per_window(Some(30.0), 0).is_err());
    }

    #[test]
    fn test_window_emits_on_fill() {
        let mut window = ShotWindow::new(3);
        assert_eq!(window.push(true), None);
        assert_eq!(window.push(true), None);
        assert_eq!(window.pending(), 2);
        assert_eq!(window.push(false), Some(true));
        assert_eq!(window.pending(), 0);
    }

    #[test]
    fn test_even_split_is_not_smiling() {
        let mut window = ShotWindow::new(4);
        window.push(true);
        window.push(false);
        window.push(true);
        assert_eq!(window.push(false), Some(false));
    }

    #[test]
    fn test_windows_are_independent() {
        let mut window = ShotWindow::new(2);
        window.push(true);
        assert_eq!(window.push(true), Some(true));
        window.push(false);
        assert_eq!(window.push(false), Some(false));
    }
}
