//! Frame sources.
//!
//! The scorer pulls frames one at a time and never seeks. Any container
//! decoding happens outside this crate; [`RawVideoSource`] consumes packed
//! RGB24 frames such as those produced by
//! `ffmpeg -i clip.mov -f rawvideo -pix_fmt rgb24 -`.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use smiletrack_common::error::{SmiletrackError, SmiletrackResult};

use crate::frame::{frame_len, Frame};

/// A forward-only stream of frames.
pub trait FrameSource {
    /// Nominal frames per second, if the source knows it.
    fn frame_rate(&self) -> Option<f64>;

    /// The next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> SmiletrackResult<Option<Frame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn frame_rate(&self) -> Option<f64> {
        (**self).frame_rate()
    }

    fn next_frame(&mut self) -> SmiletrackResult<Option<Frame>> {
        (**self).next_frame()
    }
}

/// Largest frame [`RawVideoSource`] accepts, in pixels (8K UHD).
pub const MAX_FRAME_PIXELS: u64 = 7680 * 4320;

/// Packed RGB24 frames of a fixed size read back to back.
pub struct RawVideoSource<R> {
    reader: R,
    width: u32,
    height: u32,
    fps: f64,
    frames_read: u64,
}

impl RawVideoSource<BufReader<File>> {
    /// Open a raw RGB24 file.
    pub fn open(path: &Path, width: u32, height: u32, fps: f64) -> SmiletrackResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SmiletrackError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => SmiletrackError::video_source(format!(
                "Failed to open {}: {e}",
                path.display()
            )),
        })?;
        Self::new(BufReader::new(file), width, height, fps)
    }
}

impl<R: Read> RawVideoSource<R> {
    pub fn new(reader: R, width: u32, height: u32, fps: f64) -> SmiletrackResult<Self> {
        if width == 0 || height == 0 {
            return Err(SmiletrackError::video_source(format!(
                "Invalid frame size {width}x{height}"
            )));
        }
        if u64::from(width) * u64::from(height) > MAX_FRAME_PIXELS {
            return Err(SmiletrackError::video_source(format!(
                "Frame size {width}x{height} exceeds the {MAX_FRAME_PIXELS}-pixel limit"
            )));
        }
        Ok(Self {
            reader,
            width,
            height,
            fps,
            frames_read: 0,
        })
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Fill `buf` completely, returning the number of bytes actually read
    /// when the stream ends early.
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> FrameSource for RawVideoSource<R> {
    fn frame_rate(&self) -> Option<f64> {
        Some(self.fps)
    }

    fn next_frame(&mut self) -> SmiletrackResult<Option<Frame>> {
        let mut buf = vec![0u8; frame_len(self.width, self.height)];
        let filled = self.fill(&mut buf).map_err(|e| {
            SmiletrackError::video_source(format!(
                "Failed to read frame {}: {e}",
                self.frames_read
            ))
        })?;

        if filled < buf.len() {
            if filled > 0 {
                tracing::debug!(
                    bytes = filled,
                    frames_read = self.frames_read,
                    "Dropping truncated trailing frame"
                );
            }
            return Ok(None);
        }

        self.frames_read += 1;
        Frame::new(self.width, self.height, buf).map(Some)
    }
}

/// A clip of identical blank frames, for dry runs and tests.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    fps: Option<f64>,
    remaining: u64,
    width: u32,
    height: u32,
}

impl SyntheticSource {
    pub fn new(fps: Option<f64>, frames: u64, width: u32, height: u32) -> Self {
        Self {
            fps,
            remaining: frames,
            width,
            height,
        }
    }

    /// `secs` seconds of 2x2 frames at `fps`.
    pub fn seconds(fps: f64, secs: u64) -> Self {
        Self::new(Some(fps), (fps.max(0.0) as u64) * secs, 2, 2)
    }
}

impl FrameSource for SyntheticSource {
    fn frame_rate(&self) -> Option<f64> {
        self.fps
    }

    fn next_frame(&mut self) -> SmiletrackResult<Option<Frame>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(Frame::blank(self.width, self.height)))
    }
}
