//! Decoded video frames.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smiletrack_common::error::{SmiletrackError, SmiletrackResult};

/// Bytes per pixel (packed RGB24).
pub const BYTES_PER_PIXEL: usize = 3;

/// A single RGB24 frame, row-major with no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Rectangle (in source pixels) where the subject's face is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> SmiletrackResult<Self> {
        let expected = frame_len(width, height);
        if data.len() != expected {
            return Err(SmiletrackError::video_source(format!(
                "Frame {width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An all-black frame.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; frame_len(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Crop to `region`, clipped to the frame bounds.
    ///
    /// Returns `None` when the region lies entirely outside the frame.
    pub fn crop(&self, region: &FaceRegion) -> Option<Frame> {
        let x0 = region.x.min(self.width);
        let y0 = region.y.min(self.height);
        let x1 = region.x.saturating_add(region.width).min(self.width);
        let y1 = region.y.saturating_add(region.height).min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let (w, h) = (x1 - x0, y1 - y0);
        let row_bytes = w as usize * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(row_bytes * h as usize);
        for y in y0..y1 {
            let start = (y as usize * self.width as usize + x0 as usize) * BYTES_PER_PIXEL;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }

        Some(Frame {
            width: w,
            height: h,
            data,
        })
    }

    /// Nearest-neighbour resize to `width` x `height`.
    pub fn resize(&self, width: u32, height: u32) -> Frame {
        if width == self.width && height == self.height {
            return self.clone();
        }
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return Frame::blank(width, height);
        }

        let mut data = Vec::with_capacity(frame_len(width, height));
        for y in 0..height {
            let sy = (y as u64 * self.height as u64 / height as u64) as usize;
            for x in 0..width {
                let sx = (x as u64 * self.width as u64 / width as u64) as usize;
                let i = (sy * self.width as usize + sx) * BYTES_PER_PIXEL;
                data.extend_from_slice(&self.data[i..i + BYTES_PER_PIXEL]);
            }
        }

        Frame {
            width,
            height,
            data,
        }
    }
}

/// Byte length of a packed RGB24 frame.
pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

impl FromStr for FaceRegion {
    type Err = String;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<u32> = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("invalid face region '{s}': {e}"))?;

        match parts.as_slice() {
            [x, y, width, height] if *width > 0 && *height > 0 => Ok(FaceRegion {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            [_, _, _, _] => Err(format!("face region '{s}' has zero area")),
            _ => Err(format!("face region '{s}' must be x,y,width,height")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x2 frame where each pixel's red channel is its index.
    fn numbered() -> Frame {
        let data = (0..8u8).flat_map(|i| [i, 0, 0]).collect();
        Frame::new(4, 2, data).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(Frame::new(2, 2, vec![0; 11]).is_err());
        assert!(Frame::new(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_crop_inside() {
        let region = FaceRegion {
            x: 1,
            y: 0,
            width: 2,
            height: 2,
        };
        let cropped = numbered().crop(&region).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        assert_eq!(cropped.pixel(0, 0), Some([1, 0, 0]));
        assert_eq!(cropped.pixel(1, 1), Some([6, 0, 0]));
    }

    #[test]
    fn test_crop_clips_to_bounds() {
        let region = FaceRegion {
            x: 3,
            y: 1,
            width: 10,
            height: 10,
        };
        let cropped = numbered().crop(&region).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
        assert_eq!(cropped.pixel(0, 0), Some([7, 0, 0]));
    }

    #[test]
    fn test_crop_outside_is_none() {
        let region = FaceRegion {
            x: 9,
            y: 9,
            width: 2,
            height: 2,
        };
        assert!(numbered().crop(&region).is_none());
    }

    #[test]
    fn test_resize_downscale() {
        let small = numbered().resize(2, 1);
        assert_eq!(small.data().len(), frame_len(2, 1));
        assert_eq!(small.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(small.pixel(1, 0), Some([2, 0, 0]));
    }

    #[test]
    fn test_resize_upscale_repeats_pixels() {
        let big = numbered().resize(8, 4);
        assert_eq!(big.pixel(0, 0), big.pixel(1, 1));
        assert_eq!(big.pixel(7, 3), Some([7, 0, 0]));
    }

    #[test]
    fn test_face_region_parse() {
        let region: FaceRegion = "10, 20,64,48".parse().unwrap();
        assert_eq!(
            region,
            FaceRegion {
                x: 10,
                y: 20,
                width: 64,
                height: 48
            }
        );
        assert!("1,2,3".parse::<FaceRegion>().is_err());
        assert!("1,2,0,3".parse::<FaceRegion>().is_err());
        assert!("a,b,c,d".parse::<FaceRegion>().is_err());
    }
}
