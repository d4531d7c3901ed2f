use crate::search::locate_frame;

/// Flat, time-sorted keyframe storage.
///
/// Each keyframe is `STRIDE` consecutive floats: the time followed by
/// `STRIDE - 1` values. Data lives in one contiguous buffer; the stride is a
/// type parameter so the buffer length is always a whole number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<const STRIDE: usize> {
    data: Vec<f32>,
}

impl<const STRIDE: usize> Keyframes<STRIDE> {
    /// Allocates `frame_count` zeroed keyframes, to be filled with
    /// [`set_frame`](Self::set_frame).
    #[must_use]
    pub fn new(frame_count: usize) -> Self {
        Self {
            data: vec![0.0; frame_count * STRIDE],
        }
    }

    /// Wraps an already laid out buffer.
    ///
    /// # Panics
    /// If `data.len()` is not a multiple of `STRIDE`.
    #[must_use]
    pub fn from_raw(data: Vec<f32>) -> Self {
        assert!(
            data.len().is_multiple_of(STRIDE),
            "keyframe buffer of {} floats is not a multiple of stride {STRIDE}",
            data.len()
        );
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.data.len() / STRIDE
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn set_frame(&mut self, index: usize, frame: [f32; STRIDE]) {
        self.data[index * STRIDE..(index + 1) * STRIDE].copy_from_slice(&frame);
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[[f32; STRIDE]] {
        self.data.as_chunks::<STRIDE>().0
    }

    #[inline]
    #[must_use]
    pub fn frame(&self, index: usize) -> &[f32; STRIDE] {
        &self.frames()[index]
    }

    #[inline]
    #[must_use]
    pub fn time(&self, index: usize) -> f32 {
        self.data[index * STRIDE]
    }

    #[inline]
    #[must_use]
    pub fn first_time(&self) -> Option<f32> {
        self.data.first().copied()
    }

    #[inline]
    #[must_use]
    pub fn last_time(&self) -> Option<f32> {
        self.frames().last().map(|frame| frame[0])
    }

    /// The raw buffer.
    #[inline]
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        &self.data
    }

    /// Index of the right keyframe of the segment containing `time`.
    ///
    /// Same preconditions as [`locate_frame`].
    #[inline]
    #[must_use]
    pub fn locate(&self, time: f32) -> usize {
        locate_frame(&self.data, time, STRIDE) / STRIDE
    }

    /// Index of the first keyframe whose time is earlier than its predecessor's.
    #[must_use]
    pub fn first_unsorted(&self) -> Option<usize> {
        self.frames()
            .windows(2)
            .position(|pair| pair[1][0] < pair[0][0])
            .map(|i| i + 1)
    }

    /// Returns `true` if every time and value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
