//! Keyframe lookup.

/// Binary search over a flat keyframe buffer.
///
/// `frames` holds tuples of `stride` floats whose first element is the
/// keyframe time. Returns the element offset of the first keyframe whose time
/// is strictly greater than `time`, i.e. the right keyframe of the segment
/// containing `time`. A keyframe exactly at `time` is therefore the *left*
/// end of the returned segment.
///
/// The caller guarantees at least two keyframes and
/// `first_time <= time < last_time`; timelines handle the before-first and
/// at-or-after-last cases themselves.
#[inline]
#[must_use]
pub fn locate_frame(frames: &[f32], time: f32, stride: usize) -> usize {
    let frame_count = frames.len() / stride;
    debug_assert!(frame_count >= 2, "locate_frame needs at least two keyframes");

    let mut low = 1;
    let mut high = frame_count - 1;
    while low < high {
        let mid = (low + high) / 2;
        if frames[mid * stride] <= time {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low * stride
}
