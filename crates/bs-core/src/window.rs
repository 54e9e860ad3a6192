use core::ops::Range;

/// Indices covered by a window of half-width `radius` centred on `center`,
/// clipped to `0..len`.
///
/// The window shrinks at the borders; it is never padded. For `len > 0` and
/// `center < len` the result is non-empty and always contains `center`.
pub fn clipped_range(center: usize, radius: usize, len: usize) -> Range<usize> {
    let start = center.saturating_sub(radius);
    let end = center.saturating_add(radius).saturating_add(1).min(len);
    start..end
}

/// Rectangular neighborhood of one pixel after border clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub cols: Range<usize>,
    pub rows: Range<usize>,
}

impl Window {
    pub fn around(x: usize, y: usize, radius: usize, width: usize, height: usize) -> Self {
        Self {
            cols: clipped_range(x, radius, width),
            rows: clipped_range(y, radius, height),
        }
    }

    /// Number of pixels inside the window.
    pub fn count(&self) -> usize {
        self.cols.len() * self.rows.len()
    }
}
