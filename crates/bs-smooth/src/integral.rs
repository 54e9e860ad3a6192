use bs_core::{Bgr8, ImageView, Window};

use crate::mean::{accumulate, mean_pixel};

/// Per-channel integral image of a BGR image.
///
/// The table is `(width + 1) x (height + 1)`. Entry `(x, y)` holds the
/// channel sums of all source pixels in columns `< x` and rows `< y`, so
/// row 0 and column 0 are zero.
#[derive(Debug, Clone, Default)]
pub struct SummedArea {
    width: usize,
    height: usize,
    table: Vec<[u64; 3]>,
}

impl SummedArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_view(src: &ImageView<'_, Bgr8>) -> Self {
        let mut sat = Self::new();
        sat.rebuild(src);
        sat
    }

    /// Recomputes the table for `src`, reusing the allocation.
    pub fn rebuild(&mut self, src: &ImageView<'_, Bgr8>) {
        self.width = src.width();
        self.height = src.height();

        let stride = self.width + 1;
        self.table.clear();
        self.table.resize(stride * (self.height + 1), [0; 3]);

        for y in 0..self.height {
            let mut run = [0u64; 3];
            for (x, &px) in src.row(y).iter().enumerate() {
                accumulate(&mut run, px);
                let above = self.table[y * stride + x + 1];
                self.table[(y + 1) * stride + x + 1] =
                    [above[0] + run[0], above[1] + run[1], above[2] + run[2]];
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel sums over `win`, which must lie inside the image.
    pub fn window_sum(&self, win: &Window) -> [u64; 3] {
        let stride = self.width + 1;
        let t00 = self.table[win.rows.start * stride + win.cols.start];
        let t01 = self.table[win.rows.start * stride + win.cols.end];
        let t10 = self.table[win.rows.end * stride + win.cols.start];
        let t11 = self.table[win.rows.end * stride + win.cols.end];

        // Grouped so that no intermediate goes negative.
        core::array::from_fn(|c| (t11[c] + t00[c]) - (t01[c] + t10[c]))
    }
}

/// Writes the smoothed pixels of row `y` into `out` using table lookups.
pub(crate) fn smooth_row(sat: &SummedArea, y: usize, radius: usize, out: &mut [Bgr8]) {
    debug_assert_eq!(out.len(), sat.width());

    for (x, out_px) in out.iter_mut().enumerate() {
        let win = Window::around(x, y, radius, sat.width(), sat.height());
        *out_px = mean_pixel(sat.window_sum(&win), win.count());
    }
}
