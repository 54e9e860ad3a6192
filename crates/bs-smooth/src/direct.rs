use bs_core::{Bgr8, ImageView, Window};

use crate::mean::{accumulate, mean_pixel};

/// Writes the smoothed pixels of row `y` into `out`, summing every window
/// pixel.
pub(crate) fn smooth_row(src: &ImageView<'_, Bgr8>, y: usize, radius: usize, out: &mut [Bgr8]) {
    debug_assert_eq!(out.len(), src.width());

    for (x, out_px) in out.iter_mut().enumerate() {
        let win = Window::around(x, y, radius, src.width(), src.height());
        let mut sum = [0u64; 3];
        for wy in win.rows.clone() {
            for &px in &src.row(wy)[win.cols.clone()] {
                accumulate(&mut sum, px);
            }
        }
        *out_px = mean_pixel(sum, win.count());
    }
}

#[cfg(test)]
mod tests {
    use bs_core::{Bgr8, Image};

    use super::smooth_row;

    #[test]
    fn first_row_of_3x3_uses_clipped_windows() {
        let data = (0..9u8).map(|v| Bgr8::splat(v * 10)).collect();
        let img = Image::from_vec(3, 3, data).expect("valid image");
        let mut out = vec![Bgr8::default(); 3];

        smooth_row(&img.as_view(), 0, 1, &mut out);

        // (0+10+30+40)/4 = 20, (0+10+20+30+40+50)/6 = 25, (10+20+40+50)/4 = 30
        assert_eq!(out, vec![Bgr8::splat(20), Bgr8::splat(25), Bgr8::splat(30)]);
    }
}
