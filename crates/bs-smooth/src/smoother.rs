use bs_core::{Bgr8, Image, ImageView};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::integral::{self, SummedArea};
use crate::{SmoothConfig, SmoothError, SmoothMethod, direct};

/// Smooths `src` on the calling thread with the direct method.
///
/// Reference implementation: [`BoxSmoother`] produces the same bytes for
/// any worker count and method.
pub fn smooth_bgr8(src: &ImageView<'_, Bgr8>, radius: usize) -> Image<Bgr8> {
    let mut dst = Image::new_fill(src.width(), src.height(), Bgr8::default());
    fill_sequential(src, radius, dst.data_mut());
    dst
}

/// Like [`smooth_bgr8`], writing into an existing destination of the same
/// dimensions as `src`.
pub fn smooth_bgr8_into(
    src: &ImageView<'_, Bgr8>,
    radius: usize,
    dst: &mut Image<Bgr8>,
) -> Result<(), SmoothError> {
    check_dims(src, dst)?;
    fill_sequential(src, radius, dst.data_mut());
    Ok(())
}

/// Box smoother with a fixed-size worker pool and reusable scratch.
///
/// Each call splits destination rows into `workers` contiguous bands and
/// hands every band to one worker as an exclusive `&mut` slice. The source
/// is shared read-only for the duration of the call.
#[derive(Debug)]
pub struct BoxSmoother {
    cfg: SmoothConfig,
    pool: ThreadPool,
    sat: SummedArea,
}

impl BoxSmoother {
    pub fn new(cfg: SmoothConfig) -> Result<Self, SmoothError> {
        if cfg.workers == 0 {
            return Err(SmoothError::InvalidWorkerCount);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(cfg.workers)
            .thread_name(|i| format!("bs-smooth-{i}"))
            .build()?;
        debug!(
            workers = cfg.workers,
            method = cfg.method.name(),
            "built smoothing pool"
        );

        Ok(Self {
            cfg,
            pool,
            sat: SummedArea::new(),
        })
    }

    pub fn config(&self) -> &SmoothConfig {
        &self.cfg
    }

    pub fn smooth(&mut self, src: &ImageView<'_, Bgr8>, radius: usize) -> Image<Bgr8> {
        let mut dst = Image::new_fill(src.width(), src.height(), Bgr8::default());
        self.run(src, radius, dst.data_mut());
        dst
    }

    pub fn smooth_into(
        &mut self,
        src: &ImageView<'_, Bgr8>,
        radius: usize,
        dst: &mut Image<Bgr8>,
    ) -> Result<(), SmoothError> {
        check_dims(src, dst)?;
        self.run(src, radius, dst.data_mut());
        Ok(())
    }

    fn run(&mut self, src: &ImageView<'_, Bgr8>, radius: usize, dst: &mut [Bgr8]) {
        let (width, height) = (src.width(), src.height());
        if width == 0 || height == 0 {
            return;
        }

        let rows_per_band = band_rows(height, self.cfg.workers);
        trace!(
            width,
            height,
            radius,
            method = self.cfg.method.name(),
            bands = height.div_ceil(rows_per_band),
            "smoothing"
        );

        match self.cfg.method {
            SmoothMethod::Direct => {
                run_bands(&self.pool, dst, width, rows_per_band, |y, out| {
                    direct::smooth_row(src, y, radius, out)
                });
            }
            SmoothMethod::SummedArea => {
                self.sat.rebuild(src);
                let sat = &self.sat;
                run_bands(&self.pool, dst, width, rows_per_band, |y, out| {
                    integral::smooth_row(sat, y, radius, out)
                });
            }
        }
    }
}

/// Rows per band so that `workers` bands cover `height` rows.
fn band_rows(height: usize, workers: usize) -> usize {
    height.div_ceil(workers).max(1)
}

/// Fork-join over row bands. Returns once every band has been written.
fn run_bands<F>(
    pool: &ThreadPool,
    dst: &mut [Bgr8],
    width: usize,
    rows_per_band: usize,
    row_fn: F,
) where
    F: Fn(usize, &mut [Bgr8]) + Sync,
{
    pool.install(|| {
        dst.par_chunks_mut(rows_per_band * width)
            .enumerate()
            .for_each(|(band, rows)| {
                let y0 = band * rows_per_band;
                for (dy, out_row) in rows.chunks_mut(width).enumerate() {
                    row_fn(y0 + dy, out_row);
                }
            });
    });
}

fn fill_sequential(src: &ImageView<'_, Bgr8>, radius: usize, dst: &mut [Bgr8]) {
    if src.width() == 0 || src.height() == 0 {
        return;
    }
    for (y, out_row) in dst.chunks_mut(src.width()).enumerate() {
        direct::smooth_row(src, y, radius, out_row);
    }
}

fn check_dims(src: &ImageView<'_, Bgr8>, dst: &Image<Bgr8>) -> Result<(), SmoothError> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(SmoothError::DimensionMismatch {
            expected: (src.width(), src.height()),
            actual: (dst.width(), dst.height()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bs_core::{Bgr8, Image};

    use crate::{BoxSmoother, SmoothConfig, SmoothError, SmoothMethod, smooth_bgr8};

    use super::band_rows;

    fn noise(width: usize, height: usize, seed: u32) -> Image<Bgr8> {
        let mut state = seed;
        let mut next = move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        let data = (0..width * height)
            .map(|_| Bgr8::new(next(), next(), next()))
            .collect();
        Image::from_vec(width, height, data).expect("valid image")
    }

    #[test]
    fn band_rows_cover_height() {
        assert_eq!(band_rows(10, 4), 3);
        assert_eq!(band_rows(8, 4), 2);
        assert_eq!(band_rows(3, 8), 1);
        assert_eq!(band_rows(1, 1), 1);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = BoxSmoother::new(SmoothConfig {
            workers: 0,
            ..SmoothConfig::default()
        })
        .expect_err("zero workers");
        assert!(matches!(err, SmoothError::InvalidWorkerCount));
    }

    #[test]
    fn more_workers_than_rows() {
        let img = noise(9, 2, 3);
        let mut smoother = BoxSmoother::new(SmoothConfig {
            workers: 8,
            ..SmoothConfig::default()
        })
        .expect("pool");

        let out = smoother.smooth(&img.as_view(), 1);
        assert_eq!(out, smooth_bgr8(&img.as_view(), 1));
    }

    #[test]
    fn smooth_into_reuses_destination() {
        let img = noise(7, 5, 1);
        let mut smoother = BoxSmoother::new(SmoothConfig::default()).expect("pool");
        let mut dst = Image::new_fill(7, 5, Bgr8::splat(99));

        smoother
            .smooth_into(&img.as_view(), 2, &mut dst)
            .expect("matching dims");
        assert_eq!(dst, smooth_bgr8(&img.as_view(), 2));
    }

    #[test]
    fn smooth_into_rejects_transposed_destination() {
        let img = noise(3, 2, 1);
        let mut smoother = BoxSmoother::new(SmoothConfig::default()).expect("pool");
        let mut dst = Image::new_fill(2, 3, Bgr8::default());

        let err = smoother
            .smooth_into(&img.as_view(), 1, &mut dst)
            .expect_err("dims differ");
        assert!(matches!(
            err,
            SmoothError::DimensionMismatch {
                expected: (3, 2),
                actual: (2, 3)
            }
        ));
    }

    #[test]
    fn empty_image_produces_empty_output() {
        let img: Image<Bgr8> = Image::from_vec(0, 4, Vec::new()).expect("valid empty image");
        let mut smoother = BoxSmoother::new(SmoothConfig::default()).expect("pool");

        let out = smoother.smooth(&img.as_view(), 3);
        assert!(out.is_empty());
        assert_eq!(out.height(), 4);
    }
}
