/// How window sums are computed. Both methods give identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SmoothMethod {
    /// Sum every pixel of every window. Cost grows with `radius^2`.
    #[default]
    Direct,
    /// Build a per-channel integral image once, then read each window sum
    /// from four table entries.
    SummedArea,
}

impl SmoothMethod {
    pub fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::SummedArea => "summed-area",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothConfig {
    /// Number of worker threads, and of row bands per call. Must be >= 1.
    pub workers: usize,
    pub method: SmoothMethod,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            method: SmoothMethod::Direct,
        }
    }
}
