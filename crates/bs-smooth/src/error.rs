use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmoothError {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(
        "destination is {}x{}, source is {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
