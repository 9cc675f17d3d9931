#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entropy source rejected {attempts} consecutive draws for max {max}")]
    EntropyExhausted { max: u64, attempts: u32 },
}
