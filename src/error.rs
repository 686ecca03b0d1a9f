use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid table size: {0} (a table needs at least one bucket)")]
    InvalidSize(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
