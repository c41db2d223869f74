use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Llm: {}", .0)]
    Llm(#[from] serene_core::llm::LlmError),

    #[error("Profile: {}", .0)]
    Profile(#[from] serene_core::profile::ProfileError),
}
