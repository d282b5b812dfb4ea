use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("The label of the task {label:?} contains a NUL byte")]
    InvalidLabel { label: String },
    #[error("Can't spawn a thread for the task {label}: {source}")]
    Spawn {
        label: String,
        #[source]
        source: io::Error,
    },
}
