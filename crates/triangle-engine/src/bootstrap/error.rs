/// Missing precondition that ends the bootstrap early.
///
/// The `Display` text is the message written to the error log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Abort {
    #[error("Failed to get GPU adapter")]
    NoAdapter,

    #[error("Need a browser that supports WebGPU")]
    NoDevice,

    #[error("Canvas element with id '{0}' not found")]
    CanvasNotFound(String),

    #[error("Failed to get WebGPU context")]
    NoContext,
}
