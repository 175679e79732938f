//! Error type shared by every imgproc operation.

#[derive(Debug, thiserror::Error)]
pub enum ImgprocError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("image is empty (zero width or height)")]
    EmptyImage,
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImgprocError>;
