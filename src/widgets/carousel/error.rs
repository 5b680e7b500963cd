use thiserror::Error;

/// Errors raised by carousel lifecycle operations.
///
/// Navigation never fails: empty collections and stale handles are no-ops.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("Autoplay needs a running tokio runtime to schedule its timer")]
    NoRuntime,

    #[error("Carousel is already attached")]
    AlreadyAttached,
}
