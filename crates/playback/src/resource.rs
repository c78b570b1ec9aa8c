#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("audio backend failure: {0}")]
    Backend(String),
}

/// Event fired by the bound audio resource, delivered into
/// [`crate::player::TranscriptPlayer::handle_event`] by the host event loop.
///
/// A `loadedmetadata`-style notification maps onto `DurationChange`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceEvent {
    Play,
    Pause,
    TimeUpdate(f64),
    DurationChange(f64),
    Ended,
}

/// Seam to a renderable audio element.
///
/// Commands flow through this trait; confirmations flow back as
/// [`ResourceEvent`]s through the host event loop. `play` is the only
/// suspending operation and the only one that can fail — backends are free to
/// reject it (autoplay policies and friends). A successful `play` is only
/// confirmed by a later [`ResourceEvent::Play`].
///
/// There is no cancellation primitive for an in-flight `play`; a concurrent
/// `pause` races at the backend's discretion.
#[allow(async_fn_in_trait)]
pub trait PlaybackResource {
    async fn play(&mut self) -> Result<(), Error>;

    fn pause(&mut self);

    fn set_position(&mut self, seconds: f64);
}
