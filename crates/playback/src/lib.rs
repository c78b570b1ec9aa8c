pub mod player;
pub mod resource;
pub mod sim;

pub use player::{NoopDelegate, PlaybackFrame, PlayerDelegate, PlayerState, TranscriptPlayer};
pub use resource::{Error, PlaybackResource, ResourceEvent};
pub use sim::SimulatedResource;
