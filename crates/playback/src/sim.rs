use std::collections::VecDeque;

use crate::resource::{Error, PlaybackResource, ResourceEvent};

/// Deterministic, clock-advanced stand-in for a real audio element.
///
/// Fires the same events a browser `<audio>` would, into a queue the host
/// drains with [`drain_events`](Self::drain_events): a `DurationChange` on
/// creation (metadata), a `TimeUpdate` per [`advance`](Self::advance) tick and
/// per seek, and an `Ended` when the position reaches the duration.
///
/// Used by the karaoke demo and the playback tests; a production host would
/// implement [`PlaybackResource`] over its platform audio element instead.
pub struct SimulatedResource {
    position: f64,
    duration: f64,
    playing: bool,
    reject_play: bool,
    queue: VecDeque<ResourceEvent>,
}

impl SimulatedResource {
    pub fn new(duration: f64) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(ResourceEvent::DurationChange(duration));
        Self {
            position: 0.0,
            duration,
            playing: false,
            reject_play: false,
            queue,
        }
    }

    /// A resource whose `play` always fails, modelling a blocked autoplay
    /// policy.
    pub fn rejecting(duration: f64) -> Self {
        Self {
            reject_play: true,
            ..Self::new(duration)
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Move the simulated clock forward while playing. No-op while paused.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }

        self.position = (self.position + dt).min(self.duration);
        self.queue.push_back(ResourceEvent::TimeUpdate(self.position));

        if self.position >= self.duration {
            self.playing = false;
            self.queue.push_back(ResourceEvent::Ended);
        }
    }

    pub fn drain_events(&mut self) -> Vec<ResourceEvent> {
        self.queue.drain(..).collect()
    }
}

impl PlaybackResource for SimulatedResource {
    async fn play(&mut self) -> Result<(), Error> {
        if self.reject_play {
            return Err(Error::PlaybackRejected("autoplay blocked".to_string()));
        }

        if !self.playing {
            self.playing = true;
            self.queue.push_back(ResourceEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.queue.push_back(ResourceEvent::Pause);
        }
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        self.queue.push_back(ResourceEvent::TimeUpdate(self.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_metadata_then_play_then_time_updates() {
        let mut sim = SimulatedResource::new(1.0);
        sim.play().await.unwrap();
        sim.advance(0.5);

        assert_eq!(
            sim.drain_events(),
            [
                ResourceEvent::DurationChange(1.0),
                ResourceEvent::Play,
                ResourceEvent::TimeUpdate(0.5),
            ]
        );
    }

    #[tokio::test]
    async fn ends_exactly_once_at_the_duration_bound() {
        let mut sim = SimulatedResource::new(1.0);
        sim.play().await.unwrap();
        sim.drain_events();

        sim.advance(0.6);
        sim.advance(0.6);
        sim.advance(0.6); // paused after Ended; no-op

        assert_eq!(
            sim.drain_events(),
            [
                ResourceEvent::TimeUpdate(0.6),
                ResourceEvent::TimeUpdate(1.0),
                ResourceEvent::Ended,
            ]
        );
        assert!(!sim.is_playing());
    }

    #[tokio::test]
    async fn pause_only_fires_while_playing() {
        let mut sim = SimulatedResource::new(1.0);
        sim.pause();
        assert_eq!(sim.drain_events(), [ResourceEvent::DurationChange(1.0)]);

        sim.play().await.unwrap();
        sim.pause();
        let events = sim.drain_events();
        assert_eq!(events.last(), Some(&ResourceEvent::Pause));
    }

    #[test]
    fn seeks_clamp_to_the_media_bounds() {
        let mut sim = SimulatedResource::new(1.0);
        sim.set_position(4.0);
        assert_eq!(sim.position(), 1.0);
        sim.set_position(-1.0);
        assert_eq!(sim.position(), 0.0);
    }
}
