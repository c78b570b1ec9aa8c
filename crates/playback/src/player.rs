use dispatch_alignment::{
    CharacterAlignment, Identity, Segment, SegmentComposer, WordSegment, parse_alignment_with,
};

use crate::resource::{PlaybackResource, ResourceEvent};

/// Where the player sits in its resource lifecycle.
///
/// `Ended` is terminal until the caller seeks or replays; the `Ended` event
/// also resets `current_time` to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub enum PlayerState {
    Unbound,
    Idle,
    Playing,
    Ended,
}

/// Synchronous callbacks invoked on the corresponding state transition.
///
/// All methods default to no-ops — implement only what the host cares about.
pub trait PlayerDelegate {
    fn on_play(&self) {}
    fn on_pause(&self) {}
    fn on_time_update(&self, _seconds: f64) {}
    fn on_ended(&self) {}
    fn on_duration_change(&self, _seconds: f64) {}
}

pub struct NoopDelegate;

impl PlayerDelegate for NoopDelegate {}

/// Complete snapshot of playback state at a point in time.
///
/// This is the rendering contract: everything a UI needs to draw one karaoke
/// frame — the full segment sequence, the spoken/unspoken partition, the
/// highlighted word, and the transport state.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct PlaybackFrame {
    pub segments: Vec<Segment>,
    pub spoken: Vec<Segment>,
    pub unspoken: Vec<Segment>,
    pub current_word: Option<WordSegment>,
    pub current_time: f64,
    pub duration: f64,
    pub is_playing: bool,
    pub is_scrubbing: bool,
}

/// Time-driven playback tracker for a parsed transcript.
///
/// Owns at most one [`PlaybackResource`] (`bind`/`unbind`). Commands go to the
/// resource; the host event loop feeds the resource's events back through
/// [`handle_event`](Self::handle_event). Derived state (current word,
/// spoken/unspoken partition) is recomputed as a single step after every
/// mutation, never incrementally.
///
/// Two tracker instances must not share one resource.
pub struct TranscriptPlayer<R: PlaybackResource> {
    resource: Option<R>,
    segments: Vec<Segment>,
    state: PlayerState,
    current_time: f64,
    duration: f64,
    is_scrubbing: bool,
    delegate: Box<dyn PlayerDelegate>,

    current_word: Option<WordSegment>,
    spoken: Vec<Segment>,
    unspoken: Vec<Segment>,
}

impl<R: PlaybackResource> TranscriptPlayer<R> {
    pub fn new(alignment: &CharacterAlignment) -> Self {
        Self::with_config(alignment, true, Identity)
    }

    /// Parse `alignment`, run the composer once over the result, and start
    /// unbound.
    pub fn with_config(
        alignment: &CharacterAlignment,
        hide_audio_tags: bool,
        composer: impl SegmentComposer,
    ) -> Self {
        let segments = composer.compose(parse_alignment_with(alignment, hide_audio_tags));

        let mut player = Self {
            resource: None,
            segments,
            state: PlayerState::Unbound,
            current_time: 0.0,
            duration: 0.0,
            is_scrubbing: false,
            delegate: Box::new(NoopDelegate),
            current_word: None,
            spoken: Vec::new(),
            unspoken: Vec::new(),
        };
        player.recompute();
        player
    }

    pub fn with_delegate(mut self, delegate: impl PlayerDelegate + 'static) -> Self {
        self.delegate = Box::new(delegate);
        self
    }

    // ── Resource lifecycle ──────────────────────────────────────────────────

    pub fn bind(&mut self, resource: R) {
        tracing::debug!("binding playback resource");
        self.resource = Some(resource);
        self.state = PlayerState::Idle;
        self.recompute();
    }

    /// Release the bound resource. Events arriving afterwards are ignored.
    pub fn unbind(&mut self) -> Option<R> {
        tracing::debug!("unbinding playback resource");
        self.state = PlayerState::Unbound;
        self.resource.take()
    }

    /// Handle to the bound resource, for hosts that drive the element
    /// directly (the moral equivalent of the exposed `audioRef`).
    pub fn resource_mut(&mut self) -> Option<&mut R> {
        self.resource.as_mut()
    }

    // ── Event ingestion ─────────────────────────────────────────────────────

    /// Feed one resource event. All playback state mutation happens here or
    /// in the direct caller operations — there is no polling.
    pub fn handle_event(&mut self, event: ResourceEvent) {
        if self.resource.is_none() {
            tracing::debug!(?event, "dropping event: no resource bound");
            return;
        }

        match event {
            ResourceEvent::TimeUpdate(seconds) => {
                // While the scrub handle moves, live position updates must
                // not flicker the highlight; seek_to_time still applies.
                if self.is_scrubbing {
                    return;
                }
                self.current_time = seconds;
                self.delegate.on_time_update(seconds);
            }
            ResourceEvent::DurationChange(seconds) => {
                if !seconds.is_finite() || seconds <= 0.0 {
                    return;
                }
                self.duration = seconds;
                self.delegate.on_duration_change(seconds);
            }
            ResourceEvent::Play => {
                self.state = PlayerState::Playing;
                self.delegate.on_play();
            }
            ResourceEvent::Pause => {
                self.state = PlayerState::Idle;
                self.delegate.on_pause();
            }
            ResourceEvent::Ended => {
                self.state = PlayerState::Ended;
                self.current_time = 0.0;
                self.delegate.on_ended();
            }
        }

        self.recompute();
    }

    // ── Caller operations ───────────────────────────────────────────────────

    /// Ask the resource to start playback. Rejection (autoplay policy and
    /// friends) is logged and swallowed; the state only moves to `Playing`
    /// when the resource confirms with a [`ResourceEvent::Play`].
    pub async fn play(&mut self) {
        let Some(resource) = self.resource.as_mut() else {
            tracing::debug!("play: no resource bound");
            return;
        };

        if let Err(error) = resource.play().await {
            tracing::warn!(%error, "audio backend rejected play");
        }
    }

    pub fn pause(&mut self) {
        let Some(resource) = self.resource.as_mut() else {
            tracing::debug!("pause: no resource bound");
            return;
        };
        resource.pause();
    }

    /// Clamp `seconds` into `[0, duration]` and move both the resource and
    /// the tracked position immediately, independent of play state. Until the
    /// duration is known it defaults to 0, so every positive seek clamps to 0.
    pub fn seek_to_time(&mut self, seconds: f64) {
        let Some(resource) = self.resource.as_mut() else {
            tracing::debug!("seek: no resource bound");
            return;
        };

        let clamped = seconds.clamp(0.0, self.duration);
        resource.set_position(clamped);
        self.current_time = clamped;
        if self.state == PlayerState::Ended {
            self.state = PlayerState::Idle;
        }
        self.recompute();
    }

    pub fn start_scrubbing(&mut self) {
        self.is_scrubbing = true;
        self.recompute();
    }

    pub fn end_scrubbing(&mut self) {
        self.is_scrubbing = false;
        self.recompute();
    }

    // ── Derived state ───────────────────────────────────────────────────────

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn spoken_segments(&self) -> &[Segment] {
        &self.spoken
    }

    pub fn unspoken_segments(&self) -> &[Segment] {
        &self.unspoken
    }

    pub fn current_word(&self) -> Option<&WordSegment> {
        self.current_word.as_ref()
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.is_scrubbing
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns the complete snapshot needed to render the current frame.
    pub fn frame(&self) -> PlaybackFrame {
        PlaybackFrame {
            segments: self.segments.clone(),
            spoken: self.spoken.clone(),
            unspoken: self.unspoken.clone(),
            current_word: self.current_word.clone(),
            current_time: self.current_time,
            duration: self.duration,
            is_playing: self.is_playing(),
            is_scrubbing: self.is_scrubbing,
        }
    }

    /// One recompute step, run after every state mutation. Pure function of
    /// `(segments, current_time, is_scrubbing)`.
    fn recompute(&mut self) {
        self.current_word =
            current_word_at(&self.segments, self.current_time, self.is_scrubbing).cloned();
        let (spoken, unspoken) = partition(
            &self.segments,
            self.current_word.as_ref(),
            self.current_time,
            self.is_scrubbing,
        );
        self.spoken = spoken;
        self.unspoken = unspoken;
    }
}

/// First word whose `[start, end)` interval contains `t`; frozen at `None`
/// while scrubbing.
fn current_word_at(segments: &[Segment], t: f64, scrubbing: bool) -> Option<&WordSegment> {
    if scrubbing {
        return None;
    }

    segments
        .iter()
        .filter_map(Segment::as_word)
        .find(|word| t >= word.start && t < word.end)
}

fn partition(
    segments: &[Segment],
    current_word: Option<&WordSegment>,
    t: f64,
    scrubbing: bool,
) -> (Vec<Segment>, Vec<Segment>) {
    if scrubbing {
        let spoken = segments.iter().filter(|s| s.end() <= t).cloned().collect();
        let unspoken = segments.iter().filter(|s| s.start() > t).cloned().collect();
        return (spoken, unspoken);
    }

    if let Some(word) = current_word {
        // The current word sits in neither partition.
        if let Some(index) = segments.iter().position(|s| s.as_word() == Some(word)) {
            return (segments[..index].to_vec(), segments[index + 1..].to_vec());
        }
    }

    match segments.last() {
        Some(last) if t >= last.end() => (segments.to_vec(), Vec::new()),
        _ => (Vec::new(), segments.to_vec()),
    }
}
