use crate::types::Segment;

/// Caller-supplied transform applied once to the parser output before any
/// playback state is derived from it.
///
/// The core assumes composers are deterministic but enforces nothing beyond
/// the signature. A composer is trusted to keep the sequence invariants
/// (contiguous indices, non-decreasing start order) — reindex if you drop or
/// merge segments.
pub trait SegmentComposer: Send + Sync {
    fn compose(&self, segments: Vec<Segment>) -> Vec<Segment>;
}

/// Pass-through. This is the default — the parser output is used as-is.
pub struct Identity;

impl SegmentComposer for Identity {
    fn compose(&self, segments: Vec<Segment>) -> Vec<Segment> {
        segments
    }
}

/// Drop gap segments shorter than `max_secs` and reindex the remainder.
///
/// Useful for renderers that only want to visualise real pauses and let
/// short silences ride on the neighbouring words.
pub struct CollapseGaps {
    pub max_secs: f64,
}

impl SegmentComposer for CollapseGaps {
    fn compose(&self, segments: Vec<Segment>) -> Vec<Segment> {
        let mut composed: Vec<Segment> = segments
            .into_iter()
            .filter(|s| s.is_word() || s.end() - s.start() >= self.max_secs)
            .collect();

        for (index, segment) in composed.iter_mut().enumerate() {
            match segment {
                Segment::Word(w) => w.segment_index = index,
                Segment::Gap(g) => g.segment_index = index,
            }
        }

        composed
    }
}

impl<F> SegmentComposer for F
where
    F: Fn(Vec<Segment>) -> Vec<Segment> + Send + Sync,
{
    fn compose(&self, segments: Vec<Segment>) -> Vec<Segment> {
        self(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_alignment;
    use crate::types::CharacterAlignment;

    fn segments() -> Vec<Segment> {
        let alignment = CharacterAlignment {
            characters: ["a", " ", "b", " ", "c"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            character_start_times_seconds: [0.0, 0.05, 0.07, 0.12, 0.62]
                .iter()
                .map(|&s| Some(s))
                .collect(),
            character_end_times_seconds: [0.05, 0.05, 0.1, 0.12, 0.67]
                .iter()
                .map(|&e| Some(e))
                .collect(),
        };
        parse_alignment(&alignment)
    }

    #[test]
    fn identity_is_a_pass_through() {
        let original = segments();
        assert_eq!(Identity.compose(original.clone()), original);
    }

    #[test]
    fn collapse_gaps_drops_short_gaps_and_reindexes() {
        let composed = CollapseGaps { max_secs: 0.1 }.compose(segments());

        // The 0.02s gap between "a" and "b" is gone; the 0.52s one stays.
        let texts: Vec<_> = composed.iter().map(Segment::text).collect();
        assert_eq!(texts, ["a", "b", " ", "c"]);
        for (expected, segment) in composed.iter().enumerate() {
            assert_eq!(segment.segment_index(), expected);
        }
    }

    #[test]
    fn closures_compose_without_a_wrapper_type() {
        let reverse_is_still_a_composer = |mut segments: Vec<Segment>| {
            segments.reverse();
            segments
        };
        let composed = reverse_is_still_a_composer.compose(segments());
        assert_eq!(composed.len(), segments().len());
        assert_eq!(composed.first().map(Segment::text), Some("c"));
        assert_eq!(composed.last().map(Segment::text), Some("a"));
    }
}
