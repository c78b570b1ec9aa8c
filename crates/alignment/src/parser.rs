use crate::types::{CharacterAlignment, GapSegment, Segment, WordSegment};

/// Maximum silence between two characters that still belong to one word.
///
/// Synthesis providers emit per-character timing at roughly 10–50 ms
/// granularity; anything above 100 ms of silence is a word boundary even
/// without an explicit space character.
const INTRA_WORD_GAP_SECS: f64 = 0.1;

/// Minimum silence between two emitted segments that warrants a gap segment.
/// Keeps sub-perceptible pauses (timing jitter) out of the output.
const MIN_GAP_SECS: f64 = 0.01;

/// Parse a character alignment into word and gap segments, hiding audio-tag
/// characters (the common case).
pub fn parse_alignment(alignment: &CharacterAlignment) -> Vec<Segment> {
    parse_alignment_with(alignment, true)
}

/// Parse a character alignment into an ordered segment sequence.
///
/// Greedy single pass, no backtracking. Characters merge into a word while the
/// next character is not a literal space and starts within
/// [`INTRA_WORD_GAP_SECS`] of the running word end. A gap segment is emitted
/// between two segments when the silence between them exceeds
/// [`MIN_GAP_SECS`]; no gap is ever emitted before the first word, even when
/// it starts late.
///
/// With `hide_audio_tags`, whitespace-only characters are skipped outright —
/// they emit nothing and do not reset word-building state.
///
/// Missing timestamps resolve through a fallback chain (explicit start, else
/// previous character's end, else 0; inside a word, else the running word
/// end). Long unaligned stretches therefore collapse onto one timestamp —
/// the parser trusts its input and does not validate ordering.
pub fn parse_alignment_with(alignment: &CharacterAlignment, hide_audio_tags: bool) -> Vec<Segment> {
    let characters = &alignment.characters;
    let starts = &alignment.character_start_times_seconds;
    let ends = &alignment.character_end_times_seconds;

    let time_at = |v: &[Option<f64>], i: usize| v.get(i).copied().flatten();

    let mut segments: Vec<Segment> = Vec::new();
    let mut segment_index = 0;

    let mut i = 0;
    while i < characters.len() {
        let char = &characters[i];
        let start_time = time_at(starts, i)
            .or_else(|| i.checked_sub(1).and_then(|p| time_at(ends, p)))
            .unwrap_or(0.0);
        let end_time = time_at(ends, i).unwrap_or(start_time);

        if hide_audio_tags && char.trim().is_empty() {
            i += 1;
            continue;
        }

        let mut word_text = char.clone();
        let word_start = start_time;
        let mut word_end = end_time;
        let mut j = i + 1;

        while j < characters.len() {
            let next_char = &characters[j];
            let next_start = time_at(starts, j)
                .or_else(|| j.checked_sub(1).and_then(|p| time_at(ends, p)))
                .unwrap_or(word_end);
            let next_end = time_at(ends, j).unwrap_or(next_start);

            // A literal space or a real silence terminates the word. The
            // boundary character is re-examined by the outer loop.
            if next_char == " " || next_start - word_end > INTRA_WORD_GAP_SECS {
                break;
            }

            word_text.push_str(next_char);
            word_end = next_end;
            j += 1;
        }

        if let Some(last) = segments.last() {
            let silence = word_start - last.end();
            if silence > MIN_GAP_SECS {
                segments.push(Segment::Gap(GapSegment {
                    text: " ".to_string(),
                    start: last.end(),
                    end: word_start,
                    segment_index,
                }));
                segment_index += 1;
            }
        }

        segments.push(Segment::Word(WordSegment {
            text: word_text.trim().to_string(),
            start: word_start,
            end: word_end,
            segment_index,
        }));
        segment_index += 1;

        i = j;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(chars: &[(&str, Option<f64>, Option<f64>)]) -> CharacterAlignment {
        CharacterAlignment {
            characters: chars.iter().map(|&(c, _, _)| c.to_string()).collect(),
            character_start_times_seconds: chars.iter().map(|&(_, s, _)| s).collect(),
            character_end_times_seconds: chars.iter().map(|&(_, _, e)| e).collect(),
        }
    }

    fn timed(chars: &[(&str, f64, f64)]) -> CharacterAlignment {
        let full: Vec<_> = chars
            .iter()
            .map(|&(c, s, e)| (c, Some(s), Some(e)))
            .collect();
        alignment(&full)
    }

    fn assert_invariants(segments: &[Segment]) {
        for (expected, segment) in segments.iter().enumerate() {
            assert_eq!(
                segment.segment_index(),
                expected,
                "indices must be contiguous in emission order"
            );
            assert!(
                segment.start() <= segment.end(),
                "start must not exceed end: {segment:?}"
            );
        }

        assert!(
            segments.windows(2).all(|w| w[0].start() <= w[1].start()),
            "segments must be in non-decreasing start order"
        );

        if let Some(first) = segments.first() {
            assert!(first.is_word(), "no leading gap before the first word");
        }
    }

    #[test]
    fn empty_alignment_yields_no_segments() {
        assert!(parse_alignment(&CharacterAlignment::default()).is_empty());
    }

    #[test]
    fn space_and_timing_gap_produce_one_gap_segment() {
        let segments = parse_alignment(&timed(&[
            ("a", 0.0, 0.05),
            ("b", 0.05, 0.1),
            (" ", 0.12, 0.12),
            ("c", 0.22, 0.27),
        ]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[0],
            Segment::Word(WordSegment {
                text: "ab".into(),
                start: 0.0,
                end: 0.1,
                segment_index: 0,
            })
        );
        assert_eq!(
            segments[1],
            Segment::Gap(GapSegment {
                text: " ".into(),
                start: 0.1,
                end: 0.22,
                segment_index: 1,
            })
        );
        assert_eq!(
            segments[2],
            Segment::Word(WordSegment {
                text: "c".into(),
                start: 0.22,
                end: 0.27,
                segment_index: 2,
            })
        );
    }

    #[test]
    fn timing_gap_splits_words_without_a_space() {
        let segments = parse_alignment(&timed(&[("a", 0.0, 0.05), ("b", 0.2, 0.25)]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text(), "a");
        assert!(!segments[1].is_word());
        assert_eq!(segments[1].start(), 0.05);
        assert_eq!(segments[1].end(), 0.2);
        assert_eq!(segments[2].text(), "b");
    }

    #[test]
    fn no_leading_gap_when_first_word_starts_late() {
        let segments = parse_alignment(&timed(&[("h", 1.5, 1.55), ("i", 1.55, 1.6)]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "hi");
        assert_eq!(segments[0].start(), 1.5);
    }

    #[test]
    fn sub_threshold_silence_emits_no_gap() {
        let segments = parse_alignment(&timed(&[
            ("a", 0.0, 0.05),
            (" ", 0.05, 0.05),
            ("b", 0.055, 0.1),
        ]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_word));
    }

    #[test]
    fn leading_whitespace_characters_emit_nothing() {
        let segments = parse_alignment(&timed(&[
            ("\n", 0.0, 0.0),
            (" ", 0.0, 0.0),
            ("a", 0.02, 0.07),
        ]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "a");
    }

    #[test]
    fn missing_timestamps_fall_back_to_previous_end() {
        let segments = parse_alignment(&alignment(&[
            ("a", Some(0.0), Some(0.05)),
            ("b", None, Some(0.1)),
            ("c", None, None),
        ]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "abc");
        assert_eq!(segments[0].start(), 0.0);
        assert_eq!(segments[0].end(), 0.1);
    }

    #[test]
    fn fully_unaligned_input_collapses_to_time_zero() {
        let segments = parse_alignment(&alignment(&[("g", None, None), ("o", None, None)]));

        assert_invariants(&segments);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start(), 0.0);
        assert_eq!(segments[0].end(), 0.0);
    }

    #[test]
    fn provider_json_parses_with_sparse_timestamps() {
        let alignment: CharacterAlignment = serde_json::from_str(
            r#"{
                "characters": ["o", "k", " ", "!"],
                "characterStartTimesSeconds": [0.0, 0.04, null, 0.3],
                "characterEndTimesSeconds": [0.04, 0.08, null, 0.35]
            }"#,
        )
        .unwrap();

        let segments = parse_alignment(&alignment);
        assert_invariants(&segments);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text(), "ok");
        assert_eq!(segments[2].text(), "!");
    }

    #[test]
    fn contiguous_sentence_round_trips() {
        // " hi yo" spelled out with tight per-character timing.
        let segments = parse_alignment(&timed(&[
            ("h", 0.0, 0.08),
            ("i", 0.08, 0.16),
            (" ", 0.16, 0.16),
            ("y", 0.18, 0.26),
            ("o", 0.26, 0.34),
        ]));

        assert_invariants(&segments);
        let texts: Vec<_> = segments.iter().map(Segment::text).collect();
        assert_eq!(texts, ["hi", " ", "yo"]);
    }
}
