//! Canned character alignments, one per scenario — what the synthesis
//! provider would return for a short agent reply. Used by the karaoke demo
//! and the playback tests.

use dispatch_alignment::CharacterAlignment;

use crate::catalog::UseCase;

pub const DELAYS_JSON: &str = include_str!("../data/delays.json");
pub const WHERE_IS_BOX_JSON: &str = include_str!("../data/where_is_box.json");
pub const OPERATIONAL_LOGISTICS_JSON: &str =
    include_str!("../data/operational_logistics.json");

impl UseCase {
    pub fn fixture_json(self) -> &'static str {
        match self {
            Self::Delays => DELAYS_JSON,
            Self::WhereIsBox => WHERE_IS_BOX_JSON,
            Self::OperationalLogistics => OPERATIONAL_LOGISTICS_JSON,
        }
    }

    /// Parse the embedded fixture. The data is compiled in and covered by
    /// tests, so a parse failure is a build defect, not a runtime condition.
    pub fn fixture_alignment(self) -> CharacterAlignment {
        serde_json::from_str(self.fixture_json())
            .expect("embedded fixture must parse as CharacterAlignment")
    }
}

#[cfg(test)]
mod tests {
    use dispatch_alignment::{Segment, parse_alignment};

    use super::*;

    #[test]
    fn fixtures_parse_into_valid_segment_sequences() {
        for use_case in UseCase::ALL {
            let alignment = use_case.fixture_alignment();
            let segments = parse_alignment(&alignment);

            assert!(!segments.is_empty(), "{use_case}: fixture must tokenize");
            assert!(segments[0].is_word());

            for (expected, segment) in segments.iter().enumerate() {
                assert_eq!(segment.segment_index(), expected);
                assert!(segment.start() <= segment.end());
            }
            assert!(
                segments.windows(2).all(|w| w[0].start() <= w[1].start()),
                "{use_case}: segments must be chronological"
            );
        }
    }

    #[test]
    fn fixtures_cover_multiple_words_and_at_least_one_pause() {
        for use_case in UseCase::ALL {
            let segments = parse_alignment(&use_case.fixture_alignment());
            let words = segments.iter().filter(|s| s.is_word()).count();
            let gaps = segments.len() - words;
            assert!(words >= 5, "{use_case}: expected a full sentence");
            assert!(gaps >= 1, "{use_case}: expected at least one gap");
        }
    }

    #[test]
    fn fixture_text_reads_back_as_a_sentence() {
        let segments = parse_alignment(&UseCase::Delays.fixture_alignment());
        let text: String = segments.iter().map(Segment::text).collect();
        assert!(text.starts_with("Your shipment"));
    }
}
