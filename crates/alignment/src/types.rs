/// Character-level timing alignment as delivered by the speech-synthesis
/// provider: three parallel arrays indexed by character position.
///
/// Timestamps are sparse — any index may be `null`/absent. The parser resolves
/// missing values through a fallback chain (previous character's end time,
/// else 0) rather than rejecting the input.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAlignment {
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub character_start_times_seconds: Vec<Option<f64>>,
    #[serde(default)]
    pub character_end_times_seconds: Vec<Option<f64>>,
}

impl CharacterAlignment {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// A maximal run of non-space characters with contiguous timing. `text` is the
/// trimmed concatenation of the member characters.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct WordSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub segment_index: usize,
}

/// A silence interval between two emitted segments. `text` is always a single
/// space so renderers can concatenate segments verbatim.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct GapSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub segment_index: usize,
}

/// Word-or-gap union produced by [`crate::parser::parse_alignment`].
///
/// `segment_index` is a single 0-based counter shared by both variants,
/// assigned in emission order. The sequence is immutable once produced — a new
/// parse yields a new sequence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    Word(WordSegment),
    Gap(GapSegment),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Self::Word(w) => &w.text,
            Self::Gap(g) => &g.text,
        }
    }

    pub fn start(&self) -> f64 {
        match self {
            Self::Word(w) => w.start,
            Self::Gap(g) => g.start,
        }
    }

    pub fn end(&self) -> f64 {
        match self {
            Self::Word(w) => w.end,
            Self::Gap(g) => g.end,
        }
    }

    pub fn segment_index(&self) -> usize {
        match self {
            Self::Word(w) => w.segment_index,
            Self::Gap(g) => g.segment_index,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }

    pub fn as_word(&self) -> Option<&WordSegment> {
        match self {
            Self::Word(w) => Some(w),
            Self::Gap(_) => None,
        }
    }
}
