pub mod compose;
pub mod parser;
pub mod types;

pub use compose::{CollapseGaps, Identity, SegmentComposer};
pub use parser::{parse_alignment, parse_alignment_with};
pub use types::{CharacterAlignment, GapSegment, Segment, WordSegment};
