//! Pure domain logic: masking, boundary conversion, the decision walk,
//! punctuation provenance, and the repair passes.
//!
//! Nothing in this layer performs I/O or raises to the caller; malformed
//! collaborator data degrades to the conservative choice (prefer not
//! splitting, prefer not merging) with a trace of why.

pub mod boundary;
pub mod decision;
pub mod masking;
pub mod merge;
pub mod provenance;
pub mod semantic;
pub mod tokens;
pub mod types;

pub use boundary::{SpeakerLayout, SpeakerMap, TranscriptIndex};
pub use decision::{DecisionContext, WalkInput};
pub use masking::{unmask, DomainMasker, DOT_SENTINEL};
pub use merge::{MergeEngine, MergeKind, MergeRecord};
pub use provenance::ProvenanceResolver;
pub use semantic::{ScorerError, SemanticScorer};
pub use types::{
    AuditTrail, BoundaryCandidate, BoundarySource, Sentence, SpeakerHints, SpeakerId,
    SpeakerSpan, TimedSegment, TimedSpeakerSegment, Utterance,
};
