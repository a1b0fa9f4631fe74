//! Payload assembly for discovery
//!
//! Turns raw, possibly blank form fields into the normalized record the
//! report prompt is built from.

pub mod fields;
mod record;

pub use fields::{MeetingType, SessionFields, STRUCTURED_KEYS};
pub use record::{
    assemble, ReportConstraints, ReportFlags, SessionInputRecord, StructuredInputs,
};
