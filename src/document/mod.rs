//! Document assembly core: clause parsing, per-type templates, section
//! splitting, merge, and chat revision.

pub mod assembler;
pub mod chat;
pub mod clauses;
pub mod merge;
pub mod render;
pub mod sections;
pub mod templates;

pub use assembler::DocumentAssembler;
pub use clauses::{parse_clause_blocks, ClauseSet};
pub use sections::{split_sections, strip_suggestions, SUGGESTIONS_HEADING, SUGGESTIONS_MARKER};
pub use templates::{Customization, DocumentType};
