//! # Lecture Notes
//!
//! Heuristic pipeline that turns raw lecture transcript text into structured
//! study notes.
//!
//! ```text
//! raw text ─► normalize ─► segment ─┬─► topic ──────────────┐
//!                                   ├─► keywords            │
//!                                   ├─► summary, key points │
//!                                   ├─► concepts            ▼
//!                                   ├─► exam notes ◄─── topic
//!                                   └─► definitions ─► questions
//! ```
//!
//! The pipeline does no language understanding. It relies on sentence
//! punctuation, word frequencies and a handful of phrase tables, and it never
//! fails on string input: missing structure yields empty sections or fixed
//! fallback text.
//!
//! ```rust
//! use lecture_notes::generate_notes;
//!
//! let notes = generate_notes("A compiler is a program that translates source code.");
//! assert_eq!(notes.definitions[0].term, "A compiler");
//! ```

pub mod definitions;
pub mod keywords;
pub mod lexicon;
pub mod pipeline;
pub mod questions;
pub mod sections;
pub mod segmenter;
pub mod topic;
pub mod types;

pub use pipeline::{generate_notes, generate_notes_with};
pub use types::{Definition, KeywordEntry, NotesLimits, NotesResult, Sentence};
