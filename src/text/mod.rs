//! Splitting text into plain runs, mentions and hashtags.
//!
//! Key types:
//!
//! - [`Segment`]: one displayable piece borrowed from the input
//! - [`SegmentKind`] / [`TokenKind`]: what a segment is
//! - [`LengthMethod`]: how the minimum-length gate counts characters
//!
//! # Examples
//!
//! ```
//! use mention_hashtag_text::MentionHashtagConfig;
//! use mention_hashtag_text::text::{display_string, tokenize};
//!
//! let config = MentionHashtagConfig::default();
//! let segments = tokenize(Some("ping @someone about #rust"), &config);
//!
//! let names: Vec<_> = segments.iter().filter_map(|s| s.token_name).collect();
//! assert_eq!(names, ["someone", "rust"]);
//! assert_eq!(display_string(&segments), "ping @someone about #rust ");
//! ```

mod length;
mod segment;
mod tokenizer;

pub use length::LengthMethod;
pub use segment::{LINE_BREAK, SEPARATOR, Segment, SegmentKind, TokenKind, display_string};
pub use tokenizer::{DELIMITERS, classify, tokenize};
