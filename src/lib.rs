//! block-template - block-structured template parsing and resolution
//!
//! A flat template containing comment-style directive markers is
//! scanned into a tree of named, typed blocks. `USE` and `RECURSION`
//! directives alias existing blocks into the current scope without
//! copying, so recursive structures never grow the tree. The sealed
//! tree is immutable and can be shared across threads; rendering
//! happens through per-instance entities.
//!
//! # Example
//!
//! ```rust
//! use block_template::Source;
//!
//! let src = Source::parse(
//!     "<!-- START BLOCK: outer --><!-- START BLOCK: inner -->\
//!      <!-- END BLOCK: inner --><!-- END BLOCK: outer -->",
//! )
//! .unwrap();
//!
//! let outer = src.root().get_block("outer").unwrap();
//! assert_eq!(outer.path(), "/outer");
//! assert_eq!(outer.get_block("inner").unwrap().path(), "/outer/inner");
//! ```

pub mod config;
pub mod error;
pub mod expression;
pub mod parser;
pub mod tree;

pub use config::{ConfigError, ParseConfig};
pub use error::ParseError;
pub use expression::{split_expression, ExprToken};
pub use tree::{Block, BlockError, BlockId, BlockType, Entity, Source, StructureEntry};

/// Parse template text with the default configuration
///
/// # Example
///
/// ```rust
/// use block_template::parse;
///
/// let src = parse("<!-- START BLOCK: row -->cell<!-- END BLOCK: row -->").unwrap();
/// assert!(src.root().has_block("row"));
/// ```
pub fn parse(text: &str) -> Result<Source, ParseError> {
    Source::parse(text)
}

/// Parse template text with an explicit configuration
pub fn parse_with_config(text: &str, config: &ParseConfig) -> Result<Source, ParseError> {
    Source::parse_with_config(text, config)
}
