//! Source: owns a parsed template and its block arena

use crate::config::ParseConfig;
use crate::error::ParseError;
use crate::parser;
use crate::tree::block::{Block, BlockId, BlockNode};

/// Arena id of the synthetic root block
pub(crate) const ROOT: BlockId = BlockId(0);

/// A successfully parsed template: the original text plus the block
/// tree rooted at a synthetic root node.
///
/// A `Source` is immutable once built, so it can be shared across
/// threads; every [`Block`] handle and every entity reads, never
/// writes.
#[derive(Debug)]
pub struct Source {
    text: String,
    nodes: Vec<BlockNode>,
}

impl Source {
    /// Parse template text with the default configuration
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        Self::parse_with_config(text, &ParseConfig::default())
    }

    /// Parse template text with an explicit configuration
    pub fn parse_with_config(
        text: impl Into<String>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let text = text.into();
        let nodes = parser::scan(&text, config)?;
        Ok(Self { text, nodes })
    }

    /// The synthetic root block
    pub fn root(&self) -> Block<'_> {
        Block {
            source: self,
            id: ROOT,
        }
    }

    /// The original template text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolve a `/`-separated path from the root, e.g. `/outer/inner`.
    /// `/` and the empty string resolve to the root itself.
    pub fn get(&self, path: &str) -> Option<Block<'_>> {
        let mut block = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            block = block.get_block(segment).ok()?;
        }
        Some(block)
    }

    pub(crate) fn node(&self, id: BlockId) -> &BlockNode {
        &self.nodes[id.0]
    }

    /// Indented tree dump of the whole template, used by the CLI
    pub fn outline(&self) -> String {
        self.root().outline()
    }
}
