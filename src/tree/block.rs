//! Block tree nodes and the query contract
//!
//! Blocks live in an arena owned by [`Source`]; a [`Block`] is a cheap
//! copyable handle into it. Parents are non-owning ids, so `USE` and
//! `RECURSION` aliases can point back into the tree without ownership
//! cycles, and two sibling names can resolve to the identical node.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::tree::entity::Entity;
use crate::tree::source::Source;

/// Kind tag for a parsed block. There is no behavior attached to the
/// kinds; readonly is derived from `Template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Root,
    Start,
    Template,
    Wrapper,
}

impl BlockType {
    /// Lowercase keyword used in tree dumps
    pub fn keyword(&self) -> &'static str {
        match self {
            BlockType::Root => "root",
            BlockType::Start => "start",
            BlockType::Template => "template",
            BlockType::Wrapper => "wrapper",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Stable identifier of a node within one [`Source`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub(crate) usize);

/// One entry of a block's recorded content, as stored in the arena
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment {
    Text(String),
    Child(BlockId),
}

/// Arena node. Child ids in `children` usually point at nodes whose
/// `parent` is this node; alias entries point elsewhere.
#[derive(Debug)]
pub(crate) struct BlockNode {
    pub(crate) name: String,
    pub(crate) kind: BlockType,
    pub(crate) parent: Option<BlockId>,
    pub(crate) children: IndexMap<String, BlockId>,
    pub(crate) structure: Vec<Segment>,
}

impl BlockNode {
    pub(crate) fn new(name: String, kind: BlockType, parent: Option<BlockId>) -> Self {
        Self {
            name,
            kind,
            parent,
            children: IndexMap::new(),
            structure: Vec::new(),
        }
    }
}

/// Query-time failures on a sealed tree
#[derive(Error, Debug)]
pub enum BlockError {
    /// The requested child name is absent; check `has_block` first when
    /// absence is expected
    #[error("block '{name}' not exists in '{path}'")]
    NotFound { name: String, path: String },
}

/// Handle to one block of a parsed [`Source`] tree.
///
/// All operations are pure reads; equality is object identity within
/// one source, which is how aliased names are told apart from copies.
#[derive(Clone, Copy)]
pub struct Block<'a> {
    pub(crate) source: &'a Source,
    pub(crate) id: BlockId,
}

/// One entry of a block's content, in recorded order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructureEntry<'a> {
    /// A literal text run
    Text(&'a str),
    /// A reference to one of the block's children
    Block(Block<'a>),
}

impl<'a> Block<'a> {
    fn node(&self) -> &'a BlockNode {
        let source: &'a Source = self.source;
        source.node(self.id)
    }

    fn handle(&self, id: BlockId) -> Block<'a> {
        Block {
            source: self.source,
            id,
        }
    }

    /// The block's own name; empty for the synthetic root
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// The kind tag from the declaring directive
    pub fn block_type(&self) -> BlockType {
        self.node().kind
    }

    /// True iff the block was declared via `TEMPLATE BLOCK`
    pub fn is_readonly(&self) -> bool {
        self.block_type() == BlockType::Template
    }

    /// The enclosing block; `None` for the root
    pub fn parent(&self) -> Option<Block<'a>> {
        self.node().parent.map(|id| self.handle(id))
    }

    /// `/`-joined ancestor-name chain down to this block; the root's
    /// path is `/`
    pub fn path(&self) -> String {
        let mut names = Vec::new();
        let mut cursor = Some(*self);
        while let Some(block) = cursor {
            if block.block_type() != BlockType::Root {
                names.push(block.name());
            }
            cursor = block.parent();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Whether `name` is registered among this block's children
    pub fn has_block(&self, name: &str) -> bool {
        self.node().children.contains_key(name)
    }

    /// The child registered under `name`. Aliased names resolve to the
    /// identical block as the original.
    pub fn get_block(&self, name: &str) -> Result<Block<'a>, BlockError> {
        self.node()
            .children
            .get(name)
            .map(|&id| self.handle(id))
            .ok_or_else(|| BlockError::NotFound {
                name: name.to_string(),
                path: self.path(),
            })
    }

    /// Nearest ancestor (parent chain only, self excluded) whose name
    /// matches; the synthetic root never matches
    pub fn get_closest(&self, name: &str) -> Option<Block<'a>> {
        let mut cursor = self.parent();
        while let Some(block) = cursor {
            if block.block_type() != BlockType::Root && block.name() == name {
                return Some(block);
            }
            cursor = block.parent();
        }
        None
    }

    /// Nearest readonly block registered under `name`, searching this
    /// block's children and then each ancestor's, the same scope walk
    /// `USE` resolution performs. Non-readonly entries with the name
    /// are passed over.
    pub fn get_template(&self, name: &str) -> Option<Block<'a>> {
        let mut scope = Some(*self);
        while let Some(block) = scope {
            if let Some(&id) = block.node().children.get(name) {
                let candidate = block.handle(id);
                if candidate.is_readonly() {
                    return Some(candidate);
                }
            }
            scope = block.parent();
        }
        None
    }

    /// The block's content in recorded order: literal runs interleaved
    /// with child references exactly as they appeared in the source
    pub fn structure(&self) -> Vec<StructureEntry<'a>> {
        self.node()
            .structure
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => StructureEntry::Text(text.as_str()),
                Segment::Child(id) => StructureEntry::Block(self.handle(*id)),
            })
            .collect()
    }

    /// Registered children in insertion order, aliases included
    pub fn blocks(&self) -> impl Iterator<Item = (&'a str, Block<'a>)> + 'a {
        let source = self.source;
        self.node()
            .children
            .iter()
            .map(move |(name, &id)| (name.as_str(), Block { source, id }))
    }

    /// Fresh rendering handle bound to this block; the block itself is
    /// never touched by entity state
    pub fn new_entity(&self) -> Entity<'a> {
        Entity::new(*self)
    }

    /// Indented dump of this block's subtree. True tree edges recurse;
    /// alias entries registered by `USE`/`RECURSION` print as
    /// `name -> /path/of/target` so self-references stay finite.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.path());
        out.push('\n');
        self.outline_children(1, &mut out);
        out
    }

    fn outline_children(&self, depth: usize, out: &mut String) {
        use std::fmt::Write;

        let indent = "  ".repeat(depth);
        for (name, child) in self.blocks() {
            if child.parent() == Some(*self) && child.name() == name {
                let _ = writeln!(out, "{}{} [{}]", indent, name, child.block_type());
                child.outline_children(depth + 1, out);
            } else {
                let _ = writeln!(out, "{}{} -> {}", indent, name, child.path());
            }
        }
    }
}

impl PartialEq for Block<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.id == other.id
    }
}

impl Eq for Block<'_> {}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("name", &self.name())
            .field("type", &self.block_type())
            .field("path", &self.path())
            .finish()
    }
}
