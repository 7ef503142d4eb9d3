//! Block tree model: the node arena, query handles and per-render
//! entities

mod block;
mod entity;
mod source;

pub use block::{Block, BlockError, BlockId, BlockType, StructureEntry};
pub use entity::Entity;
pub use source::Source;

pub(crate) use block::{BlockNode, Segment};
