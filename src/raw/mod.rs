mod arena;
mod display;
mod handle;
mod node;
mod rank;
mod raw_zip_tree;
mod size;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use raw_zip_tree::RawZipTree;
