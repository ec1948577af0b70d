mod arena;
mod handle;
mod navigate;
mod node;
mod raw_rb_tree;
mod size;
mod validate;
mod walk;

pub(crate) use handle::Handle;
pub(crate) use node::Link;
pub(crate) use raw_rb_tree::RawRbTree;
