mod op;
mod tree;

pub(crate) use op::Op;
