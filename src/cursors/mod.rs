pub mod iter;

pub use iter::{CharCursor, IterCursor};
