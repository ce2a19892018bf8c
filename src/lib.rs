mod list;
mod ops;
mod verify;

pub mod arg;

pub use list::{DList, Iter, NodeId};
pub use ops::{concat, equals, reverse};
pub use verify::{verify, Violation};

pub type Result<T> = std::result::Result<T, Violation>;
