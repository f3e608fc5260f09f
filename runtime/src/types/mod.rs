mod array;
mod boxed;
pub mod float;
mod tag;

pub use array::*;
pub use boxed::*;
pub use float::*;
pub use tag::*;
