pub use placement::*;
pub use xorshift::*;

mod placement;
mod xorshift;
