pub use moves::*;
pub use play::*;
pub use render::*;

mod moves;
mod play;
mod render;
