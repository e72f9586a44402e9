pub mod movement;
pub mod render;
pub mod spawn;

pub use movement::*;
pub use render::*;
pub use spawn::*;
