pub mod renderer;
pub mod snapshot;
