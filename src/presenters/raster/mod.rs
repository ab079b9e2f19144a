pub mod airplane_mesh;
pub mod canvas;
pub mod frame;
