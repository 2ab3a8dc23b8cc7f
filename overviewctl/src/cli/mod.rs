pub mod render;
pub mod script;
