pub mod console;
pub mod image;
