pub mod footer;
pub mod help;
pub mod screen;
pub mod theme;
