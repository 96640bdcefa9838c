pub mod colors;
pub mod display;
pub mod logging;
pub mod print;
pub mod spinner;
