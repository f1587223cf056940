pub mod clipboard;
pub mod logging;
