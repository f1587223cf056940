pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod models;
