pub mod category_grid;
pub mod detail;
pub mod footer;
pub mod header;
pub mod help;
pub mod helpers;
pub mod search_bar;
