//! Rendering and input helpers for the credit listing/detail CLI.

pub mod detail_view;
pub mod forms;
pub mod list_view;
pub mod output;
pub mod table;
