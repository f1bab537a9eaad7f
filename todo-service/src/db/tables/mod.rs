//! Each module contains `impl Database` blocks for one table.

mod items;
mod notes;
