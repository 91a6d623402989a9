//! CLI subcommands

pub mod categories;
pub mod list;
pub mod new;
pub mod show;
