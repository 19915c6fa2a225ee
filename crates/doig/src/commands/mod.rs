pub mod build;
pub mod dockerfile;
pub mod list;
pub mod update;
