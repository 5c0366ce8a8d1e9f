pub mod catalog;
pub mod core;
pub mod gateway;
pub mod items;
pub mod members;
pub mod roster;
pub mod shell;
pub mod utils;
