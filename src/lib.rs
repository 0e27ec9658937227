pub mod breakpoints;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod css;
pub mod declarations;
pub mod pipeline;
pub mod reference;
pub mod registry;
pub mod resolve;
pub mod rewrite;
pub mod scan;
