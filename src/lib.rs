pub mod assets;
pub(crate) mod common;

pub mod spec;

pub mod translator;

pub mod cli;
