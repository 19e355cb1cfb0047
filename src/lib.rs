#![forbid(unsafe_code)]

pub mod list;
pub mod stack;
