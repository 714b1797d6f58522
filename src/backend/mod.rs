//! Backend module - fragment emission and source maps

pub mod emit;
pub mod fragment;
pub mod sourcemap;
