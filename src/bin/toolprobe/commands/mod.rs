//! Command implementations

pub mod cflags;
pub mod completions;
pub mod config;
pub mod cpp_out;
pub mod find;
pub mod ldflags;
pub mod libname;
pub mod probe;
pub mod which;
