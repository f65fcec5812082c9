//! fibseq library: configuration and the interactive session.

pub mod app;
pub mod config;
pub mod session;
