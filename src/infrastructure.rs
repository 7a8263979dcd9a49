//! Infrastructure module - parsing, document polling, URL building and the
//! supporting configuration, logging and error types.

pub mod config;
pub mod document;
pub mod logging;
pub mod parsing;
pub mod parsing_error;
pub mod url_builder;
