//! Command-line front end for the `rpn-query` engines.
//!
//! The `rpnq` binary evaluates arithmetic RPN, matches a boolean query against
//! one document, or filters a set of documents by a query. Results go to
//! stdout; logs go to stderr.
//!
//! # Configuration
//!
//! - `RPNQ_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//! - `RPNQ_FORMAT`: Output format (text, json)
//!
//! Command-line flags override both.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
