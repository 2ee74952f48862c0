//! CLI module for the marsview binary.
//!
//! ```ignore
//! use marsview::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("{}", marsview::cli::version_line()),
//!     CliCommand::Help => println!("{}", marsview::cli::USAGE),
//!     CliCommand::Run { base_url } => { /* load listings */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use version::{version_line, VERSION};
