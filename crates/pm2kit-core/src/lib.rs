//! Process supervisor helpers for pm2kit
//!
//! This crate holds everything the `pm2-list` and `pm2-stop-here` utilities
//! share: the supervisor collaborator, process-list parsing with per-field
//! fallbacks, and working-directory matching.
//!
//! # Requirements
//!
//! - `pm2` (or a compatible supervisor) must be installed and on `PATH`, or
//!   configured via [`SupervisorConfig::program`]
//!
//! # Example
//!
//! ```ignore
//! use pm2kit_core::{DirectoryMatcher, Pm2, Supervisor, SupervisorConfig};
//!
//! let pm2 = Pm2::new(SupervisorConfig::default());
//! let records = pm2.list_processes().await?;
//!
//! let cwd = std::env::current_dir()?;
//! for record in DirectoryMatcher::new(&cwd).select(&records) {
//!     pm2.stop_process(&record.id).await?;
//! }
//! ```

pub mod error;
pub mod matcher;
pub mod parse;
pub mod path;
pub mod record;
pub mod supervisor;

pub use error::{Result, SupervisorError};
pub use matcher::DirectoryMatcher;
pub use parse::parse_process_list;
pub use path::{normalize_current_dir, normalize_path};
pub use record::{NOT_SPECIFIED, ProcessId, ProcessRecord, RawEnv, RawProcess, UNKNOWN};
pub use supervisor::{DEFAULT_OUTPUT_LIMIT, Pm2, Supervisor, SupervisorConfig, default_program};
