//! # bytecursor-io
//!
//! External collaborators for bytecursor regions: whole-file load/save
//! (sync and async), whole-region compression, and a JSON snapshot
//! representation. All of these operate on complete regions and never
//! touch cursor state.

pub mod compress;
pub mod error;
pub mod file;
pub mod snapshot;

pub use compress::{compress, decompress, Codec};
pub use error::{Error, Result};
pub use file::{load, load_async, save, save_async};
pub use snapshot::{Snapshot, SNAPSHOT_KIND};
