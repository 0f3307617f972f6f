//! Durable lock-state persistence for the Latchkey controller.
//!
//! The store is a single JSON object in a file. The controller only ever
//! touches the `"locked"` key, but the whole object survives every
//! read-modify-write, so other tools can park additional keys in the same
//! file without losing them.
//!
//! # Durability model
//!
//! A present, parseable file always holds the last successfully committed
//! state. A missing or unparseable file degrades to an empty object — the
//! door controller must keep working after a corrupted SD card write, and
//! "state unknown" is handled explicitly by the callers that can (only
//! [`StateStore::is_locked`] defaults it, to "not locked").
//!
//! Writes are plain read-modify-write with no file locking: the lock is
//! driven by one short-lived invocation at a time, enforced by the process
//! that launches it. Concurrent invocations are last-writer-wins.
//!
//! # Examples
//!
//! ```
//! use latchkey_state::StateStore;
//!
//! # fn main() -> Result<(), latchkey_state::StateError> {
//! let dir = tempfile::TempDir::new().unwrap();
//! let store = StateStore::new(dir.path().join("state.json"));
//!
//! assert!(!store.is_locked()?); // first run: no file yet
//! store.set_locked(true)?;
//! assert!(store.is_locked()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;

pub use error::{Result, StateError};
pub use store::StateStore;
