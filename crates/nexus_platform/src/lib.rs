//! Nexus Platform Abstraction
//!
//! This crate provides the platform-independent startup machinery for Nexus
//! applications:
//!
//! - **Asset Stores**: a trait over the read-only bundled-asset namespace,
//!   with a plain-filesystem implementation for desktop hosts and tests
//! - **Asset Materialization**: the one-shot recursive copy of bundled assets
//!   into the application's private storage at launch
//! - **Host Lifecycle**: the contract an application implements to be driven
//!   by a native host runtime (library declarations, launch hook)
//!
//! Platform-specific asset stores (Android's `AssetManager`-backed store)
//! live in the platform extension crates.
//!
//! # Example
//!
//! ```no_run
//! use nexus_platform::assets::DirAssetStore;
//! use nexus_platform::host::{boot, HostApplication};
//! use nexus_platform::Result;
//!
//! struct Demo;
//!
//! impl HostApplication for Demo {
//!     fn required_native_libraries(&self) -> &[&'static str] {
//!         &["Nexus", "Demo"]
//!     }
//!
//!     fn on_launch(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let store = DirAssetStore::new("bundle/assets");
//! boot(&store, "/app/priv".as_ref(), &mut Demo).unwrap();
//! ```

pub mod assets;
pub mod error;
pub mod host;
pub mod materialize;

pub use assets::{AssetStore, DirAssetStore};
pub use error::{PlatformError, Result};
pub use host::{boot, HostApplication};
pub use materialize::{copy_stream, materialize};
