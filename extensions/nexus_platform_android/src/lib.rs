//! Nexus Android Platform
//!
//! Activity glue: APK asset access and the materialize-then-launch startup
//! sequence.

pub mod activity;
pub mod assets;

pub use activity::run;
pub use assets::AndroidAssetStore;
