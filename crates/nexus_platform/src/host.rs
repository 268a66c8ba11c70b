//! Host runtime lifecycle contract
//!
//! Nexus applications run inside a native host runtime that owns the real
//! main loop. The application's side of that arrangement is small: declare
//! which native shared libraries the host must load, and provide a launch
//! hook that runs once the startup filesystem state is in place.

use std::path::Path;

use crate::assets::AssetStore;
use crate::error::Result;
use crate::materialize::materialize;

/// An application hosted by a native runtime.
pub trait HostApplication {
    /// Names of the native shared libraries the host runtime must load.
    ///
    /// The names are opaque and passed through unchanged; resolving and
    /// loading them is the host's business.
    fn required_native_libraries(&self) -> &[&'static str];

    /// Called once at startup, after bundled assets have been materialized
    /// into private storage. The host runtime's main loop begins after this
    /// returns.
    fn on_launch(&mut self) -> Result<()>;
}

/// Run the deterministic startup sequence: materialize bundled assets into
/// `dest_root`, then launch the application.
///
/// The launch proceeds even when materialization was only partially
/// successful; downstream code that depends on a missing file will fail on
/// its own terms. The aggregate result is logged and returned so the
/// integrator can apply a stricter policy.
pub fn boot<A: HostApplication>(
    store: &dyn AssetStore,
    dest_root: &Path,
    app: &mut A,
) -> Result<bool> {
    tracing::info!(
        "Booting with native libraries: {:?}",
        app.required_native_libraries()
    );

    tracing::info!("Materializing bundled assets into '{}'", dest_root.display());
    let assets_complete = materialize(store, "", dest_root);
    if assets_complete {
        tracing::info!("Asset materialization complete");
    } else {
        tracing::warn!("Asset materialization was incomplete; launching anyway");
    }

    app.on_launch()?;
    Ok(assets_complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DirAssetStore;
    use crate::error::PlatformError;
    use std::path::PathBuf;

    struct RecordingApp {
        dest: PathBuf,
        seen_at_launch: Vec<PathBuf>,
        fail_launch: bool,
    }

    impl HostApplication for RecordingApp {
        fn required_native_libraries(&self) -> &[&'static str] {
            &["Nexus", "Demo"]
        }

        fn on_launch(&mut self) -> Result<()> {
            if self.fail_launch {
                return Err(PlatformError::Launch("refused".into()));
            }
            let mut found: Vec<PathBuf> = walk(&self.dest);
            found.sort();
            self.seen_at_launch = found;
            Ok(())
        }
    }

    fn walk(dir: &Path) -> Vec<PathBuf> {
        let mut out = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    out.extend(walk(&path));
                } else {
                    out.push(path);
                }
            }
        }
        out
    }

    #[test]
    fn assets_are_on_disk_before_launch() {
        let source = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("config.json"), b"{}").unwrap();
        std::fs::create_dir(source.path().join("data")).unwrap();
        std::fs::write(source.path().join("data/level1.bin"), b"bin").unwrap();

        let dest = tempfile::tempdir().unwrap();
        let mut app = RecordingApp {
            dest: dest.path().to_path_buf(),
            seen_at_launch: Vec::new(),
            fail_launch: false,
        };

        let store = DirAssetStore::new(source.path());
        let complete = boot(&store, dest.path(), &mut app).unwrap();

        assert!(complete);
        assert_eq!(
            app.seen_at_launch,
            vec![
                dest.path().join("config.json"),
                dest.path().join("data/level1.bin"),
            ]
        );
    }

    #[test]
    fn launch_failure_propagates() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let mut app = RecordingApp {
            dest: dest.path().to_path_buf(),
            seen_at_launch: Vec::new(),
            fail_launch: true,
        };

        let store = DirAssetStore::new(source.path());
        assert!(boot(&store, dest.path(), &mut app).is_err());
    }

    #[test]
    fn incomplete_materialization_still_launches() {
        // Missing source namespace: the copy reports false but launch runs.
        let missing = PathBuf::from("/definitely/not/a/real/source");
        let dest = tempfile::tempdir().unwrap();
        let mut app = RecordingApp {
            dest: dest.path().to_path_buf(),
            seen_at_launch: Vec::new(),
            fail_launch: false,
        };

        let store = DirAssetStore::new(&missing);
        let complete = boot(&store, dest.path(), &mut app).unwrap();
        assert!(!complete);
    }
}
