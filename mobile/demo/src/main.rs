//! Nexus demo application
//!
//! Declares the native libraries the host runtime loads (`Nexus`, the engine,
//! and `Demo`, the demo scenes) and wires the Android startup sequence. On
//! desktop hosts the same application runs against a directory-backed asset
//! store for local testing of the bundle layout.

use nexus_platform::{HostApplication, Result};

struct DemoApp;

impl HostApplication for DemoApp {
    fn required_native_libraries(&self) -> &[&'static str] {
        &["Nexus", "Demo"]
    }

    fn on_launch(&mut self) -> Result<()> {
        tracing::info!("Demo launched; host runtime takes over from here");
        Ok(())
    }
}

#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: android_activity::AndroidApp) {
    let mut demo = DemoApp;
    // Startup result is advisory: downstream code fails on its own terms if
    // a file is missing.
    match nexus_platform_android::run(&app, &mut demo) {
        Ok(true) => log::info!("Demo startup complete"),
        Ok(false) => log::warn!("Demo startup complete with missing assets"),
        Err(e) => log::error!("Demo startup failed: {}", e),
    }
}

#[cfg(not(target_os = "android"))]
fn main() {
    use nexus_platform::DirAssetStore;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = DirAssetStore::new("assets");
    let dest = std::path::Path::new(".nexus_data");
    let mut demo = DemoApp;

    match nexus_platform::boot(&store, dest, &mut demo) {
        Ok(true) => tracing::info!("Demo startup complete"),
        Ok(false) => tracing::warn!("Demo startup complete with missing assets"),
        Err(e) => tracing::error!("Demo startup failed: {}", e),
    }
}
