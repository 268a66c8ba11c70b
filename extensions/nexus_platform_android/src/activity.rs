//! Activity startup sequence
//!
//! Runs once, synchronously, before the host runtime's main loop: bring up
//! logging, mirror the APK's bundled assets into the app's internal data
//! directory, then hand control to the application's launch hook. Downstream
//! native code assumes the files are already on disk, so nothing here is
//! deferred.

use nexus_platform::host::HostApplication;
use nexus_platform::Result;

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
use nexus_platform::PlatformError;

/// Initialize Android logging once.
#[cfg(target_os = "android")]
fn init_logging() {
    // Initialize android_logger for log crate
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("Nexus"),
    );

    // Initialize tracing-android for tracing crate
    use tracing_subscriber::layer::SubscriberExt;
    if let Ok(layer) = tracing_android::layer("Nexus") {
        let subscriber = tracing_subscriber::registry().with(layer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

/// Run the Android startup sequence for `app`.
///
/// Materializes the whole bundled-asset namespace into the activity's
/// internal data directory, then calls the launch hook. Returns the
/// aggregate materialization result alongside launch success; callers that
/// want startup to be fatal on a partial copy can check it, the stock
/// sequence does not.
#[cfg(target_os = "android")]
pub fn run<A: HostApplication>(android_app: &AndroidApp, app: &mut A) -> Result<bool> {
    init_logging();
    tracing::info!("Nexus activity starting");

    let dest_root = android_app.internal_data_path().ok_or_else(|| {
        PlatformError::InitFailed("No internal data path for this activity".to_string())
    })?;

    let store = crate::assets::AndroidAssetStore::new(android_app.clone());
    nexus_platform::host::boot(&store, &dest_root, app)
}

/// Stub for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
pub fn run<A: HostApplication>(app: &mut A) -> Result<bool> {
    let _ = app;
    Err(nexus_platform::PlatformError::Unsupported(
        "Activity startup only available on Android".to_string(),
    ))
}
