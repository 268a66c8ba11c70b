//! Android asset store via NDK AssetManager
//!
//! On Android, bundled assets are stored in the APK and accessed through the
//! AssetManager API. Opening a file goes through the NDK directly. Listing
//! goes through JNI to the Java `AssetManager.list(String)`, because the
//! NDK's `AAssetDir` never reports subdirectory names and the startup
//! traversal needs to see them.

use std::io::Read;

use nexus_platform::assets::AssetStore;
use nexus_platform::{PlatformError, Result};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
use std::ffi::CString;

/// Asset store backed by the APK's assets/ folder.
pub struct AndroidAssetStore {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

#[cfg(target_os = "android")]
impl AndroidAssetStore {
    /// Create a new store with the given AndroidApp
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    /// List children of `path` via the Java AssetManager.
    fn list_via_jni(&self, path: &str) -> Result<Vec<String>> {
        use jni::objects::{JObject, JObjectArray, JString, JValue};
        use jni::JavaVM;

        let jni_err =
            |e: jni::errors::Error| PlatformError::AssetAccess(format!("JNI failure: {}", e));

        // SAFETY: android-activity guarantees the VM and activity pointers
        // are valid for the lifetime of the app.
        let vm = unsafe { JavaVM::from_raw(self.app.vm_as_ptr() as *mut jni::sys::JavaVM) }
            .map_err(jni_err)?;
        let mut env = vm.attach_current_thread().map_err(jni_err)?;
        let activity =
            unsafe { JObject::from_raw(self.app.activity_as_ptr() as jni::sys::jobject) };

        let assets = env
            .call_method(
                &activity,
                "getAssets",
                "()Landroid/content/res/AssetManager;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(jni_err)?;

        let jpath = env.new_string(path).map_err(jni_err)?;
        let array: JObjectArray = env
            .call_method(
                &assets,
                "list",
                "(Ljava/lang/String;)[Ljava/lang/String;",
                &[JValue::Object(&jpath)],
            )
            .and_then(|v| v.l())
            .map_err(jni_err)?
            .into();

        let len = env.get_array_length(&array).map_err(jni_err)?;
        let mut names = Vec::with_capacity(len as usize);
        for i in 0..len {
            let element = env.get_object_array_element(&array, i).map_err(jni_err)?;
            let name: String = env
                .get_string(&JString::from(element))
                .map_err(jni_err)?
                .into();
            names.push(name);
        }
        Ok(names)
    }
}

#[cfg(target_os = "android")]
impl AssetStore for AndroidAssetStore {
    fn list(&self, path: &str) -> Result<Vec<String>> {
        self.list_via_jni(path)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read>> {
        let c_path = CString::new(path)
            .map_err(|e| PlatformError::AssetAccess(format!("Invalid path: {}", e)))?;

        let asset = self
            .app
            .asset_manager()
            .open(&c_path)
            .ok_or_else(|| PlatformError::AssetAccess(format!("Asset not found: {}", path)))?;

        Ok(Box::new(asset))
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl AndroidAssetStore {
    /// Create a placeholder store (fails on non-Android)
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl AssetStore for AndroidAssetStore {
    fn list(&self, _path: &str) -> Result<Vec<String>> {
        Err(PlatformError::Unsupported(
            "APK asset access only available on Android".to_string(),
        ))
    }

    fn open(&self, _path: &str) -> Result<Box<dyn Read>> {
        Err(PlatformError::Unsupported(
            "APK asset access only available on Android".to_string(),
        ))
    }
}
