//! Startup asset materialization
//!
//! The host runtime reads game data from real files on disk, but bundled
//! assets live in a read-only packaged namespace. At launch, before the
//! runtime's main loop starts, the bundled tree is mirrored once into the
//! application's private storage directory. The traversal is single-threaded,
//! synchronous, and runs to completion; nothing else touches the destination
//! subtree until it returns.
//!
//! Failures are deliberately non-fatal: every I/O error is caught at the
//! failing file or subdirectory, logged, and folded into an aggregate
//! boolean, and every remaining sibling is still attempted. The caller
//! decides what a partial copy means.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::assets::AssetStore;

/// Copy buffer size for leaf files.
const COPY_BUF_LEN: usize = 1024;

/// Recursively mirror `source` (a namespace path, `""` for the whole store)
/// into `dest_root` on the real filesystem.
///
/// Child entries are classified by name: a name containing a `.` is copied
/// as a leaf file, everything else is recursed into as a subdirectory. This
/// is a name heuristic, not a type query, and it is load-bearing for the
/// bundled-asset layout: an extensionless file is recursed into and never
/// copied, and a dotted directory name gets a doomed file copy. Keep the
/// asset tree shaped accordingly.
///
/// Returns `true` only if every directory creation and every leaf copy
/// succeeded. A failure never aborts the traversal; all remaining entries
/// are still attempted.
pub fn materialize(store: &dyn AssetStore, source: &str, dest_root: &Path) -> bool {
    // The listing API does not accept absolute-style paths.
    let source = source.strip_prefix('/').unwrap_or(source);

    let names = match store.list(source) {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!("Asset listing failed for '{}': {}", source, e);
            return false;
        }
    };

    let mut ok = true;

    if let Err(e) = std::fs::create_dir_all(dest_root) {
        // Leaf copies below will fail individually and be recorded; keep
        // walking so the failure report covers the whole level.
        tracing::warn!(
            "Failed to create destination '{}': {}",
            dest_root.display(),
            e
        );
        ok = false;
    }

    for name in names {
        let child_source = join_namespace(source, &name);
        let child_dest = dest_root.join(&name);

        if name.contains('.') {
            ok &= copy_leaf(store, &child_source, &child_dest);
        } else {
            ok &= materialize(store, &child_source, &child_dest);
        }
    }

    ok
}

/// Copy all bytes from `reader` to `writer` through a fixed-size buffer,
/// until the reader reports end-of-stream. Returns the number of bytes
/// copied.
pub fn copy_stream<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<u64> {
    let mut buf = [0u8; COPY_BUF_LEN];
    let mut total = 0u64;
    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            return Ok(total);
        }
        writer.write_all(&buf[..read])?;
        total += read as u64;
    }
}

/// Copy one leaf asset to `dest`, downgrading any failure to `false`.
fn copy_leaf(store: &dyn AssetStore, source: &str, dest: &Path) -> bool {
    match try_copy_leaf(store, source, dest) {
        Ok(bytes) => {
            tracing::debug!("Copied asset '{}' ({} bytes)", source, bytes);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to copy asset '{}' to '{}': {}", source, dest.display(), e);
            false
        }
    }
}

fn try_copy_leaf(store: &dyn AssetStore, source: &str, dest: &Path) -> io::Result<u64> {
    let mut reader = store
        .open(source)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;
    let mut file = File::create(dest)?;
    let bytes = copy_stream(reader.as_mut(), &mut file)?;
    file.flush()?;
    Ok(bytes)
}

/// Join a child name onto a namespace path without introducing a leading
/// slash at the root.
fn join_namespace(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}
