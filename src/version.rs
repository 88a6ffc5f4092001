#![allow(clippy::doc_markdown)] // Generated file contains OPT_LEVEL without backticks

use std::sync::LazyLock;

include!(concat!(env!("OUT_DIR"), "/built.rs"));

/// Version string logged at startup: the package version, then the short git commit when the
/// build saw one, then `-dirty` for uncommitted changes.
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    let mut version = PKG_VERSION.to_string();
    if let Some(hash) = GIT_COMMIT_HASH_SHORT {
        version.push('-');
        version.push_str(hash);
    }
    if GIT_DIRTY == Some(true) {
        version.push_str("-dirty");
    }
    version
});

/// Target triple and profile the binary was built for, e.g. `x86_64-unknown-linux-gnu (release)`.
pub fn build_target() -> String {
    format!("{TARGET} ({PROFILE})")
}
