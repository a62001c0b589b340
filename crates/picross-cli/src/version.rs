/// Returns the version shown by `--version`: `pkg_version (git_sha[-dirty])`.
///
/// If git metadata was unavailable at build time, the hash is `unknown`.
#[must_use]
pub(crate) fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let dirty = match option_env!("VERGEN_GIT_DIRTY") {
        Some("true") => "-dirty",
        _ => "",
    };

    format!("{pkg_version} ({git_sha}{dirty})")
}
