//! Version-token computation and filename splicing.
//!
//! Two strategies: `timestamp` (wall-clock millis, always succeeds) and
//! `hash` (MD5 of the file bytes under the configured asset root). A missing
//! or unreadable file degrades to the unversioned path; an escape of the
//! asset root after validation already passed is a security fault and aborts
//! the resolve call.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{AssetConfig, VersionStrategy};
use crate::debug;
use crate::error::ResolveError;
use crate::utils::hash;

use super::store::AssetStore;

/// Splice a version token into `path` if versioning is enabled.
pub(crate) fn apply(
    path: &str,
    config: &AssetConfig,
    store: &dyn AssetStore,
) -> Result<String, ResolveError> {
    if !config.version.enable {
        return Ok(path.to_owned());
    }

    let token = match config.version.strategy {
        VersionStrategy::Timestamp => Some(epoch_millis().to_string()),
        VersionStrategy::Hash => content_hash(path, config, store)?,
    };

    Ok(match token {
        Some(token) => splice(path, &token),
        None => path.to_owned(),
    })
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// MD5 the file bytes behind `path`, or `None` when no version is available.
///
/// Lookup order is fixed: strip the `local_path` prefix, strip leading `/`,
/// lexically normalize, reject any surviving `..`, then canonicalize and
/// check containment under the canonical asset root.
fn content_hash(
    path: &str,
    config: &AssetConfig,
    store: &dyn AssetStore,
) -> Result<Option<String>, ResolveError> {
    let relative = match config.local_path.as_str() {
        "" => path,
        prefix => path.strip_prefix(prefix).unwrap_or(path),
    };
    let relative = relative.trim_start_matches('/');

    let segments = normalize_segments(relative);
    if segments.iter().any(|s| *s == "..") {
        // Validation should have made this unreachable; treat as a bypass.
        return Err(security_fault(path, "`..` segment survived normalization"));
    }
    if segments.is_empty() {
        return Ok(None);
    }

    let base = &config.version.base_path;
    let canonical_base = match store.canonicalize(base) {
        Ok(p) => p,
        Err(err) => {
            debug!("version"; "asset root {} unavailable: {err}", base.display());
            return Ok(None);
        }
    };

    let candidate = base.join(segments.join("/"));
    let candidate = match store.canonicalize(&candidate) {
        Ok(p) => p,
        Err(err) => {
            debug!("version"; "no version for `{path}`: {err}");
            return Ok(None);
        }
    };

    if !candidate.starts_with(&canonical_base) {
        return Err(security_fault(
            path,
            &format!("resolved outside asset root {}", canonical_base.display()),
        ));
    }

    match store.read(&candidate) {
        Ok(bytes) => Ok(Some(hash::md5_hex(&bytes))),
        Err(err) => {
            debug!("version"; "no version for `{path}`: {err}");
            Ok(None)
        }
    }
}

fn security_fault(path: &str, detail: &str) -> ResolveError {
    ResolveError::SecurityFault {
        path: path.to_owned(),
        detail: detail.to_owned(),
    }
}

/// Lexically normalize `.`/`..` segments. `..` pops the previous segment
/// when there is one to pop; otherwise it is kept so the caller can fault.
fn normalize_segments(path: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match out.last() {
                Some(&"..") | None => out.push(".."),
                Some(_) => {
                    out.pop();
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Insert the token before the last extension: `styles.css` + `abc` →
/// `styles.abc.css`; `favicon` + `abc` → `favicon.abc`.
fn splice(path: &str, token: &str) -> String {
    match split_extension(path) {
        (base, Some(ext)) => format!("{base}.{token}.{ext}"),
        (base, None) => format!("{base}.{token}"),
    }
}

/// Split off the last extension of the final path segment, if any.
fn split_extension(path: &str) -> (&str, Option<&str>) {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(i) if segment_start + i + 1 < path.len() => {
            let dot = segment_start + i;
            (&path[..dot], Some(&path[dot + 1..]))
        }
        _ => (path, None),
    }
}
