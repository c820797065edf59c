// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes version parsing, comparison and minor-version projection.
//!
//! Server versions come in many shapes (`v1.29.4`, `v1.28.3+k3s1`,
//! `v1.27.4-gke.900`, `1.7rc2`), so parsing is more lenient than strict
//! semver: a leading `v` is allowed, the core may have one to three numeric
//! segments, and a pre-release may follow the core without a `-` when it
//! starts with a letter.

use crate::error::{Error, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;

/// Parse a version string into a [`Version`].
pub fn parse_version(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let text = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if text.is_empty() {
        return Err(Error::invalid_version(input, "empty version"));
    }

    let (text, build) = match text.split_once('+') {
        Some((rest, metadata)) => {
            if metadata.is_empty() {
                return Err(Error::invalid_version(input, "empty build metadata"));
            }
            let build = BuildMetadata::new(metadata)
                .map_err(|e| Error::invalid_version(input, e.to_string()))?;
            (rest, build)
        }
        None => (text, BuildMetadata::EMPTY),
    };

    let core_len = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (core, suffix) = text.split_at(core_len);

    let mut segments = [0u64; 3];
    for (i, segment) in core.split('.').enumerate() {
        if i == segments.len() {
            return Err(Error::invalid_version(input, "more than three numeric segments"));
        }
        if segment.is_empty() {
            return Err(Error::invalid_version(input, "empty numeric segment"));
        }
        segments[i] = segment.parse().map_err(|_| {
            Error::invalid_version(input, format!("segment {segment:?} out of range"))
        })?;
    }

    let pre = match suffix.strip_prefix('-') {
        Some("") => return Err(Error::invalid_version(input, "empty pre-release")),
        Some(pre) => pre,
        None if suffix.starts_with(|c: char| c.is_ascii_alphabetic()) => suffix,
        None if suffix.is_empty() => "",
        None => {
            return Err(Error::invalid_version(
                input,
                format!("unexpected characters {suffix:?}"),
            ))
        }
    };
    let pre = Prerelease::new(&normalize_prerelease(pre))
        .map_err(|e| Error::invalid_version(input, e.to_string()))?;

    let [major, minor, patch] = segments;
    Ok(Version {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

/// Strip leading zeros from numeric pre-release identifiers (`gke.0901` becomes
/// `gke.901`). Providers publish such versions and they compare numerically.
fn normalize_prerelease(pre: &str) -> String {
    pre.split('.')
        .map(|id| {
            if id.len() > 1 && id.bytes().all(|b| b.is_ascii_digit()) {
                match id.trim_start_matches('0') {
                    "" => "0",
                    trimmed => trimmed,
                }
            } else {
                id
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns true if `version` is equal to or newer than `threshold`.
///
/// Build metadata does not take part in the comparison, pre-releases sort
/// before their release (`1.22.0-alpha.1 < 1.22.0`).
pub fn is_at_least(version: &str, threshold: &str) -> Result<bool> {
    let version = parse_version(version)?;
    let threshold = parse_version(threshold)?;
    Ok(version.cmp_precedence(&threshold) != Ordering::Less)
}

/// Advance the minor component of `version` by `steps`.
///
/// The result is always rendered as `major.minor.patch`; the leading `v`,
/// pre-release and build metadata are dropped.
pub fn increment_minor(version: &str, steps: u64) -> Result<String> {
    let parsed = parse_version(version)?;
    let minor = parsed
        .minor
        .checked_add(steps)
        .ok_or_else(|| Error::invalid_version(version, "minor version overflow"))?;
    Ok(format!("{}.{}.{}", parsed.major, minor, parsed.patch))
}
