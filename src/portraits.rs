//! Character portrait planning
//!
//! Works out which portrait images a dataset needs, where each one lives
//! locally and where it can be fetched from. Fetching is left to the caller;
//! [`sync_with`] only writes whatever bytes the caller's fetcher returns.

use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Remote directory holding one `<slug>.jpg` per character
pub const REMOTE_PORTRAIT_BASE: &str = "https://tekken8combo.kagewebsite.com/tpl/img/char";

const SLUG_ALIASES: &[(&str, &str)] = &[("jack-8", "jack8"), ("jack_8", "jack8")];

/// Portrait file slug for a character id, `None` for a blank id
#[must_use]
pub fn portrait_slug(character_id: &str) -> Option<String> {
    let normalized = character_id.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    let slug = SLUG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map_or(normalized.clone(), |(_, slug)| (*slug).to_string());
    Some(slug)
}

/// One portrait to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitTarget {
    pub slug: String,
    pub local_path: PathBuf,
    pub remote_url: String,
}

/// Portraits needed by a dataset, sorted by slug
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortraitPlan {
    pub targets: Vec<PortraitTarget>,
}

impl PortraitPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Plan portraits for every key of `raw` that has at least one route
#[must_use]
pub fn plan_portraits(raw: &Value, portrait_base: impl AsRef<Path>) -> PortraitPlan {
    let Value::Object(map) = raw else {
        return PortraitPlan::default();
    };

    let ids = map
        .iter()
        .filter(|(_, routes)| routes.as_array().is_some_and(|items| !items.is_empty()))
        .map(|(id, _)| id.as_str());
    plan_for_ids(ids, portrait_base)
}

/// Plan portraits for already-known character ids
#[must_use]
pub fn plan_for_ids<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    portrait_base: impl AsRef<Path>,
) -> PortraitPlan {
    let mut slugs: Vec<String> = ids.into_iter().filter_map(portrait_slug).collect();
    slugs.sort();
    slugs.dedup();

    let base = portrait_base.as_ref();
    PortraitPlan {
        targets: slugs
            .into_iter()
            .map(|slug| PortraitTarget {
                local_path: base.join(format!("{slug}.jpg")),
                remote_url: format!("{REMOTE_PORTRAIT_BASE}/{slug}.jpg"),
                slug,
            })
            .collect(),
    }
}

/// Outcome of a portrait sync
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub downloaded: usize,
    pub failed: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Synced character portraits: {} downloaded, {} failed.",
            self.downloaded, self.failed
        )
    }
}

/// Fetch every target with `fetch` and write it to its local path
///
/// A failed fetch or write is logged and counted; the rest carry on.
pub fn sync_with<F, E>(plan: &PortraitPlan, mut fetch: F) -> SyncReport
where
    F: FnMut(&PortraitTarget) -> Result<Vec<u8>, E>,
    E: fmt::Display,
{
    let mut report = SyncReport::default();
    for target in &plan.targets {
        let written = fetch(target).map_err(|e| e.to_string()).and_then(|bytes| {
            if let Some(parent) = target.local_path.parent() {
                fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
            fs::write(&target.local_path, bytes).map_err(|e| e.to_string())
        });

        match written {
            Ok(()) => report.downloaded += 1,
            Err(e) => {
                tracing::warn!(slug = %target.slug, error = %e, "failed to sync portrait");
                report.failed += 1;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_portrait_slug() {
        assert_eq!(portrait_slug(" Paul ").as_deref(), Some("paul"));
        assert_eq!(portrait_slug("JACK-8").as_deref(), Some("jack8"));
        assert_eq!(portrait_slug("jack_8").as_deref(), Some("jack8"));
        assert_eq!(portrait_slug("devil_jin").as_deref(), Some("devil_jin"));
        assert_eq!(portrait_slug("   "), None);
    }

    #[test]
    fn test_plan_skips_empty_and_sorts() {
        let plan = plan_portraits(&sample_dataset(), "assets/characters");
        let slugs: Vec<&str> = plan.targets.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["devil_jin", "jack8", "paul"]);

        let jack = &plan.targets[1];
        assert_eq!(jack.local_path, Path::new("assets/characters").join("jack8.jpg"));
        assert_eq!(
            jack.remote_url,
            "https://tekken8combo.kagewebsite.com/tpl/img/char/jack8.jpg"
        );
    }

    #[test]
    fn test_plan_dedupes_aliases() {
        let raw = json!({
            "jack-8": [{"text": "1"}],
            "jack_8": [{"text": "2"}],
            "kuma": "not a list",
        });
        let plan = plan_portraits(&raw, "p");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.targets[0].slug, "jack8");
        assert!(plan_portraits(&json!([1, 2]), "p").is_empty());
    }

    #[test]
    fn test_sync_counts_failures() {
        let dir = TempDir::new().unwrap();
        let plan = plan_portraits(&sample_dataset(), dir.path().join("characters"));

        let report = sync_with(&plan, |target| {
            if target.slug == "jack8" {
                Err("HTTP 404")
            } else {
                Ok(target.slug.as_bytes().to_vec())
            }
        });

        assert_eq!(report, SyncReport { downloaded: 2, failed: 1 });
        assert_eq!(
            report.to_string(),
            "Synced character portraits: 2 downloaded, 1 failed."
        );
        assert_eq!(
            fs::read(dir.path().join("characters").join("paul.jpg")).unwrap(),
            b"paul"
        );
        assert!(!dir.path().join("characters").join("jack8.jpg").exists());
    }
}
