use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::models::category::Category;
use crate::models::project::Project;

/// Most projects returned per category, and in total for the "all" view.
pub const DISPLAY_CAP: usize = 6;

/// File name expected inside each category directory.
pub const DATA_FILE: &str = "projects.json";

/// Filter tokens meaning "every category".
const ALL_TOKENS: &[&str] = &["all", "*"];

fn is_all_token(filter: &str) -> bool {
    ALL_TOKENS.contains(&filter.trim())
}

/// The full merged collection of loaded projects, newest first.
///
/// Built wholesale by [`Catalog::load`] and immutable afterward; every
/// selection returns clones, so repeated queries never observe each
/// other's annotations.
#[derive(Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Load every category's project list from `data_dir`, concurrently.
    ///
    /// Never fails: a category whose file is missing, unreadable, or
    /// malformed contributes an empty list (logged at warn level), and a
    /// failure of the load orchestration itself yields an empty catalog
    /// (logged at error level). Callers cannot distinguish "load failed"
    /// from "genuinely empty" — accepted, not a defect.
    pub async fn load(data_dir: &Path) -> Catalog {
        let projects = match try_load_all(data_dir).await {
            Ok(p) => p,
            Err(e) => {
                error!("[catalog] Load failed: {}", e);
                Vec::new()
            }
        };
        Catalog { projects }
    }

    /// Build a catalog from already-loaded projects, applying the same
    /// newest-first stable sort as [`Catalog::load`].
    pub fn from_projects(mut projects: Vec<Project>) -> Catalog {
        sort_newest_first(&mut projects);
        Catalog { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects for the card grid. `all` (or `*`) picks each category's
    /// most recent project, in catalog order, until six slots fill; a
    /// specific filter token returns up to six of that category, newest
    /// first. Unrecognized tokens resolve to the default category.
    pub fn select_for_display(&self, filter: &str) -> Vec<Project> {
        if is_all_token(filter) {
            return self.latest_per_category();
        }
        let cat = Category::from_token(filter);
        self.in_category(cat).take(DISPLAY_CAP).cloned().collect()
    }

    /// Everything matching the filter, uncapped — the expanded "view all"
    /// contract. For `all` this is the entire catalog, unrecognized
    /// categories included.
    pub fn select_all_for_modal(&self, filter: &str) -> Vec<Project> {
        if is_all_token(filter) {
            return self.projects.clone();
        }
        let cat = Category::from_token(filter);
        self.in_category(cat).cloned().collect()
    }

    /// The deduplicated union of each category's six most-recent projects,
    /// in fixed category order, with the most recent per category marked
    /// `is_latest`.
    ///
    /// This is the stable population for a filtering widget that toggles
    /// visibility instead of re-rendering: it covers everything
    /// `select_for_display` can return for any filter, and the
    /// `is_latest` entries cover the `all` view.
    pub fn select_superset(&self) -> Vec<Project> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut merged = Vec::new();
        for cat in Category::ALL {
            for (i, p) in self.in_category(cat).take(DISPLAY_CAP).enumerate() {
                if !seen.insert((p.title.clone(), p.category.clone())) {
                    continue;
                }
                let mut p = p.clone();
                p.is_latest = i == 0;
                merged.push(p);
            }
        }
        merged
    }

    /// First occurrence per recognized category in catalog order, up to the
    /// cap. Unrecognized categories are retained in the catalog but never
    /// surface here — the `all` view must stay within what the superset
    /// marks `is_latest`.
    fn latest_per_category(&self) -> Vec<Project> {
        let mut seen: HashSet<Category> = HashSet::new();
        let mut picked = Vec::new();
        for p in &self.projects {
            if picked.len() >= DISPLAY_CAP {
                break;
            }
            let Some(cat) = Category::resolve(&p.category) else {
                continue;
            };
            if seen.insert(cat) {
                picked.push(p.clone());
            }
        }
        picked
    }

    fn in_category(&self, cat: Category) -> impl Iterator<Item = &Project> + '_ {
        self.projects.iter().filter(move |p| p.category == cat.id())
    }
}

/// Stable newest-first sort; ties keep input order.
fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by_cached_key(|p| Reverse(p.sort_key()));
}

async fn try_load_all(data_dir: &Path) -> Result<Vec<Project>, String> {
    // One task per category, all issued up front; each writes only its own
    // slot, and the join below preserves category order.
    let mut handles = Vec::with_capacity(Category::ALL.len());
    for cat in Category::ALL {
        let path = data_dir.join(cat.id()).join(DATA_FILE);
        handles.push((cat, tokio::spawn(load_category(cat, path))));
    }

    let mut merged = Vec::new();
    for (cat, handle) in handles {
        let list = handle
            .await
            .map_err(|e| format!("{} load task failed: {}", cat.id(), e))?;
        merged.extend(list);
    }

    sort_newest_first(&mut merged);
    Ok(merged)
}

/// Load one category's list; any failure degrades to an empty list so the
/// other categories are unaffected.
async fn load_category(cat: Category, path: PathBuf) -> Vec<Project> {
    match read_category(&path).await {
        Ok(list) => list,
        Err(e) => {
            warn!("[catalog] {}: {} — loading as empty", cat.id(), e);
            Vec::new()
        }
    }
}

async fn read_category(path: &Path) -> Result<Vec<Project>, String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}
