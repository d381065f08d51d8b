use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use toml_edit::{Document, Item};

/// The dependency names declared by the caller's Cargo.toml.
///
/// Generated code must name workspace crates by a path that is valid from the
/// invoking crate, which is only known from its manifest.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is a dependency, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the facade crate
///    `vc_probe` is a dependency, return `::vc_probe::short_name`
///    (e.g. `vc_reflect` -> `::vc_probe::reflect`).
/// 3. Repeat step 1-2 with `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// Target-specific dependency tables count as `dependencies`.
///
/// A crate referencing itself (tests inside `vc_reflect`) hits the fallback,
/// which works because the crate root declares `extern crate self as vc_reflect;`.
#[derive(Debug, Default)]
pub struct Manifest {
    dependencies: BTreeSet<String>,
    dev_dependencies: BTreeSet<String>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "vc_probe";
const WORKSPACE_PREFIX: &str = "vc_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
    }

    fn collect_names(table: Option<&Item>, names: &mut BTreeSet<String>) {
        if let Some(table) = table.and_then(Item::as_table_like) {
            // Cargo accepts `-` and `_` interchangeably in crate names.
            names.extend(table.iter().map(|(name, _)| name.replace('-', "_")));
        }
    }

    fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        let document = Document::parse(content).ok()?;

        let mut manifest = Self {
            modified_time: Self::modified_time(path),
            ..Self::default()
        };

        Self::collect_names(document.get("dependencies"), &mut manifest.dependencies);
        Self::collect_names(document.get("dev-dependencies"), &mut manifest.dev_dependencies);

        if let Some(targets) = document.get("target").and_then(Item::as_table_like) {
            for (_, target) in targets.iter() {
                if let Some(target) = target.as_table_like() {
                    Self::collect_names(target.get("dependencies"), &mut manifest.dependencies);
                    Self::collect_names(
                        target.get("dev-dependencies"),
                        &mut manifest.dev_dependencies,
                    );
                }
            }
        }

        Some(manifest)
    }

    fn absolute_path(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Punctuated::new(),
        };
        for segment in segments {
            path.segments
                .push(syn::PathSegment::from(syn::Ident::new(segment, Span::call_site())));
        }
        path
    }

    fn find_in(names: &BTreeSet<String>, name: &str) -> Option<syn::Path> {
        if names.contains(name) {
            return Some(Self::absolute_path(&[name]));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        names
            .contains(FACADE_NAME)
            .then(|| Self::absolute_path(&[FACADE_NAME, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        Self::find_in(&self.dependencies, name)
            .or_else(|| Self::find_in(&self.dev_dependencies, name))
            .unwrap_or_else(|| Self::absolute_path(&[name]))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and reloaded when the file changes. An
    /// unreadable manifest behaves as one without dependencies.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::manifest_path() else {
            return func(&Self::default());
        };
        let modified_time = Self::modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Self::load(&manifest_path).unwrap_or_default();
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests
