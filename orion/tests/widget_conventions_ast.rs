use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::visit::{self, Visit};
use syn::{Fields, Item, UseTree, Visibility};

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let widgets_dir = widgets_dir();
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    for path in read_dir(&widgets_dir) {
        if path.is_dir() {
            fs_modules.insert(file_stem(&path));
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_widget_sources_when_scanned_then_app_layer_is_not_referenced() {
    let mut violations: Vec<String> = Vec::new();

    for file_path in rust_files(&widgets_dir()) {
        let source = read(&file_path);
        for forbidden in ["crate::app::", "crate::routers::"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on {forbidden}",
                    file_path.display()
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "widget layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_module_paths_containing_log_when_scanned_then_nothing_is_flagged() {
    let file: syn::File = syn::parse_str(
        r#"
        use orion_core::catalog::Product;
        use super::{cart, catalog};

        fn view(products: &[Product]) {
            let _ = catalog::view(products);
            let _ = dialog::open();
        }
        "#,
    )
    .expect("fixture should parse");

    assert!(side_effect_patterns(&file).is_empty());
}

#[test]
fn given_logging_tasks_and_fs_when_scanned_then_each_is_flagged() {
    let file: syn::File = syn::parse_str(
        r#"
        use iced::Task;

        fn view() -> Task<()> {
            log::debug!("rendering");
            let _ = std::fs::read("settings.json");
            Task::none()
        }
        "#,
    )
    .expect("fixture should parse");

    let found: Vec<&str> = side_effect_patterns(&file).into_iter().collect();
    assert_eq!(found, vec!["Task", "log::", "std::fs::"]);
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    let widget = file_stem(dir);
    let prefix = snake_to_pascal_case(&widget);

    for required in ["mod.rs", "model.rs", "view/mod.rs"] {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required file {required}",
                dir.display()
            ));
        }
    }

    let has_event = dir.join("event.rs").is_file();
    if has_event {
        for required in ["reducer.rs", "state.rs"] {
            if !dir.join(required).is_file() {
                violations.push(format!(
                    "{}: widgets with events need {required}",
                    dir.display()
                ));
            }
        }
        validate_event_file(&dir.join("event.rs"), &prefix, violations);
    }

    let mod_rs = dir.join("mod.rs");
    if mod_rs.is_file() {
        validate_widget_mod(&mod_rs, &prefix, has_event, violations);
    }

    let view_dir = dir.join("view");
    if view_dir.is_dir() {
        for file_path in rust_files(&view_dir) {
            validate_view_file(&file_path, violations);
        }
    }
}

fn validate_widget_mod(
    mod_rs: &Path,
    prefix: &str,
    has_event: bool,
    violations: &mut Vec<String>,
) {
    let file = parse(mod_rs);
    let widget_struct = format!("{prefix}Widget");
    let mut has_widget_struct = false;

    for item in &file.items {
        match item {
            Item::Struct(item_struct) if item_struct.ident == widget_struct => {
                has_widget_struct = true;
            },
            Item::Mod(item_mod) => {
                let name = item_mod.ident.to_string();
                let private = matches!(item_mod.vis, Visibility::Inherited);
                if (name == "reducer" || name == "state") && !private {
                    violations.push(format!(
                        "{}: module '{name}' must stay private to the widget",
                        mod_rs.display()
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    if !has_widget_struct {
        violations.push(format!(
            "{}: expected a '{widget_struct}' struct",
            mod_rs.display()
        ));
    }

    if has_event && !source_declares_fn(&file, "reduce") {
        violations.push(format!(
            "{}: widgets with events must expose reduce",
            mod_rs.display()
        ));
    }
}

fn validate_event_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(file_path);
    let expected: BTreeSet<String> = ["Intent", "Effect", "Event"]
        .iter()
        .map(|suffix| format!("{prefix}{suffix}"))
        .collect();

    let mut found = BTreeSet::new();
    for item in &file.items {
        let Item::Enum(item_enum) = item else {
            continue;
        };
        let name = item_enum.ident.to_string();
        if !expected.contains(&name) {
            violations.push(format!(
                "{}: unexpected event enum '{name}'",
                file_path.display()
            ));
            continue;
        }

        if name == format!("{prefix}Event") {
            let variants: BTreeSet<String> = item_enum
                .variants
                .iter()
                .filter(|variant| matches!(variant.fields, Fields::Unnamed(_)))
                .map(|variant| variant.ident.to_string())
                .collect();
            let wanted: BTreeSet<String> =
                ["Effect", "Intent"].iter().map(|v| v.to_string()).collect();
            if variants != wanted {
                violations.push(format!(
                    "{}: '{name}' must wrap exactly Intent(..) and Effect(..)",
                    file_path.display()
                ));
            }
        }
        found.insert(name);
    }

    if found != expected {
        violations.push(format!(
            "{}: expected event enums {:?}, found {:?}",
            file_path.display(),
            expected,
            found
        ));
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);

    for forbidden in side_effect_patterns(&file) {
        violations.push(format!(
            "{}: forbidden side-effect pattern in view: {forbidden}",
            file_path.display()
        ));
    }

    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }

    let view_fns = file
        .items
        .iter()
        .filter(|item| matches!(item, Item::Fn(item_fn) if item_fn.sig.ident == "view"))
        .count();
    if view_fns > 1 {
        violations.push(format!(
            "{}: expected at most one fn view, found {view_fns}",
            file_path.display()
        ));
    }
}

/// Collects paths that reach for logging, tasks or the filesystem.
#[derive(Default)]
struct SideEffectScanner {
    found: BTreeSet<&'static str>,
}

impl SideEffectScanner {
    fn check(&mut self, segments: &[String]) {
        if let Some(pattern) = side_effect_pattern(segments) {
            self.found.insert(pattern);
        }
    }
}

impl<'ast> Visit<'ast> for SideEffectScanner {
    fn visit_path(&mut self, path: &'ast syn::Path) {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        self.check(&segments);
        visit::visit_path(self, path);
    }

    fn visit_item_use(&mut self, item_use: &'ast syn::ItemUse) {
        let mut paths = Vec::new();
        collect_use_paths(&item_use.tree, &mut Vec::new(), &mut paths);
        for segments in &paths {
            self.check(segments);
        }
    }
}

fn side_effect_patterns(file: &syn::File) -> BTreeSet<&'static str> {
    let mut scanner = SideEffectScanner::default();
    scanner.visit_file(file);
    scanner.found
}

fn side_effect_pattern(segments: &[String]) -> Option<&'static str> {
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    match segments.as_slice() {
        ["log", ..] => Some("log::"),
        ["std", "fs", ..] => Some("std::fs::"),
        _ if segments.contains(&"Task") => Some("Task"),
        _ => None,
    }
}

fn collect_use_paths(
    tree: &UseTree,
    prefix: &mut Vec<String>,
    out: &mut Vec<Vec<String>>,
) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            collect_use_paths(&path.tree, prefix, out);
            prefix.pop();
        },
        UseTree::Name(name) => {
            let mut full = prefix.clone();
            full.push(name.ident.to_string());
            out.push(full);
        },
        UseTree::Rename(rename) => {
            let mut full = prefix.clone();
            full.push(rename.ident.to_string());
            out.push(full);
        },
        UseTree::Glob(_) => out.push(prefix.clone()),
        UseTree::Group(group) => {
            for item in &group.items {
                collect_use_paths(item, prefix, out);
            }
        },
    }
}

fn source_declares_fn(file: &syn::File, name: &str) -> bool {
    file.items.iter().any(|item| match item {
        Item::Impl(item_impl) => item_impl.items.iter().any(|impl_item| {
            matches!(impl_item, syn::ImplItem::Fn(method) if method.sig.ident == name)
        }),
        Item::Fn(item_fn) => item_fn.sig.ident == name,
        _ => false,
    })
}

fn widgets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/widgets")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in read_dir(dir) {
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
