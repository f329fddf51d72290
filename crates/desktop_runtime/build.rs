use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Kebab-case ids accepted in `apps.toml`, paired with their `AppType` variant names.
const KNOWN_APP_TYPES: [(&str, &str); 8] = [
    ("about-me", "AboutMe"),
    ("projects", "Projects"),
    ("skills-dashboard", "SkillsDashboard"),
    ("network-monitor", "NetworkMonitor"),
    ("contact", "Contact"),
    ("terminal", "Terminal"),
    ("games", "Games"),
    ("display-options", "DisplayOptions"),
];

#[derive(Debug, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct WindowDefaults {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Deserialize)]
struct AppEntry {
    app_type: String,
    title: String,
    launcher_label: String,
    description: String,
    desktop_label: String,
    show_on_desktop: bool,
    shortcut_digit: Option<u8>,
    icon_position: Point,
    window: WindowDefaults,
}

#[derive(Debug, Deserialize)]
struct AppCatalogManifest {
    app: Vec<AppEntry>,
}

fn variant_for(app_type: &str) -> &'static str {
    KNOWN_APP_TYPES
        .iter()
        .find(|(id, _)| *id == app_type)
        .map(|(_, variant)| *variant)
        .unwrap_or_else(|| panic!("apps.toml: unknown app_type `{app_type}`"))
}

fn validate(manifest: &AppCatalogManifest) {
    let mut seen_types = BTreeSet::new();
    let mut seen_digits = BTreeSet::new();

    for entry in &manifest.app {
        variant_for(&entry.app_type);
        if !seen_types.insert(entry.app_type.as_str()) {
            panic!("apps.toml: duplicate app_type `{}`", entry.app_type);
        }
        if entry.window.width <= 0 || entry.window.height <= 0 {
            panic!(
                "apps.toml: `{}` window size must be positive, found {}x{}",
                entry.app_type, entry.window.width, entry.window.height
            );
        }
        if let Some(digit) = entry.shortcut_digit {
            if !(1..=9).contains(&digit) {
                panic!(
                    "apps.toml: `{}` shortcut_digit must be in 1..=9, found {digit}",
                    entry.app_type
                );
            }
            if !seen_digits.insert(digit) {
                panic!("apps.toml: shortcut_digit {digit} is assigned twice");
            }
        }
    }

    for (id, _) in KNOWN_APP_TYPES {
        if !seen_types.contains(id) {
            panic!("apps.toml: missing entry for app_type `{id}`");
        }
    }
}

fn render(manifest: &AppCatalogManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/// Build-time generated application catalog, in manifest order.");
    let _ = writeln!(
        out,
        "pub(crate) static APP_CATALOG: [AppCatalogEntry; {}] = [",
        manifest.app.len()
    );
    for entry in &manifest.app {
        let shortcut = match entry.shortcut_digit {
            Some(digit) => format!("Some({digit})"),
            None => "None".to_string(),
        };
        let _ = writeln!(
            out,
            "    AppCatalogEntry {{ app_type: AppType::{variant}, title: {title:?}, \
             launcher_label: {launcher:?}, description: {description:?}, \
             desktop_label: {desktop:?}, show_on_desktop: {show}, shortcut_digit: {shortcut}, \
             icon_position: WindowPosition {{ x: {ix}, y: {iy} }}, \
             window_position: WindowPosition {{ x: {wx}, y: {wy} }}, \
             window_size: WindowSize {{ width: {ww}, height: {wh} }} }},",
            variant = variant_for(&entry.app_type),
            title = entry.title,
            launcher = entry.launcher_label,
            description = entry.description,
            desktop = entry.desktop_label,
            show = entry.show_on_desktop,
            ix = entry.icon_position.x,
            iy = entry.icon_position.y,
            wx = entry.window.x,
            wy = entry.window.y,
            ww = entry.window.width,
            wh = entry.window.height,
        );
    }
    let _ = writeln!(out, "];\n");

    let _ = writeln!(out, "/// Index of `app_type` in [`APP_CATALOG`].");
    let _ = writeln!(
        out,
        "pub(crate) const fn catalog_index(app_type: AppType) -> usize {{"
    );
    let _ = writeln!(out, "    match app_type {{");
    for (index, entry) in manifest.app.iter().enumerate() {
        let _ = writeln!(
            out,
            "        AppType::{} => {index},",
            variant_for(&entry.app_type)
        );
    }
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppCatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, render(&manifest))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
