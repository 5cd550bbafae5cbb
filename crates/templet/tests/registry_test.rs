//! Integration tests against the `fixtures/tmplt` site: two layout-mode
//! pages sharing the `basic` layout and one content-only page.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use templet::{Registry, RegistryConfig, Template};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tmplt")
}

fn content(name: &str) -> PathBuf {
    fixtures().join("content").join(name)
}

fn layout(name: &str) -> PathBuf {
    fixtures().join("layout").join(name)
}

/// Copy the fixture site into a temp dir so tests can edit it.
fn scratch_site() -> tempfile::TempDir {
    fn copy_dir(from: &Path, to: &Path) {
        fs::create_dir_all(to).unwrap();
        for entry in fs::read_dir(from).unwrap() {
            let entry = entry.unwrap();
            let target = to.join(entry.file_name());
            if entry.file_type().unwrap().is_dir() {
                copy_dir(&entry.path(), &target);
            } else {
                fs::copy(entry.path(), target).unwrap();
            }
        }
    }

    let dir = tempfile::tempdir().unwrap();
    copy_dir(&fixtures(), dir.path());
    dir
}

#[derive(Serialize)]
#[allow(non_snake_case)]
struct Visitor {
    Name: &'static str,
}

#[test]
fn test_layout_page_renders_through_layout() {
    let template = Template::with_layout(content("simple"), layout("basic"));
    template.initialize().unwrap();

    let page = template.render_to_string(&()).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Simple</title>"));
    assert!(page.contains("<header>templet</header>"));
    assert!(page.contains("<body class=\"guest\">"));
    assert!(page.contains("<p>This is a simple page.</p>"));
    assert_eq!(template.layout().unwrap().name(), "basic");
}

#[test]
fn test_layout_page_with_data() {
    let template = Template::with_layout(content("simple2"), layout("basic"));
    let page = template
        .render_to_string(&Visitor { Name: "John Doe" })
        .unwrap();
    assert!(page.contains("<title>Greeting</title>"));
    assert!(page.contains("<body class=\"john-doe\">"));
    assert!(page.contains("<p>Hello, John Doe!</p>"));
}

#[test]
fn test_data_is_html_escaped() {
    let template = Template::with_layout(content("simple2"), layout("basic"));
    let page = template
        .render_to_string(&Visitor {
            Name: "<script>alert(1)</script>",
        })
        .unwrap();
    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;"));
}

#[test]
fn test_page_without_layout_ignores_other_extensions() {
    let template = Template::new(content("nolayout"));
    let page = template.render_to_string(&()).unwrap();
    assert_eq!(page.trim(), "<p>Rendered without a layout.</p>");
    assert_eq!(template.template_names(), vec!["index.html"]);
}

#[test]
fn test_registry_from_fixture_config() {
    let registry = RegistryConfig::load_registry(&fixtures().join("templet.toml")).unwrap();

    assert!(registry.hot_reload());
    assert_eq!(registry.names(), vec!["nolayout", "simple", "simple2"]);
    assert!(registry.iter().all(|(_, t)| t.hot_reload()));

    let mut out = Vec::new();
    registry
        .render("simple2", &mut out, &Visitor { Name: "Jane" })
        .unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Hello, Jane!"));
}

#[test]
fn test_registry_lookup_by_derived_name() {
    let mut registry = Registry::new();
    registry
        .insert(Template::with_layout(content("simple"), layout("basic")))
        .unwrap();

    assert!(registry.get("simple").is_ok());
    assert!(registry.get("basic").unwrap_err().is_not_found());
}

#[test]
fn test_registry_hot_reload_rescans_filesystem() {
    let site = scratch_site();
    let simple = site.path().join("content/simple");

    let mut registry = Registry::new().with_hot_reload(true);
    registry
        .insert(Template::with_layout(&simple, site.path().join("layout/basic")))
        .unwrap();
    let template = registry.get("simple").unwrap();

    assert!(template.render_to_string(&()).unwrap().contains("<title>Simple</title>"));

    fs::write(simple.join("title.html"), "Renamed").unwrap();
    assert!(template.render_to_string(&()).unwrap().contains("<title>Renamed</title>"));

    // Newly added files become available without reinserting.
    fs::write(simple.join("content.html"), "{% include \"extra.html\" %}").unwrap();
    fs::write(simple.join("extra.html"), "<p>extra</p>").unwrap();
    assert!(template.render_to_string(&()).unwrap().contains("<p>extra</p>"));
}

#[test]
fn test_initialize_all_halts_on_missing_directory() {
    let site = scratch_site();
    let config_path = site.path().join("templet.toml");
    let registry = RegistryConfig::load_registry(&config_path).unwrap();

    fs::remove_dir_all(site.path().join("layout/basic")).unwrap();
    let err = registry.initialize_all().unwrap_err();
    assert!(err.is_path());

    // No rollback: the registry keeps every entry, and pages that do not
    // depend on the missing layout still render.
    assert_eq!(registry.len(), 3);
    assert!(registry.get("nolayout").unwrap().render_to_string(&()).is_ok());
    assert!(registry.get("simple").unwrap().render_to_string(&()).unwrap_err().is_path());
}

#[test]
fn test_nonexistent_content_dir() {
    let template = Template::new("path/to/nonexistent");
    assert!(template.initialize().unwrap_err().is_path());

    let mut registry = Registry::new();
    assert!(registry.insert(Template::new("path/to/nonexistent")).unwrap_err().is_path());
    assert!(registry.get("nonexistent").unwrap_err().is_not_found());
}
