//! End-to-end tests for the `strata` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const BOOTSTRAP: &str = "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n];\n";

/// `strata` running inside `dir`, isolated from the user's config directory.
fn strata(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("strata");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("bootstrap")).unwrap();
    fs::write(temp.path().join("bootstrap/providers.php"), BOOTSTRAP).unwrap();
    temp
}

fn project_with_module(name: &str) -> TempDir {
    let temp = project();
    strata(temp.path()).args(["new", name]).assert().success();
    temp
}

fn read(dir: &TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join(path)).unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn argument_errors_exit_with_two() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["publish", "--config-only", "--templates-only"])
        .assert()
        .code(2);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_module_and_registers_provider() {
    let temp = project();
    strata(temp.path())
        .args(["new", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module 'Blog' ready"));

    let provider = read(&temp, "app/Modules/Blog/Providers/BlogServiceProvider.php");
    assert!(provider.contains("namespace App\\Modules\\Blog\\Providers;"));
    assert!(provider.contains("class BlogServiceProvider"));
    for file in ["config/config.php", "routes/web.php", "routes/api.php", "routes/console.php"] {
        assert!(temp.path().join("app/Modules/Blog").join(file).is_file(), "{file}");
    }
    assert!(temp.path().join("app/Modules/Blog/Domain/Entities").is_dir());

    let bootstrap = read(&temp, "bootstrap/providers.php");
    assert!(bootstrap.contains("use App\\Modules\\Blog\\Providers\\BlogServiceProvider;"));
    assert!(bootstrap.contains("BlogServiceProvider::class,"));
}

#[test]
fn new_twice_skips_and_registers_once() {
    let temp = project_with_module("Blog");
    let first = read(&temp, "bootstrap/providers.php");

    strata(temp.path())
        .args(["new", "Blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert_eq!(read(&temp, "bootstrap/providers.php"), first);
}

#[test]
fn no_register_leaves_bootstrap_untouched() {
    let temp = project();
    strata(temp.path())
        .args(["new", "Blog", "--no-register"])
        .assert()
        .success();

    assert_eq!(read(&temp, "bootstrap/providers.php"), BOOTSTRAP);
}

#[test]
fn invalid_name_fails_without_stopping_the_batch() {
    let temp = project();
    strata(temp.path())
        .args(["new", "123Blog", "Shop"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid name '123Blog'"))
        .stderr(predicate::str::contains("1 of 2 modules failed"));

    assert!(
        temp.path()
            .join("app/Modules/Shop/Providers/ShopServiceProvider.php")
            .is_file()
    );
}

#[test]
fn missing_bootstrap_file_is_a_warning() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "Blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "register App\\Modules\\Blog\\Providers\\BlogServiceProvider manually",
        ));
}

// ── make / generate ───────────────────────────────────────────────────────────

#[test]
fn make_controller_in_existing_module() {
    let temp = project_with_module("Blog");
    strata(temp.path())
        .args(["make", "controller", "Blog", "Post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PostController.php"));

    let content = read(
        &temp,
        "app/Modules/Blog/Presentation/Http/Controllers/PostController.php",
    );
    assert!(content.contains("namespace App\\Modules\\Blog\\Presentation\\Http\\Controllers;"));
    assert!(content.contains("class PostController"));
}

#[test]
fn make_nested_entity() {
    let temp = project_with_module("Blog");
    strata(temp.path())
        .args(["make", "entity", "Blog", "Admin/Post"])
        .assert()
        .success();

    let content = read(&temp, "app/Modules/Blog/Domain/Entities/Admin/Post.php");
    assert!(content.contains("namespace App\\Modules\\Blog\\Domain\\Entities\\Admin;"));
}

#[test]
fn make_existing_file_is_skipped_unless_forced() {
    let temp = project_with_module("Blog");
    let path = "app/Modules/Blog/Presentation/Http/Controllers/PostController.php";
    strata(temp.path())
        .args(["make", "controller", "Blog", "Post"])
        .assert()
        .success();
    fs::write(temp.path().join(path), "custom").unwrap();

    strata(temp.path())
        .args(["make", "controller", "Blog", "Post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(read(&temp, path), "custom");

    strata(temp.path())
        .args(["make", "controller", "Blog", "Post", "--force"])
        .assert()
        .success();
    assert_ne!(read(&temp, path), "custom");
}

#[test]
fn make_in_missing_module_fails() {
    let temp = project();
    strata(temp.path())
        .args(["make", "controller", "Shop", "Post"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Module 'Shop' does not exist"))
        .stderr(predicate::str::contains("strata new Shop"));
}

#[test]
fn generate_unknown_key_lists_valid_keys() {
    let temp = project_with_module("Blog");
    strata(temp.path())
        .args(["generate", "widget", "Blog", "Thing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown component type 'widget'"))
        .stderr(predicate::str::contains("controller"));
}

#[test]
fn generate_custom_key_from_project_config() {
    let temp = project();
    fs::write(
        temp.path().join("strata.toml"),
        "[modules.paths]\npolicy = \"Application/Policies\"\n",
    )
    .unwrap();
    strata(temp.path()).args(["new", "Blog"]).assert().success();

    strata(temp.path())
        .args(["generate", "policy", "Blog", "Post"])
        .assert()
        .success();

    let content = read(&temp, "app/Modules/Blog/Application/Policies/Post.php");
    assert!(content.contains("namespace App\\Modules\\Blog\\Application\\Policies;"));
    assert!(content.contains("final class Post"));
}

// ── list / show ───────────────────────────────────────────────────────────────

#[test]
fn list_without_modules() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn list_json_reports_route_files() {
    let temp = project_with_module("Shop");
    strata(temp.path()).args(["new", "Blog"]).assert().success();
    fs::remove_file(temp.path().join("app/Modules/Blog/routes/api.php")).unwrap();

    let out = strata(temp.path())
        .args(["list", "--routes", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let modules: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<&str> = modules
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Blog", "Shop"]);
    assert_eq!(modules[0]["namespace"], "App\\Modules\\Blog");
    assert_eq!(modules[0]["routes"]["web"], true);
    assert_eq!(modules[0]["routes"]["api"], false);
}

#[test]
fn show_module_json() {
    let temp = project_with_module("Blog");
    fs::create_dir_all(temp.path().join("app/Modules/Blog/Legacy")).unwrap();

    let out = strata(temp.path())
        .args(["show", "Blog", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let details: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(details["name"], "Blog");
    assert_eq!(
        details["provider_class"],
        "App\\Modules\\Blog\\Providers\\BlogServiceProvider"
    );
    assert_eq!(details["registered"], true);
    assert_eq!(details["folders"]["additional"], serde_json::json!(["Legacy"]));
    assert_eq!(details["folders"]["missing_scaffold"], serde_json::json!([]));
}

#[test]
fn show_text_describes_module() {
    let temp = project_with_module("Blog");
    strata(temp.path())
        .args(["show", "Blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Namespace:     App\\Modules\\Blog"))
        .stdout(predicate::str::contains("Registered:    yes"));
}

#[test]
fn show_missing_module_fails() {
    let temp = project();
    strata(temp.path())
        .args(["show", "Blog"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Module 'Blog' does not exist"));
}

// ── publish ───────────────────────────────────────────────────────────────────

#[test]
fn publish_writes_config_and_stubs_once() {
    let temp = TempDir::new().unwrap();
    strata(temp.path()).arg("publish").assert().success();

    let config = read(&temp, "strata.toml");
    assert!(config.contains("[modules]"));
    assert!(config.contains("base_path = \"app/Modules\""));
    assert!(temp.path().join("stubs/modules/controller.stub").is_file());
    assert!(temp.path().join("stubs/modules/scaffold/provider.stub").is_file());

    strata(temp.path())
        .arg("publish")
        .assert()
        .success()
        .stdout(predicate::str::contains("Published 0 file(s)"));
}

#[test]
fn publish_config_only() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["publish", "--config-only"])
        .assert()
        .success();

    assert!(temp.path().join("strata.toml").is_file());
    assert!(!temp.path().join("stubs").exists());
}

#[test]
fn published_stub_overrides_builtin() {
    let temp = project_with_module("Blog");
    strata(temp.path())
        .args(["publish", "--templates-only"])
        .assert()
        .success();
    fs::write(
        temp.path().join("stubs/modules/controller.stub"),
        "<?php // custom {{ class }} in {{ module }}\n",
    )
    .unwrap();

    strata(temp.path())
        .args(["make", "controller", "Blog", "Post"])
        .assert()
        .success();

    assert_eq!(
        read(
            &temp,
            "app/Modules/Blog/Presentation/Http/Controllers/PostController.php"
        ),
        "<?php // custom PostController in Blog\n"
    );
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_defaults_file_and_env() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["config", "get", "modules.base_path"])
        .assert()
        .success()
        .stdout(predicate::str::diff("app/Modules\n"));

    fs::write(
        temp.path().join("strata.toml"),
        "[modules]\nbase_path = \"src/Modules\"\n",
    )
    .unwrap();
    strata(temp.path())
        .args(["config", "get", "modules.base_path"])
        .assert()
        .success()
        .stdout(predicate::str::diff("src/Modules\n"));

    strata(temp.path())
        .env("STRATA__MODULES__BASE_PATH", "lib/Modules")
        .args(["config", "get", "modules.base_path"])
        .assert()
        .success()
        .stdout(predicate::str::diff("lib/Modules\n"));
}

#[test]
fn config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["config", "get", "modules.nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key 'modules.nope'"));
}

#[test]
fn malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("strata.toml"), "[modules\n").unwrap();
    strata(temp.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not load strata.toml"));
}

#[test]
fn explicit_config_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("conf")).unwrap();
    fs::write(
        temp.path().join("conf/modules.toml"),
        "[modules]\nbase_namespace = \"Acme\\\\Modules\"\n",
    )
    .unwrap();

    strata(temp.path())
        .args(["--config", "conf/modules.toml", "config", "get", "modules.base_namespace"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Acme\\Modules\n"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}
