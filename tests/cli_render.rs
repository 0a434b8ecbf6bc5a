mod common;

use common::TestContext;
use odoogen::domain::ComposeFile;
use odoogen::domain::compose::{DB_SERVICE, WEB_SERVICE};
use predicates::prelude::*;

fn render(ctx: &TestContext, args: &[&str]) -> ComposeFile {
    let output = ctx.cli().arg("render").args(args).output().unwrap();
    assert!(output.status.success(), "render failed: {}", String::from_utf8_lossy(&output.stderr));
    ComposeFile::from_yaml(&String::from_utf8(output.stdout).unwrap()).unwrap()
}

#[test]
fn render_prints_defaults_without_writing() {
    let ctx = TestContext::new();

    let compose = render(&ctx, &[]);

    assert_eq!(compose.service(WEB_SERVICE).unwrap().image, "odoo:17");
    assert_eq!(compose.service(WEB_SERVICE).unwrap().ports, vec!["8078:8069"]);
    assert_eq!(compose.service(DB_SERVICE).unwrap().image, "postgres:15");
    ctx.assert_nothing_written();
    assert!(!ctx.path("addons").exists());
}

#[test]
fn render_honours_version_and_overrides() {
    let ctx = TestContext::new();

    let compose = render(&ctx, &["--odoo-version", "13", "--port", "9000", "--postgres-version", "16"]);

    assert_eq!(compose.service(WEB_SERVICE).unwrap().image, "odoo:13.0");
    assert_eq!(compose.service(WEB_SERVICE).unwrap().ports, vec!["9000:8069"]);
    assert_eq!(compose.service(DB_SERVICE).unwrap().image, "postgres:16");
}

#[test]
fn render_is_deterministic() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(["r", "--odoo-version", "15"]).output().unwrap().stdout;
    let second = ctx.cli().args(["r", "--odoo-version", "15"]).output().unwrap().stdout;

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn unsupported_version_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--odoo-version", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported Odoo version '12'"));
}

#[test]
fn version_flag_prints_package_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
