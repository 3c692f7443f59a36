//! Integration tests for the dirpick binary.
//!
//! These tests run the real executable against temporary directory trees
//! and check stdout, stderr, and exit status.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const DATES: [&str; 5] = [
    "2015-09-15",
    "2015-09-20",
    "2015-10-10",
    "2015-12-13",
    "2016-05-17",
];

const VERSIONS: [&str; 5] = [
    "41.1.102.0",
    "41.1.103.0",
    "41.1.104.0",
    "41.1.104.1",
    "41.1.105.0",
];

// =============================================================================
// Test Fixtures
// =============================================================================

/// A temporary home plus a base directory to resolve in.
struct Fixture {
    home: TempDir,
    base: TempDir,
}

impl Fixture {
    fn new(children: &[&str]) -> Self {
        let home = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        for name in children {
            base.child(name).create_dir_all().unwrap();
        }
        Self { home, base }
    }

    fn base_str(&self) -> String {
        self.base.path().display().to_string()
    }

    /// `dirpick` isolated from the user's config and environment.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirpick").unwrap();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("DIRPICK_CONFIG", self.home.path().join("config.toml"))
            .env_remove("DIRPICK_BASE")
            .env_remove("DIRPICK_LOG");
        cmd
    }

    fn resolve(&self, mask: &str) -> assert_cmd::assert::Assert {
        self.cmd()
            .arg("resolve")
            .arg(format!("{}|{}", self.base_str(), mask))
            .assert()
    }

    fn expect_path(&self, mask: &str, child: &str) {
        let expected = format!("{}\n", self.base.path().join(child).display());
        self.resolve(mask).success().stdout(expected);
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn predecessor_version() {
    let fx = Fixture::new(&VERSIONS);
    fx.expect_path("41.1.104.2", "41.1.104.1");
}

#[test]
fn predecessor_date() {
    let fx = Fixture::new(&DATES);
    fx.expect_path("2016-01-01", "2015-12-13");
}

#[test]
fn latest_sentinel() {
    let fx = Fixture::new(&DATES);
    fx.expect_path("latest", "2016-05-17");
}

#[test]
fn exact_match() {
    let fx = Fixture::new(&[&DATES[..], &VERSIONS[..]].concat());
    fx.expect_path("41.1.103.0", "41.1.103.0");
    fx.expect_path("2015-10-10", "2015-10-10");
}

#[test]
fn no_predecessor_falls_back_to_latest_date() {
    let fx = Fixture::new(&[&DATES[..], &VERSIONS[..]].concat());
    fx.expect_path("1.0.0.0", "2016-05-17");
}

#[test]
fn files_are_not_candidates() {
    let fx = Fixture::new(&["41.1.104.0"]);
    fx.base.child("41.1.104.1").write_str("not a directory").unwrap();
    fx.expect_path("41.1.104.2", "41.1.104.0");
}

#[test]
fn base_flag_with_bare_mask() {
    let fx = Fixture::new(&VERSIONS);
    let expected = format!("{}\n", fx.base.path().join("41.1.105.0").display());

    fx.cmd()
        .args(["resolve", "--base", &fx.base_str(), "latest"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn base_from_environment() {
    let fx = Fixture::new(&VERSIONS);

    fx.cmd()
        .env("DIRPICK_BASE", fx.base.path())
        .args(["resolve", "41.1.103.9"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("41.1.103.0\n"));
}

#[test]
fn base_from_config_file() {
    let fx = Fixture::new(&VERSIONS);
    fx.cmd()
        .args(["config", "set", "base", &fx.base_str()])
        .assert()
        .success();

    fx.cmd()
        .args(["resolve", "latest"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("41.1.105.0\n"));
}

#[test]
fn explain_goes_to_stderr() {
    let fx = Fixture::new(&VERSIONS);

    fx.cmd()
        .args(["resolve", "--base", &fx.base_str(), "41.1.104.2", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("41.1.104.1\n"))
        .stderr(predicate::str::contains("nearest earlier entry"));
}

#[test]
fn json_output() {
    let fx = Fixture::new(&DATES);

    let output = fx
        .cmd()
        .args(["resolve", "--base", &fx.base_str(), "2015-10-10", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "2015-10-10");
    assert_eq!(json["kind"], "exact");
    assert_eq!(json["variant"], "date");
}

// =============================================================================
// Failures and exit status
// =============================================================================

#[test]
fn invalid_mask_exits_3() {
    let fx = Fixture::new(&VERSIONS);
    fx.resolve("abc")
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("invalid mask 'abc'"));
}

#[test]
fn unreadable_base_exits_4() {
    let fx = Fixture::new(&[]);
    let missing = fx.base.path().join("missing");

    fx.cmd()
        .arg("resolve")
        .arg(format!("{}|latest", missing.display()))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot read directory"));
}

#[test]
fn empty_base_exits_5_for_any_mask() {
    let fx = Fixture::new(&[]);
    for mask in ["latest", "2016-01-01", "41.1.104.2"] {
        fx.resolve(mask).code(5);
    }
}

#[test]
fn unclassifiable_children_only_exits_5() {
    let fx = Fixture::new(&["notes", "41.1.104", "2015-9-1"]);
    fx.resolve("latest").code(5);
}

#[test]
fn malformed_query_exits_1() {
    let fx = Fixture::new(&VERSIONS);
    fx.cmd()
        .args(["resolve", "a|b|c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn usage_error_is_distinct_from_invalid_mask() {
    let fx = Fixture::new(&VERSIONS);
    fx.cmd().args(["resolve", "--nope", "latest"]).assert().code(2);
    fx.resolve("abc").code(3);
}

#[test]
fn missing_base_exits_1() {
    let fx = Fixture::new(&VERSIONS);
    fx.cmd()
        .args(["resolve", "latest"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No base directory"));
}

// =============================================================================
// Other commands
// =============================================================================

#[test]
fn bootstrap_flag_seeds_missing_base() {
    let fx = Fixture::new(&[]);
    let base = fx.base.child("Test");

    fx.cmd()
        .args(["resolve", "--bootstrap", "--base"])
        .arg(base.path())
        .arg("41.1.104.2")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("41.1.104.1\n"));

    base.child("2016-05-17").assert(predicate::path::is_dir());
}

#[test]
fn init_creates_samples_once() {
    let fx = Fixture::new(&[]);
    let base = fx.base.child("Test");

    fx.cmd()
        .arg("init")
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 10 sample directories"));

    base.child("41.1.105.0").assert(predicate::path::is_dir());

    fx.cmd()
        .arg("init")
        .arg(base.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("left unchanged"));
}

#[test]
fn list_shows_both_variants() {
    let fx = Fixture::new(&["2016-05-17", "41.1.104.1", "misc"]);

    fx.cmd()
        .args(["list", "--base", &fx.base_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dates:")
                .and(predicate::str::contains("Versions:"))
                .and(predicate::str::contains("misc").not()),
        );
}

#[test]
fn list_separates_long_identifiers_from_paths() {
    let fx = Fixture::new(&["41.1.104.100"]);
    let path = fx.base.path().join("41.1.104.100");

    fx.cmd()
        .args(["list", "--base", &fx.base_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("41.1.104.100 {}", path.display())));
}

#[test]
fn debug_flag_reports_config_source() {
    let fx = Fixture::new(&VERSIONS);

    fx.cmd()
        .args(["--debug", "resolve", "--base", &fx.base_str(), "latest"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug] config:"));

    fx.cmd()
        .args(["resolve", "--base", &fx.base_str(), "latest"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]").not());
}

#[test]
fn config_rejects_bad_separator() {
    let fx = Fixture::new(&[]);
    fx.cmd()
        .args(["config", "set", "separator", "."])
        .assert()
        .failure();
}

#[test]
fn completion_generates_script() {
    let fx = Fixture::new(&[]);
    fx.cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirpick"));
}

#[test]
fn version_flag_works() {
    let fx = Fixture::new(&[]);
    fx.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirpick"));
}
