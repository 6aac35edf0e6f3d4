use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

const GENERATED: [&str; 5] = [
    ".gitignore",
    "Makefile",
    "vivado_project.sh",
    "vivado_project.bat",
    "vivado_project.tcl",
];

fn flt_tool(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flt-tool");
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("NO_GRAPHICS", "1");
    cmd
}

/// `top.flt` with one leaf and a nested file list in `sub/`.
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("top.flt")
        .write_str("# top level\na.v\n\nsub/nested.flt\n")
        .unwrap();
    temp.child("sub/nested.flt").write_str("b.v\n").unwrap();
    temp
}

fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    flt_tool(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    flt_tool(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print-only"));
}

#[test]
fn test_print_only_lists_resolved_files() {
    let temp = setup_project();
    let expected = format!(
        "{}\n{}\n",
        slash(&temp.path().join("a.v")),
        slash(&temp.path().join("sub/b.v"))
    );

    flt_tool(temp.path())
        .args([temp.path().join("top.flt").to_str().unwrap(), "-p"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    temp.child("vivado_build").assert(predicate::path::missing());
}

#[test]
fn test_print_only_accepts_relative_path() {
    let temp = setup_project();

    flt_tool(temp.path())
        .args(["-p", "top.flt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/sub/b.v"));
}

#[test]
fn test_self_recursive() {
    let temp = TempDir::new().unwrap();
    temp.child("self_recursive.flt")
        .write_str("a.v\nself_recursive.flt\n")
        .unwrap();

    flt_tool(temp.path())
        .args(["self_recursive.flt", "-p", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.v").count(1))
        .stderr(predicate::str::contains("is already parsed, so ignore"));
}

#[test]
fn test_cycle_ref() {
    let temp = TempDir::new().unwrap();
    temp.child("cycle_ref_a.flt")
        .write_str("a.v\ncycle_ref_b.flt\n")
        .unwrap();
    temp.child("cycle_ref_b.flt")
        .write_str("b.v\ncycle_ref_a.flt\n")
        .unwrap();

    flt_tool(temp.path())
        .args(["cycle_ref_a.flt", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.v").count(1))
        .stdout(predicate::str::contains("b.v").count(1));
}

#[rstest]
#[case::missing_file("missing.flt", "is not a regular file")]
#[case::directory("sub", "is not a regular file")]
#[case::wrong_extension("top.f", "should have extension .flt")]
#[case::uppercase_extension("top.FLT", "should have extension .flt")]
fn test_invalid_input_exits_with_1(#[case] input: &str, #[case] message: &str) {
    let temp = TempDir::new().unwrap();
    temp.child("sub").create_dir_all().unwrap();
    temp.child("top.f").write_str("a.v\n").unwrap();
    temp.child("top.FLT").write_str("a.v\n").unwrap();

    flt_tool(temp.path())
        .arg(input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(message));

    temp.child("vivado_build").assert(predicate::path::missing());
}

#[test]
fn test_missing_nested_file_exits_with_1() {
    let temp = TempDir::new().unwrap();
    temp.child("top.flt").write_str("a.v\ngone.flt\n").unwrap();

    flt_tool(temp.path())
        .args(["top.flt", "-p"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gone.flt"));
}

#[test]
fn test_generate_writes_build_files() {
    let temp = setup_project();

    flt_tool(temp.path())
        .arg("top.flt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let build_dir = temp.child("vivado_build");
    build_dir.assert(predicate::path::is_dir());
    for name in GENERATED {
        build_dir.child(name).assert(predicate::path::is_file());
    }

    build_dir.child("vivado_project.tcl").assert(
        predicate::str::contains("set project_name \"top\"")
            .and(predicate::str::contains(slash(&temp.path().join("a.v"))))
            .and(predicate::str::contains(slash(&temp.path().join("sub/b.v")))),
    );
    build_dir
        .child("Makefile")
        .assert(predicate::str::contains("PROJECT := top"));
}

#[test]
fn test_generate_uses_config_and_overrides() {
    let temp = setup_project();
    temp.child("flt.toml")
        .write_str("part = \"xc7a35ticsg324-1L\"\nvivado_version = \"2023.2\"\nbuild_dir = \"out\"\n")
        .unwrap();

    flt_tool(temp.path())
        .args(["top.flt", "--name", "blinky", "--vivado-version", "2024.1"])
        .assert()
        .success();

    temp.child("vivado_build").assert(predicate::path::missing());
    temp.child("out/vivado_project.tcl").assert(
        predicate::str::contains("set project_name \"blinky\"")
            .and(predicate::str::contains("set part \"xc7a35ticsg324-1L\""))
            .and(predicate::str::contains("2024.1")),
    );
}

#[test]
fn test_invalid_config_exits_with_1() {
    let temp = setup_project();
    temp.child("flt.toml").write_str("no_such_key = 1\n").unwrap();

    flt_tool(temp.path())
        .arg("top.flt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_existing_files_are_overwritten_with_warning() {
    let temp = setup_project();
    temp.child("vivado_build/Makefile").write_str("stale").unwrap();

    flt_tool(temp.path())
        .arg("top.flt")
        .assert()
        .success()
        .stderr(predicate::str::contains("it will be overwritten"));

    temp.child("vivado_build/Makefile")
        .assert(predicate::str::contains("PROJECT := top"));
}

#[test]
fn test_build_dir_taken_by_file_exits_with_2() {
    let temp = setup_project();
    temp.child("vivado_build").write_str("not a folder").unwrap();

    flt_tool(temp.path())
        .arg("top.flt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a folder"));
}

#[test]
fn test_target_taken_by_directory_exits_with_2() {
    let temp = setup_project();
    temp.child("vivado_build/Makefile").create_dir_all().unwrap();

    flt_tool(temp.path())
        .arg("top.flt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a regular file"));

    temp.child("vivado_build/.gitignore")
        .assert(predicate::path::missing());
}

#[test]
fn test_quiet_hides_overwrite_warning() {
    let temp = setup_project();
    temp.child("vivado_build/Makefile").write_str("stale").unwrap();

    flt_tool(temp.path())
        .args(["top.flt", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("overwritten").not());
}
