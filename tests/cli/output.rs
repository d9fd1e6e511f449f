use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_output_file() -> Result<()> {
    let test = CliTest::with_file("a.h", "#include <vector>\n#include <map>\n")?;

    let mut cmd = test.command();
    cmd.args(["--output", "../stable.h"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("stable.h")?,
        "#include <map>\n#include <vector>\n"
    );

    Ok(())
}

#[test]
fn test_output_file_with_guard() -> Result<()> {
    let test = CliTest::with_file("src/view.cpp", "#include <QGraphicsView>\n")?;
    let output = test.root().join("shared").join("stable.h");
    std::fs::create_dir_all(output.parent().unwrap())?;

    let mut cmd = test.command();
    cmd.arg("--guard").arg("STABLE_H").arg("-o").arg(&output);

    let result = cmd.output()?;
    assert!(result.status.success());
    assert!(result.stdout.is_empty());

    assert_eq!(
        test.read_file("shared/stable.h")?,
        "#ifndef STABLE_H\n#define STABLE_H\n\n#include <QGraphicsView>\n\n#endif // STABLE_H\n"
    );

    Ok(())
}

#[test]
fn test_existing_output_is_rescanned() -> Result<()> {
    let test = CliTest::with_file("src/a.cpp", "#include <QTimer>\n")?;
    test.write_file("shared/stable.h", "#include <QPointer>\n")?;

    let mut cmd = test.command();
    cmd.args(["-o", "../shared/stable.h"]);
    assert!(cmd.output()?.status.success());

    assert_eq!(
        test.read_file("shared/stable.h")?,
        "#include <QPointer>\n#include <QTimer>\n"
    );

    Ok(())
}

#[test]
fn test_invalid_guard_fails() -> Result<()> {
    let test = CliTest::with_file("a.h", "#include <map>\n")?;

    let output = test.command().args(["--guard", "STABLE-H"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Invalid --guard value"));

    Ok(())
}
