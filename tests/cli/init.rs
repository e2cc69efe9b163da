use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18nkeysrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".i18nkeysrc.json")?;
    let json: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(json["localeDirectoryMarker"], "shared/locales/");
    assert_eq!(json["namespaceSeparator"], ".");
    assert_eq!(json["defaultNamespace"], "common");
    assert_eq!(json["translationFunctionName"], "t");
    assert_eq!(json["duplicates"], "keep");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nkeysrc.json", r#"{ "defaultNamespace": "mine" }"#)?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .i18nkeysrc.json already exists
    ");

    assert!(test.read_file(".i18nkeysrc.json")?.contains("mine"));

    Ok(())
}

#[test]
fn test_generated_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.ts", "export const x = 1;")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 0 translation entries
    Found 0 translation references
    Missing translations:
    Unused translations:
    ✓ Checked 1 source file, 0 locale files - no issues found

    ----- stderr -----
    ");
    assert!(test.root().join(".i18nkeysrc.json").exists());

    Ok(())
}
