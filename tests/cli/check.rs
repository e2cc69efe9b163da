use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN_LOCALE: &str = r#"
export default {
  common: {
    hello: "Hi",
  },
  page: {
    title: "Welcome",
    footer: "Footer",
  },
};
"#;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "shared/locales/en.ts",
            r#"export default { common: { hello: "Hi" }, page: { title: "Welcome" } };"#,
        ),
        (
            "src/Page.tsx",
            r#"
export function Page() {
  return <h1 title={t('hello')}>{t('page.title')}</h1>;
}
"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 2 translation entries
    Found 2 translation references
    Missing translations:
    Unused translations:
    ✓ Checked 2 source files, 1 locale file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_and_unused() -> Result<()> {
    let test = CliTest::with_files(&[
        ("shared/locales/en.ts", EN_LOCALE),
        (
            "src/app.tsx",
            "export const App = () => (\n  <p>{t('hello')} {t('page.title')} {t('missingKey')}</p>\n);\n",
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Found 3 translation entries
    Found 3 translation references
    Missing translations:
    common.missingKey src/app.tsx:1
    Unused translations:
    en page.footer
    ✘ 1 missing, 1 unused translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_fail_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('missingKey');")?;

    assert_cmd_snapshot!(test.check_command().arg("--no-fail"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 0 translation entries
    Found 1 translation reference
    Missing translations:
    common.missingKey src/app.ts:0
    Unused translations:
    ✘ 1 missing, 0 unused translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fail_on_findings_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".i18nkeysrc.json", r#"{ "failOnFindings": false }"#),
        ("src/app.ts", "t('missingKey');"),
    ])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 0 translation entries
    Found 1 translation reference
    Missing translations:
    common.missingKey src/app.ts:0
    Unused translations:
    ✘ 1 missing, 0 unused translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_duplicate_call_sites_are_kept() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('gone.key');\nt('gone.key');\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Found 0 translation entries
    Found 2 translation references
    Missing translations:
    gone.key src/app.ts:0
    gone.key src/app.ts:1
    Unused translations:
    ✘ 2 missing, 0 unused translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_collapse_duplicates() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('gone.key');\nt('gone.key');\n")?;

    assert_cmd_snapshot!(test.check_command().arg("--collapse-duplicates"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Found 0 translation entries
    Found 1 translation reference
    Missing translations:
    gone.key src/app.ts:0
    Unused translations:
    ✘ 1 missing, 0 unused translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_overrides_naming() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18nkeysrc.json",
            r#"{
              "localeDirectoryMarker": "i18n/",
              "defaultNamespace": "app",
              "translationFunctionName": "__"
            }"#,
        ),
        ("i18n/en.js", r#"export default { app: { greeting: "Hello" } };"#),
        ("src/app.js", r#"__("greeting"); t("not.counted");"#),
    ])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 1 translation entry
    Found 1 translation reference
    Missing translations:
    Unused translations:
    ✓ Checked 2 source files, 1 locale file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_source_root_inside_locale_directory() -> Result<()> {
    let test = CliTest::with_files(&[
        ("shared/locales/en.ts", r#"export default { a: { b: "x" } };"#),
        ("shared/app.ts", r#"t("a.b");"#),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "shared", "-v"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 1 translation entry
    en a.b
    Found 1 translation reference
    a.b app.ts:0
    Missing translations:
    Unused translations:
    ✓ Checked 2 source files, 1 locale file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_parse_errors_are_not_fatal() -> Result<()> {
    let test = CliTest::with_files(&[
        ("shared/locales/en.ts", r#"export default { a: { b: "x" } };"#),
        ("src/broken.ts", "export const = ;"),
        ("src/app.ts", "t('a.b');"),
    ])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 1 translation entry
    Found 1 translation reference
    Missing translations:
    Unused translations:
    ✓ Checked 2 source files, 1 locale file - no issues found

    ----- stderr -----
    warning: src/broken.ts [PARSE ERROR]
    ");

    Ok(())
}

#[test]
fn test_missing_source_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "does-not-exist"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Source root '[TEMP]/does-not-exist' does not exist.
    Hint: Check your '--source-root' argument or 'sourceRoot' setting.
    ");

    Ok(())
}

#[test]
fn test_node_modules_ignored_by_default() -> Result<()> {
    let test = CliTest::with_files(&[
        ("node_modules/lib/index.js", "t('vendor.key');"),
        ("src/app.ts", "export const x = 1;"),
    ])?;

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

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_files(&[
        ("shared/locales/en.ts", EN_LOCALE),
        ("src/app.ts", "t('hello');\nt('nope');"),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--format", "json"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "sourceFiles": 2,
      "localeFiles": 1,
      "entries": 3,
      "references": 2,
      "missing": [
        {
          "keyPath": "common.nope",
          "location": {
            "filePath": "src/app.ts",
            "line": 1
          }
        }
      ],
      "unused": [
        {
          "language": "en",
          "keyPath": "page.title",
          "value": "Welcome",
          "location": {
            "filePath": "shared/locales/en.ts",
            "line": 6
          }
        },
        {
          "language": "en",
          "keyPath": "page.footer",
          "value": "Footer",
          "location": {
            "filePath": "shared/locales/en.ts",
            "line": 7
          }
        }
      ],
      "parseErrors": []
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_verbose_lists_entries_and_references() -> Result<()> {
    let test = CliTest::with_files(&[
        ("shared/locales/en.ts", r#"export default { a: { b: "x" } };"#),
        ("src/app.ts", "t('a.b');"),
    ])?;

    assert_cmd_snapshot!(test.command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Found 1 translation entry
    en a.b
    Found 1 translation reference
    a.b src/app.ts:0
    Missing translations:
    Unused translations:
    ✓ Checked 2 source files, 1 locale file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--version"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    i18n-keys 0.1.0

    ----- stderr -----
    ");

    Ok(())
}
