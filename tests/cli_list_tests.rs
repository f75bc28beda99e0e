//! End-to-end tests for `icondex list` command.

use serde_json::json;

mod fixtures;
use fixtures::*;

fn list_json(repo: &CatalogRepo, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["list", "--json"];
    full.extend_from_slice(args);
    let output = repo.run(&full);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).expect("Should parse JSON output")
}

fn ids(result: &serde_json::Value) -> Vec<String> {
    result["icons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|icon| icon["id"].as_str().unwrap().to_string())
        .collect()
}

fn repo_with_stir_entries() -> CatalogRepo {
    let repo = CatalogRepo::valid();
    let mut linux_only = stir_entry("gimp", "GIMP", "design");
    linux_only["platforms"] = json!({ "windows": false, "mac": false, "linux": true });
    linux_only["description"] = json!("Image editor");

    let mut unsupported = stir_entry("legacy-tool", "Legacy Tool", "development");
    unsupported["platforms"] = json!({ "windows": false, "mac": false, "linux": false });

    repo.write_stir(&[
        stir_entry("vs-code", "VS Code", "development"),
        linux_only,
        unsupported,
    ]);
    repo
}

#[test]
fn test_list_defaults_to_any_supported_capability() {
    let repo = repo_with_stir_entries();

    let result = list_json(&repo, &[]);
    assert_eq!(result["catalog"], "STIR");
    assert_eq!(result["count"], 2);
    assert_eq!(ids(&result), vec!["vs-code", "gimp"]);
}

#[test]
fn test_list_search_matches_name_or_description() {
    let repo = repo_with_stir_entries();

    assert_eq!(ids(&list_json(&repo, &["--search", "vs"])), vec!["vs-code"]);
    assert_eq!(ids(&list_json(&repo, &["--search", "IMAGE"])), vec!["gimp"]);
}

#[test]
fn test_list_category_filter() {
    let repo = repo_with_stir_entries();

    assert_eq!(
        ids(&list_json(&repo, &["--category", "design"])),
        vec!["gimp"]
    );
    assert_eq!(list_json(&repo, &["--category", "all"])["count"], 2);
}

#[test]
fn test_list_capability_selection() {
    let repo = repo_with_stir_entries();

    assert_eq!(
        ids(&list_json(&repo, &["--capability", "linux"])),
        vec!["gimp"]
    );
    assert_eq!(
        list_json(&repo, &["--capability", "windows", "--capability", "linux"])["count"],
        2
    );
}

#[test]
fn test_list_beir_catalog_case_insensitive() {
    let repo = CatalogRepo::valid();

    let result = list_json(&repo, &["--catalog", "beir"]);
    assert_eq!(result["catalog"], "BEIR");
    assert_eq!(ids(&result), vec!["ublock-origin"]);
}

#[test]
fn test_list_rejects_unknown_capability_key() {
    let repo = CatalogRepo::valid();

    let output = repo.run(&["list", "--catalog", "BEIR", "--capability", "linux"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown browsers key 'linux'"));
}

#[test]
fn test_list_rejects_unknown_catalog() {
    let repo = CatalogRepo::valid();

    let output = repo.run(&["list", "--catalog", "NOPE"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown catalog: NOPE"));
}

#[test]
fn test_list_categories_across_catalogs() {
    let repo = CatalogRepo::valid();

    let result = list_json(&repo, &["--categories"]);
    assert_eq!(result["categories"], json!(["browser", "development", "privacy"]));
    assert_eq!(result["count"], 3);
}

#[test]
fn test_list_table_output() {
    let repo = CatalogRepo::valid();

    let output = repo.run(&["list"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout(&output);
    assert!(stdout.contains("STIR icons (2):"));
    assert!(stdout.contains("vs-code"));
    assert!(stdout.contains("windows,mac"));
}

#[test]
fn test_list_no_matches() {
    let repo = CatalogRepo::valid();

    let output = repo.run(&["list", "--search", "zzz-no-match"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No icons match the current filters."));
}
