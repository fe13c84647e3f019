//! End-to-end plugin sessions across two files sharing one client storage.

use std::path::PathBuf;

use sl_app::messages;
use sl_app::{DispatchError, RunRequest};
use sl_core::ports::{ClientStoragePort, StyleBinding};
use sl_core::{LibraryId, LocalId, NodeId, StyleField, SuggestionRecord};
use sl_infra::selection::SelectedNode;
use sl_infra::ui::{CollectedResults, ResultEvent};
use stylelib_lib::bootstrap::{local_host, LocalHost, PluginConfig};
use stylelib_lib::{build_runtime, PluginRuntime};
use tempfile::TempDir;

const BRAND: &str = r#"{
    "file_name": "Brand",
    "paint_styles": [
        {"id": "S:1", "key": "brand-primary", "name": "Primary",
         "paints": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}]},
        {"id": "S:2", "key": "brand-draft", "name": "_drafts/Red",
         "paints": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}]}
    ],
    "text_styles": [
        {"id": "S:3", "key": "brand-body", "name": "Body", "font_size": 16,
         "line_height": {"unit": "PIXELS", "value": 24}}
    ]
}"#;

const PRODUCT: &str = r#"{
    "file_name": "Product",
    "paint_styles": [
        {"id": "S:10", "key": "product-accent", "name": "Accent",
         "paints": [{"type": "SOLID", "color": {"r": 0, "g": 1, "b": 0}}]}
    ],
    "importable": {"brand-primary": "S:77"}
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn storage_dir(&self) -> PathBuf {
        self.dir.path().join("client-storage")
    }

    async fn open(&self, catalog: &str, selection: Vec<SelectedNode>) -> LocalHost {
        let path = self.write_catalog(catalog);
        local_host(&self.storage_dir(), &path, selection).await.unwrap()
    }

    fn write_catalog(&self, catalog: &str) -> PathBuf {
        let value: serde_json::Value = serde_json::from_str(catalog).unwrap();
        let name = value["file_name"].as_str().unwrap().to_string();
        let path = self.dir.path().join(format!("{name}.json"));
        std::fs::write(&path, catalog).unwrap();
        path
    }
}

/// A fresh plugin invocation in the given file.
fn invoke(host: &LocalHost) -> PluginRuntime {
    build_runtime(host.ports(), &PluginConfig::default())
}

async fn suggestions(host: &LocalHost, key: &str, query: &str) -> Vec<SuggestionRecord> {
    let results = CollectedResults::new();
    invoke(host).on_input(key, query, &results).await.unwrap();
    results.last_suggestions().unwrap_or_default()
}

/// Run request for the suggestion labelled `name`, as the host sends it
/// once the user confirms their pick.
fn request(command: &str, records: &[SuggestionRecord], name: &str) -> RunRequest {
    let record = records
        .iter()
        .find(|record| record.name == name)
        .unwrap_or_else(|| panic!("no suggestion named {name}"));
    RunRequest::new(command).with_parameter(command, record.data.clone())
}

fn last_message(host: &LocalHost) -> String {
    host.notifier.sent().last().unwrap().message.clone()
}

async fn publish(host: &LocalHost) {
    invoke(host).on_run(&RunRequest::new("publish")).await.unwrap();
}

#[tokio::test]
async fn publish_then_toggle_makes_styles_available_in_another_file() {
    let workspace = Workspace::new();
    let brand = workspace.open(BRAND, Vec::new()).await;
    publish(&brand).await;

    assert!(last_message(&brand)
        .starts_with("Published Library Style as 'Brand' (2 styles · "));
    assert_eq!(brand.lifecycle.close_count(), 1);

    let product = workspace
        .open(PRODUCT, vec![SelectedNode::new("n1", [StyleField::Fill])])
        .await;

    // Libraries are off until toggled.
    let fills = suggestions(&product, "fill", "").await;
    let names: Vec<_> = fills.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Accent · [local]"]);

    let libraries = suggestions(&product, "toggle", "").await;
    assert_eq!(libraries.len(), 1);
    assert!(libraries[0].name.starts_with("Brand · [2 styles · "));
    assert!(libraries[0].icon.is_some());

    invoke(&product)
        .on_run(&request("toggle", &libraries, &libraries[0].name))
        .await
        .unwrap();
    assert_eq!(
        last_message(&product),
        messages::toggled(&LibraryId::new("Brand"), true)
    );

    let fills = suggestions(&product, "fill", "").await;
    let names: Vec<_> = fills.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Accent · [local]", "Primary · [Brand]"]);

    let texts = suggestions(&product, "text", "body").await;
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].name, "Body · 16/24 · [Brand]");
}

#[tokio::test]
async fn applying_a_remote_style_imports_it_by_key() {
    let workspace = Workspace::new();
    let brand = workspace.open(BRAND, Vec::new()).await;
    publish(&brand).await;

    let product = workspace
        .open(
            PRODUCT,
            vec![
                SelectedNode::new("n1", [StyleField::Fill, StyleField::Stroke]),
                SelectedNode::new("n2", [StyleField::Text]),
            ],
        )
        .await;
    let libraries = suggestions(&product, "toggle", "").await;
    invoke(&product)
        .on_run(&request("toggle", &libraries, &libraries[0].name))
        .await
        .unwrap();

    let fills = suggestions(&product, "fill", "prim").await;
    assert_eq!(fills.len(), 1);
    invoke(&product)
        .on_run(&request("fill", &fills, "Primary · [Brand]"))
        .await
        .unwrap();

    assert_eq!(
        product.selection.binding(&NodeId::new("n1"), StyleField::Fill),
        Some(StyleBinding::Style(LocalId::new("S:77")))
    );
    // n2 has no fill; it is skipped rather than failing the run.
    assert_eq!(product.selection.binding_count(), 1);
}

#[tokio::test]
async fn deleted_library_is_skipped_by_files_that_still_have_it_on() {
    let workspace = Workspace::new();
    let brand = workspace.open(BRAND, Vec::new()).await;
    publish(&brand).await;

    let product = workspace.open(PRODUCT, Vec::new()).await;
    let libraries = suggestions(&product, "toggle", "").await;
    invoke(&product)
        .on_run(&request("toggle", &libraries, &libraries[0].name))
        .await
        .unwrap();

    // Removed from the publishing file; the product file keeps its toggle.
    let removable = suggestions(&brand, "delete", "").await;
    assert_eq!(removable.len(), 1);
    assert!(removable[0].icon.is_none());
    invoke(&brand)
        .on_run(&request("delete", &removable, &removable[0].name))
        .await
        .unwrap();
    assert_eq!(last_message(&brand), "Deleted Library Style 'Brand'");
    assert!(brand.storage.keys().await.unwrap().is_empty());

    let fills = suggestions(&product, "fill", "").await;
    let names: Vec<_> = fills.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Accent · [local]"]);

    let results = CollectedResults::new();
    invoke(&product).on_input("delete", "", &results).await.unwrap();
    assert!(results.last_suggestions().is_none());
    assert_eq!(
        results.events().last(),
        Some(&ResultEvent::Loading(messages::NO_LIBRARIES_TO_REMOVE.to_string()))
    );
}

#[tokio::test]
async fn republishing_reports_an_update() {
    let workspace = Workspace::new();
    let brand = workspace.open(BRAND, Vec::new()).await;
    publish(&brand).await;
    publish(&brand).await;

    assert!(last_message(&brand).starts_with("Updating Published Library Style as 'Brand'"));
    assert_eq!(brand.storage.keys().await.unwrap(), vec!["Brand".to_string()]);
}

#[tokio::test]
async fn failed_runs_notify_and_still_close() {
    let workspace = Workspace::new();
    let product = workspace.open(PRODUCT, Vec::new()).await;

    let fills = suggestions(&product, "fill", "").await;
    let result = invoke(&product)
        .on_run(&request("fill", &fills, "Accent · [local]"))
        .await;
    assert!(matches!(result, Err(DispatchError::EmptySelection)));
    assert_eq!(last_message(&product), messages::EMPTY_SELECTION);

    let result = invoke(&product).on_run(&RunRequest::new("recolor")).await;
    assert!(matches!(result, Err(DispatchError::InvalidCommand(_))));
    assert_eq!(last_message(&product), messages::INVALID_COMMAND);
    assert!(product.notifier.sent().last().unwrap().error);

    assert_eq!(product.lifecycle.close_count(), 2);
}

#[tokio::test]
async fn run_payload_is_accepted_as_json() {
    let workspace = Workspace::new();
    let product = workspace
        .open(PRODUCT, vec![SelectedNode::new("n1", [StyleField::Stroke])])
        .await;

    let payload = r#"{
        "command": "stroke",
        "parameters": {"stroke": {"source": "local", "id": "S:10"}}
    }"#;
    invoke(&product).on_run_json(payload).await.unwrap();

    assert_eq!(
        product.selection.binding(&NodeId::new("n1"), StyleField::Stroke),
        Some(StyleBinding::Style(LocalId::new("S:10")))
    );
}
