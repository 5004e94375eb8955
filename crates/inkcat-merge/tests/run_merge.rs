//! End-to-end tests for `run_merge` against feeds on disk.

use std::fs;
use std::path::{Path, PathBuf};

use inkcat_merge::{run_merge, MergeError, MergePaths, MergeSummary};

struct Layout {
    _dir: tempfile::TempDir,
    primary: PathBuf,
    supplementary: PathBuf,
    cosmetics: PathBuf,
    output: PathBuf,
}

impl Layout {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let raw = dir.path().join("listas_brutas");
        fs::create_dir_all(&raw).expect("create raw dir");
        Self {
            primary: raw.join("lista_json_ld.json"),
            supplementary: raw.join("lista_html.json"),
            cosmetics: raw.join("lista_cosmeticos.json"),
            output: dir
                .path()
                .join("listas_mescladas")
                .join("lista_final_mesclada.json"),
            _dir: dir,
        }
    }

    fn paths(&self) -> MergePaths<'_> {
        MergePaths {
            primary: &self.primary,
            supplementary: &self.supplementary,
            cosmetics: &self.cosmetics,
            output: &self.output,
        }
    }
}

fn write(path: &Path, json: &serde_json::Value) {
    fs::write(path, serde_json::to_string(json).expect("serialize")).expect("write feed");
}

#[test]
fn merges_feeds_and_writes_sorted_array() {
    let layout = Layout::new();
    write(
        &layout.primary,
        &serde_json::json!([
            {"name": "Acqua Ink EG", "availablePrice": ["R$ 50,00"], "materialType": "Outros"},
            {"name": "Cartucho RL 03", "availablePrice": ["R$ 120,00"], "materialType": "Agulhas e Cartuchos"}
        ]),
    );
    write(
        &layout.supplementary,
        &serde_json::json!([{"name": "Acqua Ink EG", "availableOptions": ["30ml"]}]),
    );
    write(
        &layout.cosmetics,
        &serde_json::json!([{"name": "After All 250ml", "materialType": "Higiene e Limpeza Corporal", "availablePrice": ["R$ 59,90"]}]),
    );

    let summary = run_merge(layout.paths()).expect("merge succeeds");
    assert_eq!(
        summary,
        MergeSummary {
            primary: 2,
            supplementary: 1,
            cosmetics: 1,
            merged: 3,
        }
    );

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&layout.output).expect("read output"))
            .expect("valid json");
    assert_eq!(
        written,
        serde_json::json!([
            {
                "name": "Acqua Ink EG",
                "brand": "Easy Glow",
                "availableOptions": ["30ml"],
                "availablePrice": ["R$ 50,00"],
                "materialType": "Tintas"
            },
            {
                "name": "After All 250ml",
                "brand": "Electric Ink",
                "availableOptions": [],
                "availablePrice": ["R$ 59,90"],
                "materialType": "Higiene e Limpeza Corporal"
            },
            {
                "name": "Cartucho RL 03",
                "brand": "Electric Ink",
                "availableOptions": [],
                "availablePrice": ["R$ 120,00"],
                "materialType": "Agulhas e Cartuchos"
            }
        ])
    );
}

#[test]
fn missing_cosmetics_feed_is_not_fatal() {
    let layout = Layout::new();
    write(&layout.primary, &serde_json::json!([{"name": "INTZ Red"}]));
    write(&layout.supplementary, &serde_json::json!([]));

    let summary = run_merge(layout.paths()).expect("merge succeeds");
    assert_eq!(summary.cosmetics, 0);
    assert_eq!(summary.merged, 1);
    assert!(layout.output.exists());
}

#[test]
fn missing_supplementary_feed_aborts_without_output() {
    let layout = Layout::new();
    write(&layout.primary, &serde_json::json!([{"name": "INTZ Red"}]));

    let err = run_merge(layout.paths()).unwrap_err();
    assert!(
        matches!(err, MergeError::MissingInputFile { ref path } if path.ends_with("lista_html.json")),
        "unexpected error: {err:?}"
    );
    assert!(!layout.output.exists());
}

#[test]
fn malformed_primary_feed_reports_path() {
    let layout = Layout::new();
    fs::write(&layout.primary, "not json").expect("write");
    write(&layout.supplementary, &serde_json::json!([]));

    let err = run_merge(layout.paths()).unwrap_err();
    assert!(err.to_string().contains("lista_json_ld.json"));
    assert!(matches!(err, MergeError::MalformedInput { .. }));
}

#[test]
fn rerun_produces_identical_bytes() {
    let layout = Layout::new();
    write(
        &layout.primary,
        &serde_json::json!([{"name": "Preto Tribal", "availablePrice": ["R$ 89,90"], "materialType": "Tintas"}]),
    );
    write(
        &layout.supplementary,
        &serde_json::json!([{"name": "Preto Tribal", "availableOptions": ["1oz", "2oz"]}]),
    );

    run_merge(layout.paths()).expect("first run");
    let first = fs::read(&layout.output).expect("read first");
    run_merge(layout.paths()).expect("second run");
    let second = fs::read(&layout.output).expect("read second");
    assert_eq!(first, second);
}
