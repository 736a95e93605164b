use hobu_core::{storage::SnapshotStore, CoreError, LedgerService};
use hobu_domain::{IncomeSources, MonthKey};
use hobu_storage_json::JsonSnapshotStorage;
use tempfile::tempdir;

fn sample_income() -> IncomeSources {
    IncomeSources::from_entries([("salary_fixed", 3_500.0), ("others", 500.0)])
}

#[test]
fn json_storage_round_trips_a_provisioned_ledger() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::new(dir.path().join("ledgers")).expect("create storage");

    let start = MonthKey::new(2025, 10).unwrap();
    let ledger =
        LedgerService::provision("Household", start, 12, &sample_income()).expect("provision");

    storage.save_ledger("family-2026", &ledger).expect("save ledger");
    let loaded = storage.load_ledger("family-2026").expect("load ledger");

    assert_eq!(loaded.name, "Household");
    assert_eq!(loaded.period_count(), 12);
    assert_eq!(loaded.span(), ledger.span());
    let period = loaded.period(start).expect("period exists");
    assert_eq!(period.total_income(), 4_000.0);
    assert_eq!(period.budget.essential, 2_000.0);
}

#[test]
fn save_leaves_no_temp_residue_and_slugs_names() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::new(dir.path().join("ledgers")).expect("create storage");

    let start = MonthKey::new(2026, 0).unwrap();
    let ledger =
        LedgerService::provision("Household", start, 1, &sample_income()).expect("provision");
    storage
        .save_ledger("Família Financeira", &ledger)
        .expect("save ledger");

    let path = storage.ledger_path("Família Financeira");
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));

    let residues: Vec<_> = std::fs::read_dir(dir.path().join("ledgers"))
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(residues.is_empty());
}

#[test]
fn list_and_delete_cover_the_ledger_directory() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::new(dir.path().join("ledgers")).expect("create storage");

    let start = MonthKey::new(2026, 0).unwrap();
    let ledger =
        LedgerService::provision("Household", start, 1, &sample_income()).expect("provision");
    storage.save_ledger("alpha", &ledger).expect("save alpha");
    storage.save_ledger("beta", &ledger).expect("save beta");

    let names = storage.list_ledgers().expect("list ledgers");
    assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);

    storage.delete_ledger("alpha").expect("delete alpha");
    let names = storage.list_ledgers().expect("list ledgers");
    assert_eq!(names, vec!["beta".to_string()]);
}

#[test]
fn loading_a_missing_ledger_reports_not_found() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSnapshotStorage::new(dir.path().join("ledgers")).expect("create storage");

    let err = storage.load_ledger("ghost").unwrap_err();
    assert!(matches!(err, CoreError::LedgerNotFound(name) if name == "ghost"));
}
