#![cfg(target_arch = "wasm32")]

use cep_form::platform::browser::storage::LocalStorageStore;
use cep_form::{FieldId, FormSnapshot, SnapshotStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_keeps_a_single_snapshot() {
    let store = LocalStorageStore::new("cep-form-test-formData");
    let first = FormSnapshot::from_values([(FieldId::Name, "Ana".to_string())]);
    let second = FormSnapshot::from_values(FieldId::ALL.map(|field| (field, field.label().to_string())));

    store.save(&first).unwrap();
    store.save(&second).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, second);
    assert!(loaded.is_complete());
}

#[wasm_bindgen_test]
fn missing_key_loads_as_none() {
    let store = LocalStorageStore::new("cep-form-test-never-written");
    assert_eq!(store.load(), None);
}
