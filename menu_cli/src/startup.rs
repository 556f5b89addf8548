//! Building the initial store from the `--seed` payload and `--import` list.

use anyhow::{anyhow, Context as _};
use menu_core::{CatalogEdit, MenuItemForm, MenuStore, NavigationParams};
use tracing::info;

/// Builds a store out of a navigation payload given as JSON text.
pub fn seed_store(json: &str) -> anyhow::Result<MenuStore> {
    let params = NavigationParams::from_json(json).context("failed to parse seed payload")?;
    MenuStore::from_payload(params).context("seed payload is not a valid menu")
}

/// Adds every entry of a JSON list of add forms, or none of them. Returns how
/// many items were added.
pub fn import_forms(store: &mut MenuStore, json: &str) -> anyhow::Result<usize> {
    let forms: Vec<MenuItemForm> =
        serde_json::from_str(json).context("failed to parse import list")?;

    let applied = store
        .apply_all(forms.into_iter().map(CatalogEdit::Add))
        .map_err(|(error, index)| anyhow!("import entry {index} was rejected: {error}"))?;
    info!(applied, "imported menu items");
    Ok(applied)
}

#[cfg(test)]
mod test {
    use menu_core::Course;

    use super::*;

    #[test]
    fn seed_from_payload() {
        let store = seed_store(
            r#"{"menu_items": [
                {"id": "4", "name": "Soup", "description": "Tomato soup", "course": "Starter", "price": 45}
            ]}"#,
        )
        .unwrap();
        assert_eq!(store.catalog().len(), 1);
        assert_eq!(store.catalog().items()[0].course, Course::Starter);
    }

    #[test]
    fn seed_errors_say_what_went_wrong() {
        let err = seed_store("not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse seed payload"));

        let err = seed_store(
            r#"{"menu_items": [
                {"id": "1", "name": "Soup", "description": "Hot", "course": "Starter", "price": -3}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("seed payload is not a valid menu"));
    }

    #[test]
    fn import_adds_every_entry() {
        let mut store = MenuStore::new();
        let applied = import_forms(
            &mut store,
            r#"[
                {"name": "Soup", "description": "Tomato soup", "course": "Starter", "price": "45"},
                {"name": "Cake", "description": "Choc cake", "course": "dessert", "price": "60.5"}
            ]"#,
        )
        .unwrap();

        assert_eq!(applied, 2);
        let names: Vec<_> = store.catalog().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Cake"]);
    }

    #[test]
    fn rejected_entry_aborts_whole_import() {
        let mut store = MenuStore::new();
        store.add(&MenuItemForm::new("Tea", "Hot", "Starter", "10")).unwrap();
        let version = store.version();

        let err = import_forms(
            &mut store,
            r#"[
                {"name": "Soup", "description": "Tomato soup", "course": "Starter", "price": "45"},
                {"name": "Cake", "description": "Choc cake", "course": "Dessert", "price": "0"}
            ]"#,
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("import entry 1 was rejected: "));
        assert_eq!(store.version(), version);
        assert_eq!(store.catalog().len(), 1);
    }

    #[test]
    fn malformed_import_list() {
        let mut store = MenuStore::new();
        let err = import_forms(&mut store, r#"{"name": "Soup"}"#).unwrap_err();
        assert!(err.to_string().contains("failed to parse import list"));
        assert!(store.catalog().is_empty());
    }
}
