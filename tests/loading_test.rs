//! Loading configuration and collections from disk.

use std::fs;

use popdict::prelude::*;
use tempfile::TempDir;

const COLLECTION_JSON: &str = r#"{
    "currentDeck": "Japanese",
    "notes": [
        {
            "id": 1,
            "noteType": "JP Dictionary",
            "fields": [
                {"name": "Head Word", "value": "猫"},
                {"name": "Meaning", "value": "cat"}
            ],
            "cards": [{"id": 100, "ord": 0, "deck": "Japanese::Dictionary"}]
        },
        {
            "id": 2,
            "noteType": "Basic",
            "fields": [
                {"name": "Front", "value": "猫が好き"},
                {"name": "Back", "value": "I like cats"},
                {"name": "Source", "value": "textbook p. 12"}
            ],
            "cards": [{"id": 200, "ord": 0, "deck": "Japanese"}]
        },
        {
            "id": 3,
            "noteType": "Basic",
            "fields": [{"name": "Front", "value": "黒い猫"}],
            "cards": [{"id": 300, "ord": 0, "deck": "Misc"}]
        }
    ]
}"#;

const CONFIG_JSON: &str = r#"{
    "local": {
        "dictionaryNoteTypeNames": ["JP Dictionary"],
        "dictionaryTermFieldName": "Head Word",
        "dictionaryDefinitionFieldName": "Meaning",
        "snippetsExcludedFields": ["Source"],
        "snippetsLimitToCurrentDeck": true
    }
}"#;

#[test]
fn test_lookup_from_files() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let collection_path = temp_dir.path().join("collection.json");
    let config_path = temp_dir.path().join("config.json");
    fs::write(&collection_path, COLLECTION_JSON)?;
    fs::write(&config_path, CONFIG_JSON)?;

    let collection = MemoryCollection::from_file(&collection_path)?;
    let config = PopupConfig::from_file(&config_path)?;
    let tooltip = TooltipComposer::new(&collection, &config).compose_detailed("猫", None)?;

    assert_eq!(tooltip.dictionary_hits, 1);
    assert!(tooltip.html.contains("data-cid=100"));
    assert!(tooltip.html.contains("猫:"));

    // Note 3 is outside the current deck; note 1 was shown as a definition.
    assert_eq!(tooltip.snippet_hits, 1);
    assert!(tooltip.html.contains("data-nid=2"));
    assert!(!tooltip.html.contains("data-nid=3"));
    assert!(!tooltip.html.contains("textbook"));

    Ok(())
}

#[test]
fn test_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    assert!(matches!(
        PopupConfig::from_file(&missing),
        Err(PopdictError::Io(_))
    ));
    assert!(matches!(
        MemoryCollection::from_file(&missing),
        Err(PopdictError::Io(_))
    ));
}

#[test]
fn test_invalid_collection_json() {
    let err = MemoryCollection::from_json_str(r#"{"notes": [{"id": "x"}]}"#).unwrap_err();
    assert!(matches!(err, PopdictError::Json(_)));
}

#[test]
fn test_partial_config_keeps_defaults() -> Result<()> {
    let config = PopupConfig::from_json_str(r#"{"snippetsEnabled": false}"#)?;

    assert!(!config.snippets_enabled);
    assert!(config.dictionary_enabled);
    assert_eq!(config.dictionary_term_field_name, "Term");

    Ok(())
}
