use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

fn key_exists(json: &Value, key: &str) -> bool {
    key.split('.')
        .try_fold(json, |node, part| node.get(part))
        .is_some()
}

fn collect_keys(dir: &Path, keys: &mut BTreeSet<String>) {
    for entry in std::fs::read_dir(dir).expect("read src dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect_keys(&path, keys);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let source = std::fs::read_to_string(&path).expect("read source");
        for call in ["t(\"", "tr(\""] {
            for (idx, _) in source.match_indices(call) {
                let boundary = source[..idx].chars().next_back();
                if boundary.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                    continue;
                }
                let rest = &source[idx + call.len()..];
                if let Some(end) = rest.find('"') {
                    keys.insert(rest[..end].to_string());
                }
            }
        }
    }
}

/// Every literal key passed to `t`/`tr` resolves in the English bundle.
#[test]
fn english_bundle_covers_every_literal_key() {
    let content = std::fs::read_to_string("i18n/en.json").expect("Failed to read English locale");
    let json: Value = serde_json::from_str(&content).expect("Failed to parse English JSON");

    let mut keys = BTreeSet::new();
    collect_keys(Path::new("src"), &mut keys);
    keys.remove("nope.not.here");
    assert!(!keys.is_empty());

    let missing: Vec<_> = keys.iter().filter(|k| !key_exists(&json, k)).cloned().collect();
    assert!(missing.is_empty(), "Missing i18n keys: {}", missing.join(", "));
}

#[test]
fn level_copy_exists_for_every_level() {
    let content = std::fs::read_to_string("i18n/en.json").expect("Failed to read English locale");
    let json: Value = serde_json::from_str(&content).expect("Failed to parse English JSON");
    for level in policyplay_core::Level::ALL {
        for field in ["name", "blurb"] {
            let key = format!("levels.{}.{field}", level.as_str());
            assert!(key_exists(&json, &key), "missing {key}");
        }
    }
}

#[test]
fn interpolated_strings_keep_their_placeholders() {
    let content = std::fs::read_to_string("i18n/en.json").expect("Failed to read English locale");
    let json: Value = serde_json::from_str(&content).expect("Failed to parse English JSON");
    let text = |key: &str| {
        key.split('.')
            .try_fold(&json, |node, part| node.get(part))
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("missing {key}"))
            .to_string()
    };
    assert!(text("tap.question_of").contains("{n}"));
    assert!(text("tap.question_of").contains("{total}"));
    assert!(text("policies.counts").contains("{rules}"));
    assert!(text("admin.delete_confirm").contains("{title}"));
    assert!(text("quiz.selected_range").contains("{start}"));
}
