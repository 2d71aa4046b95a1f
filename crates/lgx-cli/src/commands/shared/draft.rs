//! Build form drafts from `--file` / `--set` input.

use std::io::Read;

use anyhow::Context;
use lgx_core::forms::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::cli::subcommands::DraftArgs;

/// Parse one `--set` pair.
///
/// `key=value` sets a string; `key:=json` sets a raw JSON value (numbers,
/// booleans, arrays). Dotted keys address nested fields: `consignee.phone=...`.
pub fn parse_set(raw: &str) -> anyhow::Result<(Vec<String>, Value)> {
    let (key, value) = if let Some((key, json)) = raw.split_once(":=") {
        let value = serde_json::from_str(json)
            .with_context(|| format!("invalid JSON value in --set '{raw}'"))?;
        (key, value)
    } else if let Some((key, text)) = raw.split_once('=') {
        (key, Value::String(text.to_string()))
    } else {
        anyhow::bail!("invalid --set '{raw}': expected KEY=VALUE or KEY:=JSON");
    };

    let path = key
        .split('.')
        .map(str::trim)
        .map(str::to_string)
        .collect::<Vec<_>>();
    if path.iter().any(String::is_empty) {
        anyhow::bail!("invalid --set '{raw}': empty field name");
    }
    Ok((path, value))
}

fn set_path(target: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = target;
    for key in parents {
        let slot = current
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        current = next;
    }
    current.insert(last.clone(), value);
}

/// Merge `patch` into `base`; nested objects merge, everything else replaces.
fn merge(base: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge(existing, nested),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn read_file_fields(args: &DraftArgs) -> anyhow::Result<Option<Map<String, Value>>> {
    let Some(path) = &args.file else {
        return Ok(None);
    };
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read draft from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read draft file {}", path.display()))?
    };
    match serde_json::from_str(&text).context("draft file is not valid JSON")? {
        Value::Object(map) => Ok(Some(map)),
        _ => anyhow::bail!("draft file must contain a JSON object"),
    }
}

/// Field overrides from `--file` then `--set`, in that order.
pub fn collect_fields(args: &DraftArgs) -> anyhow::Result<Map<String, Value>> {
    let mut fields = read_file_fields(args)?.unwrap_or_default();
    for raw in &args.set {
        let (path, value) = parse_set(raw)?;
        set_path(&mut fields, &path, value);
    }
    Ok(fields)
}

/// Apply input over `base` (the current record when updating), then
/// normalize and validate.
pub fn build_draft<D>(base: Option<&D>, args: &DraftArgs) -> anyhow::Result<D>
where
    D: Form + Serialize + DeserializeOwned,
{
    let fields = collect_fields(args)?;
    if base.is_some() && fields.is_empty() {
        anyhow::bail!("nothing to update: pass --file or at least one --set");
    }
    apply_fields(base, fields)
}

pub fn apply_fields<D>(base: Option<&D>, fields: Map<String, Value>) -> anyhow::Result<D>
where
    D: Form + Serialize + DeserializeOwned,
{
    let mut draft = merge_fields(base, fields)?;
    draft.normalize();
    draft.validate()?;
    Ok(draft)
}

/// Overlay `fields` onto `base` without validating.
pub fn merge_fields<D>(base: Option<&D>, fields: Map<String, Value>) -> anyhow::Result<D>
where
    D: Serialize + DeserializeOwned,
{
    let mut merged = match base.map(serde_json::to_value).transpose()? {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    merge(&mut merged, fields);
    serde_json::from_value(Value::Object(merged)).context("draft is missing or has mistyped fields")
}

#[cfg(test)]
mod tests {
    use lgx_core::forms::LoaderDraft;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn loader() -> LoaderDraft {
        LoaderDraft {
            name: "Sharma Transport".into(),
            phone: "9876543210".into(),
            vehicle_number: "MH12AB1234".into(),
            capacity_kg: 1000.0,
            is_active: true,
        }
    }

    #[test]
    fn parse_set_string_and_json() {
        let (path, value) = parse_set("phone=9123456780").unwrap();
        assert_eq!(path, vec!["phone"]);
        assert_eq!(value, json!("9123456780"));

        let (path, value) = parse_set("capacityKg:=1500").unwrap();
        assert_eq!(path, vec!["capacityKg"]);
        assert_eq!(value, json!(1500));

        let (path, _) = parse_set("consignee.pincode=411001").unwrap();
        assert_eq!(path, vec!["consignee", "pincode"]);
    }

    #[test]
    fn parse_set_rejects_malformed() {
        assert!(parse_set("phone").is_err());
        assert!(parse_set("a..b=1").is_err());
        assert!(parse_set("flag:=nope").is_err());
    }

    #[test]
    fn nested_set_merges_into_existing_object() {
        let mut fields = Map::new();
        fields.insert("consignee".into(), json!({"name": "Meena", "pincode": "110001"}));
        let (path, value) = parse_set("consignee.pincode=411001").unwrap();
        set_path(&mut fields, &path, value);
        assert_eq!(fields["consignee"], json!({"name": "Meena", "pincode": "411001"}));
    }

    #[test]
    fn update_overrides_only_given_fields() {
        let mut fields = Map::new();
        fields.insert("vehicleNumber".into(), json!("ka 01 a 1234"));
        fields.insert("isActive".into(), json!(false));
        let draft: LoaderDraft = apply_fields(Some(&loader()), fields).unwrap();
        assert_eq!(draft.name, "Sharma Transport");
        assert_eq!(draft.vehicle_number, "KA01A1234");
        assert!(!draft.is_active);
    }

    #[test]
    fn invalid_fields_fail_validation() {
        let mut fields = Map::new();
        fields.insert("phone".into(), json!("12345"));
        let err = apply_fields::<LoaderDraft>(Some(&loader()), fields).unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn update_without_input_is_rejected() {
        let err = build_draft(Some(&loader()), &DraftArgs::default()).unwrap_err();
        assert!(err.to_string().contains("nothing to update"));
    }

    #[test]
    fn file_fields_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.json");
        std::fs::write(
            &path,
            r#"{"name":"Rao Movers","phone":"9000000001","vehicleNumber":"TS09EA4321","capacityKg":800,"isActive":true}"#,
        )
        .unwrap();
        let args = DraftArgs {
            file: Some(path),
            set: vec!["name=Rao Movers Pvt".into()],
        };
        let draft: LoaderDraft = build_draft(None, &args).unwrap();
        assert_eq!(draft.name, "Rao Movers Pvt");
        assert!((draft.capacity_kg - 800.0).abs() < f64::EPSILON);
    }
}
