use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single event parameter as it arrives from the front-end.
///
/// Variants are tried in declaration order, so a JSON integer lands in the
/// narrowest integer slot that holds it and only non-integral numbers become
/// `Double`. Values of any other JSON type are kept as `Unsupported` instead of
/// failing the whole command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i32),
    Long(i64),
    Double(f64),
    Unsupported(serde_json::Value),
}

pub type EventParams = HashMap<String, ParamValue>;

/// Typed slot handed to the vendor SDK.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BundleValue {
    String(String),
    Int(i32),
    Double(f64),
    Long(i64),
}

pub type Bundle = BTreeMap<String, BundleValue>;

/// A parameter key whose value could not be placed in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedParam {
    pub key: String,
    pub kind: &'static str,
}

impl fmt::Display for RejectedParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value for key '{}' has unsupported type {}",
            self.key, self.kind
        )
    }
}

impl TryFrom<ParamValue> for BundleValue {
    type Error = &'static str;

    fn try_from(value: ParamValue) -> Result<Self, Self::Error> {
        match value {
            ParamValue::Text(s) => Ok(BundleValue::String(s)),
            ParamValue::Int(i) => Ok(BundleValue::Int(i)),
            ParamValue::Long(l) => Ok(BundleValue::Long(l)),
            ParamValue::Double(d) => Ok(BundleValue::Double(d)),
            ParamValue::Unsupported(v) => Err(json_kind(&v)),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
    }
}

/// Converts every parameter it can and collects the keys it can't.
/// A rejected key never stops the remaining keys from being converted.
pub fn to_bundle(params: EventParams) -> (Bundle, Vec<RejectedParam>) {
    let mut bundle = Bundle::new();
    let mut rejected = vec![];
    for (key, value) in params {
        match BundleValue::try_from(value) {
            Ok(v) => {
                bundle.insert(key, v);
            }
            Err(kind) => rejected.push(RejectedParam { key, kind }),
        }
    }
    rejected.sort_by(|a, b| a.key.cmp(&b.key));
    (bundle, rejected)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInstanceId {
    pub app_id: String,
}

/// Plugin configuration read from `plugins.analytics` in `tauri.conf.json`.
///
/// Unset fields are left to the vendor SDK, which persists them across
/// launches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub collection_enabled: Option<bool>,
    /// Session timeout in milliseconds.
    pub session_timeout_duration: Option<u64>,
}
