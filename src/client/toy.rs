use super::ActionKind;
use crate::Result;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use std::cell::RefCell;

/// A toy paired with the Lovense app
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Toy {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "nickName")]
    nickname: String,
    #[serde(default, deserialize_with = "parse_status", serialize_with = "write_status")]
    status: bool,
    #[serde(default)]
    features: Value,
}

impl Toy {
    pub fn new<S: Into<String>>(id: S, name: S, nickname: S, online: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nickname: nickname.into(),
            status: online,
            features: Value::Null,
        }
    }

    /// Toy id, used to target commands
    pub fn id(&self) -> String {
        self.id.clone()
    }

    /// Toy model name, e.g. "lush"
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Name the user gave the toy
    pub fn nickname(&self) -> String {
        self.nickname.clone()
    }

    pub fn is_online(&self) -> bool {
        self.status
    }

    /// Capabilities as reported by Lovense
    pub fn features(&self) -> &Value {
        &self.features
    }

    /// Function every toy of this model supports, if the model is known
    pub fn supported_action(&self) -> Option<ActionKind> {
        model_action(&self.name)
    }
}

/// Function a toy model supports, by model name, e.g. "lush"
pub fn model_action(model: &str) -> Option<ActionKind> {
    match model.to_ascii_lowercase().as_str() {
        "calor" | "gush" | "hyphy" | "dolce" | "ambi" | "max" | "mission" | "edge" | "hush"
        | "lush" | "domi" | "diamo" | "osci" | "ferri" | "nora" | "exomoon" => {
            Some(ActionKind::Vibrate)
        }
        _ => None,
    }
}

// Lovense sends the status as a number, a numeric string or a bool
fn parse_status<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().map_or(false, |n| n != 0.0)),
        Value::String(s) => match s.trim() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            num => num
                .parse::<f64>()
                .map(|n| n != 0.0)
                .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(num), &"toy status")),
        },
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"toy status",
        )),
    }
}

fn write_status<S: Serializer>(status: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(*status as u8)
}

/// Decode a toy list. Lovense sends either a list, a map keyed by toy id, or
/// either of those encoded as a json string.
pub(crate) fn decode_toys(value: Value) -> Result<Vec<Toy>> {
    let value = match value {
        Value::String(encoded) => serde_json::from_str(&encoded)?,
        other => other,
    };
    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(_, toy)| serde_json::from_value(toy))
            .collect::<std::result::Result<Vec<Toy>, _>>()?),
        other => Ok(serde_json::from_value(other)?),
    }
}

/// Last known toy list. Always replaced as a whole.
#[derive(Debug, Default)]
pub(crate) struct ToyCache {
    toys: RefCell<Vec<Toy>>,
}

impl ToyCache {
    pub fn replace(&self, toys: Vec<Toy>) {
        self.toys.replace(toys);
    }

    pub fn snapshot(&self) -> Vec<Toy> {
        self.toys.borrow().clone()
    }

    pub fn online(&self) -> Vec<Toy> {
        self.toys
            .borrow()
            .iter()
            .filter(|toy| toy.is_online())
            .cloned()
            .collect()
    }
}
