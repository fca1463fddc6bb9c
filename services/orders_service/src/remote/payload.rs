// services/orders_service/src/remote/payload.rs

use serde::Serialize;
use serde_json::Value;

/// A user record as returned by the users service. Only the fields the ledger relies on
/// are extracted; the full payload is kept for enrichment responses.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteUser {
  pub name: Option<String>,
  pub email: Option<String>,
  pub active: bool,
  pub payload: Value,
}

impl RemoteUser {
  /// The body must be a JSON object. A missing or null `active` counts as active; any other
  /// non-boolean `active` makes the payload unusable.
  pub fn from_payload(payload: Value) -> Result<Self, String> {
    let fields = payload
      .as_object()
      .ok_or_else(|| format!("expected a JSON object, got {}", json_type(&payload)))?;

    let active = match fields.get("active") {
      None | Some(Value::Null) => true,
      Some(Value::Bool(active)) => *active,
      Some(other) => return Err(format!("'active' must be a boolean, got {}", json_type(other))),
    };
    let name = fields.get("name").and_then(Value::as_str).map(str::to_string);
    let email = fields.get("email").and_then(Value::as_str).map(str::to_string);

    Ok(Self {
      name,
      email,
      active,
      payload,
    })
  }
}

/// The slice of the remote user echoed back when an order is created. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
  pub name: Option<String>,
  pub email: Option<String>,
}

impl From<&RemoteUser> for UserInfo {
  fn from(user: &RemoteUser) -> Self {
    Self {
      name: user.name.clone(),
      email: user.email.clone(),
    }
  }
}

fn json_type(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
