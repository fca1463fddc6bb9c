// services/orders_service/src/models/new_order.rs

//! Parsing of the create-order request body. Clients send numbers either as JSON numbers
//! or as strings, so each field is read from a raw `Value`.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::errors::{AppError, Result};

const REQUIRED_FIELDS: [&str; 4] = ["user_id", "product", "quantity", "price"];

/// A create request that passed local validation. The user has not been verified yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
  pub user_id: u64,
  pub product: String,
  pub quantity: u32,
  pub price: Decimal,
}

impl NewOrder {
  pub fn from_payload(payload: &Value) -> Result<Self> {
    let fields = match payload {
      Value::Object(map) if !map.is_empty() => map,
      _ => return Err(AppError::MissingData),
    };

    for field in REQUIRED_FIELDS {
      if fields.get(field).map_or(true, Value::is_null) {
        return Err(AppError::MissingField { field });
      }
    }

    let user_id = parse_user_id(field(fields, "user_id"))?;
    let product = parse_product(field(fields, "product"))?;
    let quantity = parse_quantity(field(fields, "quantity"))?;
    let price = parse_price(field(fields, "price"))?;

    // Line totals are summed for stats; each one must fit in a Decimal.
    if price.checked_mul(Decimal::from(quantity)).is_none() {
      return Err(invalid("price", "price times quantity is out of range"));
    }

    Ok(Self {
      user_id,
      product,
      quantity,
      price,
    })
  }
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> &'a Value {
  fields.get(name).unwrap_or(&Value::Null)
}

fn invalid(field: &'static str, message: &str) -> AppError {
  AppError::InvalidField {
    field,
    message: message.to_string(),
  }
}

fn positive_integer(value: &Value) -> Option<u64> {
  let n = match value {
    Value::Number(n) => match n.as_u64() {
      Some(n) => Some(n),
      // 2.0 is accepted, 2.5 is not.
      None => n
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64),
    },
    Value::String(s) => s.trim().parse::<u64>().ok(),
    _ => None,
  };
  n.filter(|n| *n > 0)
}

fn parse_user_id(value: &Value) -> Result<u64> {
  positive_integer(value).ok_or_else(|| invalid("user_id", "must be a positive integer"))
}

fn parse_product(value: &Value) -> Result<String> {
  match value.as_str().map(str::trim) {
    Some(product) if !product.is_empty() => Ok(product.to_string()),
    _ => Err(invalid("product", "must be a non-empty string")),
  }
}

fn parse_quantity(value: &Value) -> Result<u32> {
  positive_integer(value)
    .and_then(|n| u32::try_from(n).ok())
    .ok_or_else(|| invalid("quantity", "must be a positive integer"))
}

fn parse_price(value: &Value) -> Result<Decimal> {
  let parsed = match value {
    Value::Number(n) => decimal_from_str(&n.to_string()),
    Value::String(s) => decimal_from_str(s.trim()),
    _ => None,
  };
  match parsed {
    Some(price) if price >= Decimal::ZERO => Ok(price.normalize()),
    Some(_) => Err(invalid("price", "must not be negative")),
    None => Err(invalid("price", "must be a number")),
  }
}

fn decimal_from_str(raw: &str) -> Option<Decimal> {
  Decimal::from_str(raw).ok().or_else(|| Decimal::from_scientific(raw).ok())
}
