//! Record types stored by the entity store tests.

use std::collections::HashMap;

use burrow_db::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Widget {
    pub name: String,
    #[burrow(id)]
    pub num: i64,
    pub float: f64,
}

impl Widget {
    pub fn new(name: &str, num: i64, float: f64) -> Self {
        Self {
            name: name.to_string(),
            num,
            float,
        }
    }
}

/// Identified by name: a field called `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Record)]
pub struct Gadget {
    pub id: String,
    pub label: String,
}

impl Gadget {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Bad {
    #[burrow(id)]
    pub a: i32,
    #[burrow(id)]
    pub b: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Empty {
    pub x: i32,
}

/// One field matches by name, another by annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Mixed {
    pub id: i32,
    #[burrow(tag = "ID")]
    pub key: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Account {
    #[burrow(id)]
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub enum Status {
    Active,
    Retired,
}

/// JSON cannot encode maps with tuple keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Grid {
    pub id: u32,
    pub cells: HashMap<(u8, u8), u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Audit {
    pub id: u64,
    pub created_by: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Document {
    pub title: String,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[burrow(name = "people")]
pub struct Person {
    pub id: u32,
    pub name: String,
}

/// Hand-written impl whose accessor does not know its own identifier field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hollow {
    pub id: u32,
}

impl Record for Hollow {
    fn descriptor() -> burrow_db::RecordDescriptor {
        burrow_db::RecordDescriptor::new(
            "Hollow",
            burrow_db::RecordKind::Struct,
            vec![burrow_db::FieldDescriptor::new("id", None)],
        )
    }

    fn field_value(
        &self,
        _field: &str,
    ) -> Option<Result<burrow_db::FieldValue, burrow_db::CodecError>> {
        None
    }
}

/// Hand-written impl, the registration route for types that cannot derive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manual {
    pub sku: String,
    pub qty: u32,
}

impl Record for Manual {
    fn descriptor() -> burrow_db::RecordDescriptor {
        burrow_db::RecordDescriptor::new(
            "Manual",
            burrow_db::RecordKind::Struct,
            vec![
                burrow_db::FieldDescriptor::new("sku", Some(burrow_db::ID_NAME)),
                burrow_db::FieldDescriptor::new("qty", None),
            ],
        )
    }

    fn field_value(
        &self,
        field: &str,
    ) -> Option<Result<burrow_db::FieldValue, burrow_db::CodecError>> {
        match field {
            "sku" => Some(burrow_db::capture_field(&self.sku)),
            "qty" => Some(burrow_db::capture_field(&self.qty)),
            _ => None,
        }
    }
}
