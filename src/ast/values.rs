use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ast::ValueKind;

/// A literal captured by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// String
    String(String),
    /// Single character
    Char(char),
    /// Date and time without offset
    DateTime(NaiveDateTime),
    /// Date and time with a UTC offset
    DateTimeOffset(DateTime<FixedOffset>),
    /// Time of day
    Time(NaiveTime),
    /// Byte sequence
    Bytes(Vec<u8>),
    /// Globally-unique id
    Guid(Uuid),
}

impl Value {
    /// The host type category this literal was captured as. `None` for NULL.
    pub fn host_kind(&self) -> Option<HostKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Bool(_) => HostKind::Bool,
            Value::I8(_) => HostKind::I8,
            Value::U8(_) => HostKind::U8,
            Value::I16(_) => HostKind::I16,
            Value::U16(_) => HostKind::U16,
            Value::I32(_) => HostKind::I32,
            Value::U32(_) => HostKind::U32,
            Value::I64(_) => HostKind::I64,
            Value::U64(_) => HostKind::U64,
            Value::F32(_) => HostKind::F32,
            Value::F64(_) => HostKind::F64,
            Value::Decimal(_) => HostKind::Decimal,
            Value::String(_) => HostKind::String,
            Value::Char(_) => HostKind::Char,
            Value::DateTime(_) => HostKind::DateTime,
            Value::DateTimeOffset(_) => HostKind::DateTimeOffset,
            Value::Time(_) => HostKind::Time,
            Value::Bytes(_) => HostKind::Bytes,
            Value::Guid(_) => HostKind::Guid,
        };
        Some(kind)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for integers, floats and decimals.
    pub fn is_numeric(&self) -> bool {
        self.host_kind().is_some_and(|k| k.is_numeric())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(n) => write!(f, "{}", n),
            Value::U8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::U16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}m", d),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::DateTime(dt) => write!(f, "#{}#", dt),
            Value::DateTimeOffset(dt) => write!(f, "#{}#", dt),
            Value::Time(t) => write!(f, "#{}#", t),
            Value::Bytes(b) => write!(f, "bytes[{}]", b.len()),
            Value::Guid(u) => write!(f, "{{{}}}", u),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::F64(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Guid(u)
    }
}

/// Host type categories a constant can be captured as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
    String,
    Char,
    DateTime,
    DateTimeOffset,
    Time,
    Bytes,
    Guid,
    /// A host type the type mapping knows nothing about.
    Other(String),
}

impl HostKind {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            HostKind::I8
                | HostKind::U8
                | HostKind::I16
                | HostKind::U16
                | HostKind::I32
                | HostKind::U32
                | HostKind::I64
                | HostKind::U64
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, HostKind::F32 | HostKind::F64 | HostKind::Decimal)
    }

    /// Value types are never null unless wrapped in a nullable.
    pub fn is_value_type(&self) -> bool {
        !matches!(self, HostKind::String | HostKind::Bytes | HostKind::Other(_))
    }

    /// The static result kind of an expression of this host type.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            HostKind::Bool => ValueKind::Boolean,
            k if k.is_integer() => ValueKind::Integer,
            HostKind::F32 | HostKind::F64 => ValueKind::Real,
            HostKind::Decimal => ValueKind::Decimal,
            HostKind::String | HostKind::Char => ValueKind::String,
            HostKind::DateTime | HostKind::DateTimeOffset => ValueKind::Date,
            _ => ValueKind::Other,
        }
    }
}

impl std::fmt::Display for HostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostKind::Bool => write!(f, "bool"),
            HostKind::I8 => write!(f, "i8"),
            HostKind::U8 => write!(f, "u8"),
            HostKind::I16 => write!(f, "i16"),
            HostKind::U16 => write!(f, "u16"),
            HostKind::I32 => write!(f, "i32"),
            HostKind::U32 => write!(f, "u32"),
            HostKind::I64 => write!(f, "i64"),
            HostKind::U64 => write!(f, "u64"),
            HostKind::F32 => write!(f, "f32"),
            HostKind::F64 => write!(f, "f64"),
            HostKind::Decimal => write!(f, "decimal"),
            HostKind::String => write!(f, "string"),
            HostKind::Char => write!(f, "char"),
            HostKind::DateTime => write!(f, "datetime"),
            HostKind::DateTimeOffset => write!(f, "datetimeoffset"),
            HostKind::Time => write!(f, "time"),
            HostKind::Bytes => write!(f, "bytes"),
            HostKind::Guid => write!(f, "guid"),
            HostKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A host type: category plus nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostType {
    pub kind: HostKind,
    /// Wrapped in a nullable (`Option<T>` / `T?`).
    #[serde(default)]
    pub nullable: bool,
}

impl HostType {
    pub fn of(kind: HostKind) -> Self {
        Self { kind, nullable: false }
    }

    pub fn nullable(kind: HostKind) -> Self {
        Self { kind, nullable: true }
    }
}

impl From<HostKind> for HostType {
    fn from(kind: HostKind) -> Self {
        Self::of(kind)
    }
}

impl std::fmt::Display for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
