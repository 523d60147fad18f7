//! Database type descriptors attached to bound parameters.

use serde::{Deserialize, Serialize};

use crate::ast::{HostKind, HostType};
use crate::error::{TranslateError, TranslateResult};

/// Length used for strings and byte sequences with no declared size.
pub const UNBOUNDED_LENGTH: u32 = u32::MAX;

/// Normalized SQL type a host type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Real,
    Float,
    Decimal,
    NVarChar,
    NChar,
    DateTime,
    DateTimeOffset,
    Time,
    VarBinary,
    UniqueIdentifier,
}

/// Provider-neutral parameter type, as drivers consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DbType {
    Boolean,
    Byte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    String,
    StringFixedLength,
    DateTime,
    DateTimeOffset,
    Time,
    Binary,
    Guid,
}

impl SqlType {
    pub fn db_type(&self) -> DbType {
        match self {
            SqlType::Bit => DbType::Boolean,
            SqlType::TinyInt => DbType::Byte,
            SqlType::SmallInt => DbType::Int16,
            SqlType::Int => DbType::Int32,
            SqlType::BigInt => DbType::Int64,
            SqlType::Real => DbType::Single,
            SqlType::Float => DbType::Double,
            SqlType::Decimal => DbType::Decimal,
            SqlType::NVarChar => DbType::String,
            SqlType::NChar => DbType::StringFixedLength,
            SqlType::DateTime => DbType::DateTime,
            SqlType::DateTimeOffset => DbType::DateTimeOffset,
            SqlType::Time => DbType::Time,
            SqlType::VarBinary => DbType::Binary,
            SqlType::UniqueIdentifier => DbType::Guid,
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolved type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryType {
    pub sql_type: SqlType,
    pub not_null: bool,
    /// Zero for types without a length
    pub length: u32,
    pub precision: u8,
    pub scale: u8,
}

impl QueryType {
    fn new(sql_type: SqlType, not_null: bool) -> Self {
        Self {
            sql_type,
            not_null,
            length: 0,
            precision: 0,
            scale: 0,
        }
    }

    pub fn db_type(&self) -> DbType {
        self.sql_type.db_type()
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sql_type {
            SqlType::NVarChar | SqlType::NChar | SqlType::VarBinary
                if self.length == UNBOUNDED_LENGTH =>
            {
                write!(f, "{}(MAX)", self.sql_type)?
            }
            SqlType::NVarChar | SqlType::NChar | SqlType::VarBinary => {
                write!(f, "{}({})", self.sql_type, self.length)?
            }
            SqlType::Decimal => write!(f, "{}({}, {})", self.sql_type, self.precision, self.scale)?,
            _ => write!(f, "{}", self.sql_type)?,
        }
        if self.not_null {
            write!(f, " NOT NULL")?;
        }
        Ok(())
    }
}

/// Per-dialect type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSystem {
    pub string_default_size: u32,
    pub binary_default_size: u32,
}

impl Default for TypeSystem {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl TypeSystem {
    /// Strings and byte sequences default to unbounded length.
    pub const UNBOUNDED: TypeSystem = TypeSystem {
        string_default_size: UNBOUNDED_LENGTH,
        binary_default_size: UNBOUNDED_LENGTH,
    };

    pub fn resolve(&self, host: &HostType) -> TranslateResult<QueryType> {
        let not_null = host.kind.is_value_type() && !host.nullable;
        let mut ty = match &host.kind {
            HostKind::Bool => QueryType::new(SqlType::Bit, not_null),
            HostKind::U8 => QueryType::new(SqlType::TinyInt, not_null),
            HostKind::I8 | HostKind::I16 => QueryType::new(SqlType::SmallInt, not_null),
            HostKind::U16 | HostKind::I32 => QueryType::new(SqlType::Int, not_null),
            HostKind::U32 | HostKind::I64 => QueryType::new(SqlType::BigInt, not_null),
            HostKind::U64 => QueryType {
                precision: 20,
                ..QueryType::new(SqlType::Decimal, not_null)
            },
            HostKind::F32 => QueryType::new(SqlType::Real, not_null),
            HostKind::F64 => QueryType::new(SqlType::Float, not_null),
            HostKind::Decimal => QueryType {
                precision: 29,
                scale: 4,
                ..QueryType::new(SqlType::Decimal, not_null)
            },
            HostKind::String => QueryType::new(SqlType::NVarChar, not_null),
            HostKind::Char => QueryType::new(SqlType::NChar, not_null),
            HostKind::DateTime => QueryType::new(SqlType::DateTime, not_null),
            HostKind::DateTimeOffset => QueryType::new(SqlType::DateTimeOffset, not_null),
            HostKind::Time => QueryType::new(SqlType::Time, not_null),
            HostKind::Bytes => QueryType::new(SqlType::VarBinary, not_null),
            HostKind::Guid => QueryType::new(SqlType::UniqueIdentifier, not_null),
            HostKind::Other(name) => {
                return Err(TranslateError::TypeResolution {
                    host_type: name.clone(),
                });
            }
        };
        ty.length = match ty.sql_type {
            SqlType::NVarChar => self.string_default_size,
            SqlType::NChar => 1,
            SqlType::VarBinary => self.binary_default_size,
            _ => 0,
        };
        Ok(ty)
    }
}
