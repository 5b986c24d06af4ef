use std::fmt;

/// Enumeration of sensor kinds
///
/// The set of kinds is closed. Adding a kind requires touching
/// every exhaustive match in this crate, which is intended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Int,
    Float,
    String,
}

const KIND_STR_INT: &str = "int";
const KIND_STR_FLOAT: &str = "float";
const KIND_STR_STRING: &str = "string";

/// Returned when reading an absent integer value
pub const ABSENT_INT: i64 = 0xFFFF_FFFF;

/// Returned when reading an absent floating-point value
pub const ABSENT_FLOAT: f64 = u32::MAX as f64;

/// Returned when reading an absent string value
pub const ABSENT_STRING: &str = "<no value>";

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => KIND_STR_INT,
            Self::Float => KIND_STR_FLOAT,
            Self::String => KIND_STR_STRING,
        }
    }

    pub fn try_from_str(s: &str) -> Option<Kind> {
        match s {
            KIND_STR_INT => Some(Self::Int),
            KIND_STR_FLOAT => Some(Self::Float),
            KIND_STR_STRING => Some(Self::String),
            _ => None,
        }
    }

    /// The sentinel that stands in for an absent value of this kind
    pub fn absent_value(self) -> Value {
        match self {
            Self::Int => Value::Int(ABSENT_INT),
            Self::Float => Value::Float(ABSENT_FLOAT),
            Self::String => Value::String(ABSENT_STRING.to_owned()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged union of sensor values
///
/// Numbers are always stored with 64-bit precision.
///
/// No conversions between integer/floating-point numbers and
/// strings are provided to prevent using wrong types unintentionally!
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating-point number (double precision)
    Float(f64),
    /// Text
    String(String),
}

impl Value {
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
        }
    }

    pub const fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(val) => Some(*val),
            _ => None,
        }
    }

    pub const fn to_float(&self) -> Option<f64> {
        match self {
            Self::Float(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(val) => Some(val),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(val) => Some(val),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(val) => write!(f, "{val}"),
            // Fixed six fractional digits, i.e. "9.563000"
            Self::Float(val) => write!(f, "{val:.6}"),
            Self::String(val) => f.write_str(val),
        }
    }
}

impl From<&Value> for Kind {
    fn from(from: &Value) -> Self {
        from.kind()
    }
}

impl From<i64> for Value {
    fn from(from: i64) -> Self {
        Self::Int(from)
    }
}

impl From<i32> for Value {
    fn from(from: i32) -> Self {
        Self::Int(from.into())
    }
}

impl From<f64> for Value {
    fn from(from: f64) -> Self {
        Self::Float(from)
    }
}

impl From<f32> for Value {
    fn from(from: f32) -> Self {
        Self::Float(from.into())
    }
}

impl From<String> for Value {
    fn from(from: String) -> Self {
        Self::String(from)
    }
}

impl From<&str> for Value {
    fn from(from: &str) -> Self {
        Self::String(from.to_owned())
    }
}
