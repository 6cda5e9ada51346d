use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque payload stored by a `Custom` list. The list only holds the handle,
/// the pointed-to data belongs to whoever else keeps a clone of it.
pub type Payload = Rc<dyn Any>;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElementKind {
    Custom,
    Int,
    Char,
    Double,
    Float,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Custom => "custom",
            ElementKind::Int => "int",
            ElementKind::Char => "char",
            ElementKind::Double => "double",
            ElementKind::Float => "float",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stored element. Adding a kind means a new variant here, a new arm in
/// `kind()`, and an `Element` impl; every other dispatch is exhaustive.
#[derive(Clone)]
pub enum Value {
    Custom(Payload),
    Int(i32),
    Char(u8),
    Double(f64),
    Float(f32),
}

impl Value {
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::Custom(_) => ElementKind::Custom,
            Value::Int(_) => ElementKind::Int,
            Value::Char(_) => ElementKind::Char,
            Value::Double(_) => ElementKind::Double,
            Value::Float(_) => ElementKind::Float,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<u8> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&Payload> {
        match self {
            Value::Custom(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_custom(self) -> Option<Payload> {
        match self {
            Value::Custom(p) => Some(p),
            _ => None,
        }
    }
}

// payloads compare by identity
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Custom(l), Value::Custom(r)) => Rc::ptr_eq(l, r),
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Char(l), Value::Char(r)) => l == r,
            (Value::Double(l), Value::Double(r)) => l == r,
            (Value::Float(l), Value::Float(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Custom(p) => write!(f, "Custom({:p})", Rc::as_ptr(p)),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Char(c) => write!(f, "Char({:?})", *c as char),
            Value::Double(d) => write!(f, "Double({})", d),
            Value::Float(x) => write!(f, "Float({})", x),
        }
    }
}

/// Rust types that can be stored in a list, each bound to exactly one kind.
pub trait Element: Sized {
    const KIND: ElementKind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl Element for u8 {
    const KIND: ElementKind = ElementKind::Char;

    fn into_value(self) -> Value {
        Value::Char(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_char()
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Double;

    fn into_value(self) -> Value {
        Value::Double(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_double()
    }
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl Element for Payload {
    const KIND: ElementKind = ElementKind::Custom;

    fn into_value(self) -> Value {
        Value::Custom(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_custom().cloned()
    }
}
