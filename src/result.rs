use crate::debugging::DebugWithRealm;
use crate::primordials::Realm;
use crate::values::value::Value;

pub type ChainResult<T = Value> = Result<T, ChainError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ChainError {
    /// A value raised inside a caller-supplied behavior member. Propagates
    /// out of `create` unchanged; the core never catches or wraps it.
    Thrown(Value),
    InternalError(InternalError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalError {
    message: String,
}

impl InternalError {
    pub fn new(message: impl Into<String>) -> Self {
        InternalError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<InternalError> for ChainError {
    fn from(err: InternalError) -> Self {
        ChainError::InternalError(err)
    }
}

impl ChainError {
    pub fn thrown(value: impl Into<Value>) -> ChainError {
        ChainError::Thrown(value.into())
    }

    pub fn render(self, realm: &Realm) -> anyhow::Error {
        match self {
            ChainError::InternalError(err) => {
                anyhow::Error::msg(format!("InternalError: {}", err.message))
            }
            ChainError::Thrown(value) => {
                anyhow::Error::msg(format!("{}", realm.debug_value(&value)))
            }
        }
    }
}
