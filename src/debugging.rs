use crate::primordials::Realm;
use crate::result::{ChainError, ChainResult};
use colored::Colorize;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Result};

pub struct Renderer<'b, 'c, 'd> {
    max_depth: usize,
    current_depth: usize,
    pub(crate) representation: Representation,
    pub(crate) formatter: &'b mut Formatter<'c>,
    pub(crate) realm: &'d Realm,
}

impl<'b, 'c, 'd> Renderer<'b, 'c, 'd> {
    pub fn render(&mut self, value: &dyn DebugRepresentation) -> Result {
        match self.current_depth.cmp(&self.max_depth) {
            Ordering::Equal | Ordering::Greater => {
                let representation = self.representation;
                self.representation = Representation::Compact;
                let result = value.render(self);
                self.representation = representation;

                result
            }
            Ordering::Less => {
                self.current_depth += 1;

                let result = value.render(self);

                self.current_depth -= 1;

                result
            }
        }
    }

    pub(crate) fn compact(formatter: &'b mut Formatter<'c>, realm: &'d Realm) -> Self {
        Renderer {
            max_depth: 0,
            current_depth: 1,
            formatter,
            representation: Representation::Compact,
            realm,
        }
    }

    pub(crate) fn debug(formatter: &'b mut Formatter<'c>, realm: &'d Realm, depth: usize) -> Self {
        Renderer {
            max_depth: depth,
            current_depth: 0,
            formatter,
            representation: Representation::Debug,
            realm,
        }
    }

    #[inline]
    pub(crate) fn internal_key(&mut self, key: &str) -> Result {
        self.formatter.write_fmt(format_args!("{}: ", key.blue()))
    }

    #[inline]
    pub(crate) fn literal(&mut self, value: &str) -> Result {
        self.formatter
            .write_fmt(format_args!("{}", value.bright_yellow()))
    }

    #[inline]
    pub(crate) fn string_literal(&mut self, value: &str) -> Result {
        self.formatter
            .write_fmt(format_args!("\"{}\"", value.bright_yellow()))
    }

    #[inline]
    pub(crate) fn function(&mut self, name: &str) -> Result {
        self.formatter.write_fmt(format_args!(
            "{}{}{}",
            "[Function: ".green(),
            name.green(),
            "]".green()
        ))
    }
}

#[derive(Copy, Clone, PartialEq)]
pub enum Representation {
    Compact,
    Debug,
}

pub trait DebugRepresentation {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> Result;
}

pub struct WithRealm<'b, 'c> {
    value: &'c dyn DebugRepresentation,
    realm: &'b Realm,
}

pub trait DebugWithRealm {
    fn debug_value<'b, 'c>(&'b self, value: &'c dyn DebugRepresentation) -> WithRealm<'b, 'c>;
}

impl DebugWithRealm for Realm {
    fn debug_value<'b, 'c>(&'b self, value: &'c dyn DebugRepresentation) -> WithRealm<'b, 'c> {
        WithRealm { value, realm: self }
    }
}

impl<'b, 'c> Debug for WithRealm<'b, 'c> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut renderer = Renderer::debug(f, self.realm, 5);

        renderer.render(self.value)
    }
}

impl<'b, 'c> Display for WithRealm<'b, 'c> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut renderer = Renderer::compact(f, self.realm);

        renderer.render(self.value)
    }
}

pub trait Unwrap<T> {
    fn expect_value(self, realm: &Realm, message: &str) -> T;
    fn unwrap_value(self, realm: &Realm) -> T;
}

impl<T> Unwrap<T> for ChainResult<T> {
    fn expect_value(self, realm: &Realm, message: &str) -> T {
        match self {
            Ok(result) => result,
            Err(ChainError::Thrown(value)) => {
                panic!("{}: {:?}", message, realm.debug_value(&value))
            }
            Err(ChainError::InternalError(internal_error)) => {
                panic!("{}: {:?}", message, internal_error)
            }
        }
    }

    fn unwrap_value(self, realm: &Realm) -> T {
        self.expect_value(realm, "Expected a value")
    }
}
