//! `TOKEN=VALUE` arguments and the order they are applied in.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::error::Error;

/// One literal token and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub token: String,
    pub value: String,
}

impl Substitution {
    /// Parses a `TOKEN=VALUE` argument.
    ///
    /// The argument is split at the first `=`, so values may contain `=` but
    /// tokens may not. A value wrapped in one pair of double quotes has that
    /// pair removed; a lone leading or trailing quote is kept as content.
    pub fn parse(arg: &str) -> Result<Self, Error> {
        let (token, value) = arg.split_once('=').ok_or_else(|| {
            Error::InvalidArgument(format!("expected TOKEN=VALUE, got '{arg}'"))
        })?;

        if token.is_empty() {
            return Err(Error::InvalidArgument(format!("empty token in '{arg}'")));
        }

        Ok(Self {
            token: token.to_string(),
            value: strip_quotes(value).to_string(),
        })
    }
}

impl FromStr for Substitution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Order in which substitutions are applied to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceOrder {
    /// Command-line order. A value that contains a later token is itself
    /// replaced by that later token's pass.
    #[default]
    Arguments,
    /// Longer tokens first, ties in command-line order. A token that is a
    /// substring of another no longer consumes the longer token's matches.
    LongestFirst,
}

/// Token to value mapping built from command-line arguments.
///
/// Tokens are unique: a repeated token takes the last value given while
/// keeping the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: Vec<Substitution>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every argument, failing on the first malformed one.
    pub fn from_args<I, S>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for arg in args {
            map.insert(Substitution::parse(arg.as_ref())?);
        }
        Ok(map)
    }

    pub fn insert(&mut self, substitution: Substitution) {
        let token = substitution.token.as_str();
        match self.entries.iter_mut().find(|e| e.token == token) {
            Some(existing) => existing.value = substitution.value,
            None => self.entries.push(substitution),
        }
    }

    /// Rearranges the entries for `order`.
    pub fn ordered(mut self, order: ReplaceOrder) -> Self {
        if order == ReplaceOrder::LongestFirst {
            // sort_by_key is stable, which keeps argument order among equal lengths.
            self.entries.sort_by_key(|e| Reverse(e.token.len()));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.entries.iter()
    }

    /// Replaces every literal occurrence of each token in `line`, one pass
    /// per token in the map's order.
    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();
        for Substitution { token, value } in &self.entries {
            if line.contains(token.as_str()) {
                line = line.replace(token.as_str(), value);
            }
        }
        line
    }
}
