//! Tri-state field for partial updates
//!
//! JSON partial updates need to distinguish a field that was omitted (keep
//! the stored value) from one that was explicitly `null` (clear the stored
//! value). `Option<T>` collapses both into `None`; [`Patch<T>`] keeps them
//! apart.

use serde::{Deserialize, Deserializer};

/// One field of a partial update: omitted, explicit null, or a new value.
///
/// Use with `#[serde(default)]` so an absent key deserializes to `Missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Key absent from the payload; keep the stored value
    Missing,
    /// Key present as `null`; clear the stored value
    Null,
    /// Key present with a value; replace the stored value
    Value(T),
}

// Not derived: that would bound `T: Default`, which record ids lack.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Map the carried value, preserving `Missing`/`Null`.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        Ok(match self {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)?),
        })
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Update {
        #[serde(default)]
        note: Patch<String>,
    }

    #[test]
    fn absent_key_is_missing() {
        let u: Update = serde_json::from_str("{}").unwrap();
        assert_eq!(u.note, Patch::Missing);
    }

    #[test]
    fn null_key_is_null() {
        let u: Update = serde_json::from_str(r#"{"note":null}"#).unwrap();
        assert_eq!(u.note, Patch::Null);
    }

    #[test]
    fn present_key_is_value() {
        let u: Update = serde_json::from_str(r#"{"note":"hi"}"#).unwrap();
        assert_eq!(u.note, Patch::Value("hi".to_string()));
    }

    #[test]
    fn try_map_preserves_shape() {
        let missing: Patch<&str> = Patch::Missing;
        assert_eq!(
            missing.try_map(|_| Ok::<_, ()>(1)).unwrap(),
            Patch::Missing
        );
        let null: Patch<&str> = Patch::Null;
        assert_eq!(null.try_map(|_| Ok::<_, ()>(1)).unwrap(), Patch::Null);
        let value: Patch<&str> = Patch::Value("7");
        assert_eq!(
            value.try_map(|s| s.parse::<i32>()).unwrap(),
            Patch::Value(7)
        );
    }
}
