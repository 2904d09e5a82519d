//! Common serde helpers for record link fields
//!
//! Record ids are serialized as `"table:key"` strings for API JSON, and
//! deserialized from either that string form (API input, JSON bodies in
//! tests) or the native SurrealDB representation (query results).

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Accepts both the string form and the native RecordId form
#[derive(Debug, Clone)]
struct FlexibleRecordId(RecordId);

impl<'de> Deserialize<'de> for FlexibleRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string 'table:key' or RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(FlexibleRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid RecordId: {}", value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                // Delegate to the native RecordId deserializer
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FlexibleRecordId)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// RecordId serialization as "table:key" string
pub mod record_id {
    use super::*;

    pub fn serialize<S>(id: &RecordId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexibleRecordId::deserialize(d).map(|f| f.0)
    }
}

/// Option<RecordId> serialization
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<FlexibleRecordId>::deserialize(d).map(|opt| opt.map(|f| f.0))
    }
}

/// Vec<RecordId> serialization
pub mod vec_record_id {
    use super::*;

    pub fn serialize<S>(ids: &[RecordId], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(ids.len()))?;
        for id in ids {
            seq.serialize_element(&id.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<FlexibleRecordId>::deserialize(d).map(|v| v.into_iter().map(|f| f.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use surrealdb::RecordId;

    #[derive(Serialize, Deserialize)]
    struct Doc {
        #[serde(with = "super::record_id")]
        link: RecordId,
        #[serde(default, with = "super::option_record_id")]
        maybe: Option<RecordId>,
        #[serde(default, with = "super::vec_record_id")]
        many: Vec<RecordId>,
    }

    #[test]
    fn serializes_links_as_strings() {
        let doc = Doc {
            link: RecordId::from_table_key("employee", "e1"),
            maybe: None,
            many: vec![RecordId::from_table_key("benefit", "b1")],
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["link"], "employee:e1");
        assert!(json["maybe"].is_null());
        assert_eq!(json["many"][0], "benefit:b1");
    }

    #[test]
    fn deserializes_links_from_strings() {
        let doc: Doc = serde_json::from_str(
            r#"{"link":"employee:e1","maybe":"payroll:p1","many":["benefit:b1","benefit:b2"]}"#,
        )
        .unwrap();
        assert_eq!(doc.link, RecordId::from_table_key("employee", "e1"));
        assert_eq!(doc.maybe, Some(RecordId::from_table_key("payroll", "p1")));
        assert_eq!(doc.many.len(), 2);
    }

    #[test]
    fn rejects_malformed_link_strings() {
        assert!(serde_json::from_str::<Doc>(r#"{"link":"not-a-record-id!"}"#).is_err());
    }
}
