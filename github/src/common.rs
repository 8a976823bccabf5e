use serde::{de, Deserialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NodeId(String);

/// A git object id, usually the full 40 character hex sha of a commit
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Oid(String);

impl Oid {
    /// The abbreviated form shown in most UIs
    pub fn short(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

// DateTime's from Github can either be in unix epoch time or a string format
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DateTime(
                    v.parse().map_err(|e| E::custom(format!("{}", e)))?,
                ))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                use chrono::{offset::LocalResult, TimeZone};

                match chrono::Utc.timestamp_opt(v, 0) {
                    LocalResult::Single(datetime) => Ok(DateTime(datetime)),
                    _ => Err(E::custom(format!("'{}' is not a legal timestamp", v))),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_i64(v as i64)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_u64(DateTimeVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DateTime, Oid};

    #[test]
    fn datetime_from_string_or_epoch() {
        let from_str: DateTime = serde_json::from_str(r#""2020-02-20T05:17:42Z""#).unwrap();
        let from_epoch: DateTime = serde_json::from_str("1582175862").unwrap();
        assert_eq!(from_str, from_epoch);
        assert!(serde_json::from_str::<DateTime>(r#""yesterday""#).is_err());
    }

    #[test]
    fn short_oid() {
        let oid: Oid = serde_json::from_str(r#""6dcb09b5b57875f334f61aebed695e2e4193db5e""#).unwrap();
        assert_eq!(oid.short(), "6dcb09b");
        let oid: Oid = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(oid.short(), "abc");
    }
}
