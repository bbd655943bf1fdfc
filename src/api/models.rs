use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Custom deserializer: JSON `null` maps to the type's zero value
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Implement `Deserialize` for a `#[serde(remote = "Self")]` struct so that
/// only a JSON object is accepted. The derived impl alone would also build
/// the struct from a positional array.
macro_rules! deserialize_from_object {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct ObjectVisitor;

                impl<'de> Visitor<'de> for ObjectVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a JSON object for {}", stringify!($ty))
                    }

                    fn visit_map<A>(self, map: A) -> Result<$ty, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        $ty::deserialize(MapAccessDeserializer::new(map))
                    }
                }

                deserializer.deserialize_map(ObjectVisitor)
            }
        }
    };
}

// User models
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(remote = "Self")]
pub struct UserRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub last_name: String,
}

deserialize_from_object!(UserRecord);

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Every field on one line, used when debug mode is on
    pub fn debug_dump(&self) -> String {
        format!(
            "UserRecord{{id={}, email='{}', firstName='{}', lastName='{}'}}",
            self.id, self.email, self.first_name, self.last_name
        )
    }
}

/// One page of the user listing. Only `data` is read; paging metadata the
/// endpoint may send (`page`, `total_pages`, ...) is ignored.
#[derive(Debug, Deserialize)]
#[serde(remote = "Self")]
pub struct UsersPage {
    pub data: Vec<UserRecord>,
}

deserialize_from_object!(UsersPage);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_field_mapping() {
        let json = r#"{
            "id": 7,
            "email": "michael.lawson@reqres.in",
            "first_name": "Michael",
            "last_name": "Lawson",
            "avatar": "https://reqres.in/img/faces/7-image.jpg"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "michael.lawson@reqres.in");
        assert_eq!(user.first_name, "Michael");
        assert_eq!(user.last_name, "Lawson");
        assert_eq!(user.full_name(), "Michael Lawson");
    }

    #[test]
    fn test_user_record_missing_fields_default() {
        let json = r#"{ "id": 3, "last_name": "Wong" }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.last_name, "Wong");

        let user: UserRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(user, UserRecord::default());
    }

    #[test]
    fn test_user_record_null_fields_default() {
        let json = r#"{ "id": null, "email": null, "first_name": "Eve", "last_name": null }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.email, "");
        assert_eq!(user.first_name, "Eve");
        assert_eq!(user.full_name(), "Eve ");
    }

    #[test]
    fn test_user_record_wrong_type_is_rejected() {
        let json = r#"{ "id": "seven", "first_name": "Michael" }"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }

    #[test]
    fn test_user_record_positional_array_is_rejected() {
        let json = r#"[7, "ann.lee@reqres.in", "Ann", "Lee"]"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
        assert!(serde_json::from_str::<UserRecord>("null").is_err());
    }

    #[test]
    fn test_debug_dump() {
        let user = UserRecord {
            id: 1,
            email: "george.bluth@reqres.in".to_string(),
            first_name: "George".to_string(),
            last_name: "Bluth".to_string(),
        };
        assert_eq!(
            user.debug_dump(),
            "UserRecord{id=1, email='george.bluth@reqres.in', firstName='George', lastName='Bluth'}"
        );
    }

    #[test]
    fn test_users_page_deserialization() {
        let json = r#"{
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [
                { "id": 7, "email": "a@reqres.in", "first_name": "A", "last_name": "One" },
                { "id": 8, "email": "b@reqres.in", "first_name": "B", "last_name": "Two" }
            ]
        }"#;
        let page: UsersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].first_name, "B");
    }

    #[test]
    fn test_users_page_requires_data_array() {
        assert!(serde_json::from_str::<UsersPage>(r#"{ "page": 1 }"#).is_err());
        assert!(serde_json::from_str::<UsersPage>(r#"{ "data": {} }"#).is_err());
        assert!(serde_json::from_str::<UsersPage>(r#"{ "data": [1, 2] }"#).is_err());
        assert!(serde_json::from_str::<UsersPage>("[]").is_err());
        assert!(serde_json::from_str::<UsersPage>("[[]]").is_err());
        assert!(
            serde_json::from_str::<UsersPage>(r#"{ "data": [[7, "a@x", "Ann", "Lee"]] }"#).is_err()
        );

        let page: UsersPage = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(page.data.is_empty());
    }
}
