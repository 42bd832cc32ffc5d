use crate::error::{InvalidStudentIdSnafu, RegistryError, RegistryResult, ZeroStudentIdSnafu};
use serde::Serialize;
use serde_json::{Map, Value};
use snafu::{ResultExt, ensure};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Everything a caller sent for a student, in the order they sent it.
pub type StudentFields = Map<String, Value>;

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = RegistryError;

    fn from_str(s: &str) -> RegistryResult<Self> {
        let trimmed = s.trim();
        let id: u64 = trimmed.parse().context(InvalidStudentIdSnafu { original: s })?;
        ensure!(id != 0, ZeroStudentIdSnafu { original: s });
        Ok(Self(id))
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl Student {
    /// Any `id` the caller supplied is dropped, the assigned one always wins.
    #[must_use]
    pub fn new(id: StudentId, mut fields: StudentFields) -> Self {
        fields.shift_remove("id");
        Self { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> StudentFields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn ids_parse_like_path_segments() {
        assert_eq!("7".parse::<StudentId>().unwrap(), StudentId(7));
        assert_eq!(" 12 ".parse::<StudentId>().unwrap(), StudentId(12));
        assert_eq!("007".parse::<StudentId>().unwrap(), StudentId(7));

        assert!(matches!(
            "abc".parse::<StudentId>(),
            Err(RegistryError::InvalidStudentId { .. })
        ));
        assert!(matches!(
            "-1".parse::<StudentId>(),
            Err(RegistryError::InvalidStudentId { .. })
        ));
        assert!(matches!(
            "".parse::<StudentId>(),
            Err(RegistryError::InvalidStudentId { .. })
        ));
        assert!(matches!(
            "0".parse::<StudentId>(),
            Err(RegistryError::ZeroStudentId { .. })
        ));
    }

    #[test]
    fn serialises_flat_with_id_first() {
        let student = Student::new(
            StudentId::FIRST,
            fields(json!({"name": "Alice", "age": 20, "grade": "A"})),
        );

        assert_eq!(
            serde_json::to_string(&student).unwrap(),
            r#"{"id":1,"name":"Alice","age":20,"grade":"A"}"#
        );
    }

    #[test]
    fn caller_supplied_id_is_overwritten() {
        let student = Student::new(StudentId(3), fields(json!({"id": 99, "name": "Eve"})));

        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({"id": 3, "name": "Eve"})
        );
    }
}
