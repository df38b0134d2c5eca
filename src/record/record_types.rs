//! The record shape shared by all codecs

use serde::{Deserialize, Serialize};

/// A synthetic user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Record {
    /// Display name, `User<index>`
    pub name: String,
    /// Age in years
    pub age: u8,
    /// Contact address, `user<index>@example.com`
    pub email: String,
}

impl Record {
    /// Build the record at position `index` with the given age
    pub fn for_index(index: usize, age: u8) -> Self {
        Self {
            name: format!("User{}", index),
            age,
            email: format!("user{}@example.com", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_index() {
        let record = Record::for_index(42, 7);
        assert_eq!(record.name, "User42");
        assert_eq!(record.age, 7);
        assert_eq!(record.email, "user42@example.com");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&Record::for_index(0, 10)).unwrap();
        assert_eq!(json, r#"{"name":"User0","age":10,"email":"user0@example.com"}"#);
    }
}
