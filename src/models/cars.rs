use serde::{Deserialize, Serialize};

/// Response of `GET /cars`.
///
/// `total` counts every model the backend knows about, `cars` only the ones
/// matching the search (the backend may also cap the list length).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarList {
    #[serde(default)]
    pub cars: Vec<String>,
    #[serde(default)]
    pub total: u64,
}

impl CarList {
    pub fn shown(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let list: CarList =
            serde_json::from_str(r#"{"cars": ["Honda Civic", "Toyota Corolla"], "total": 312}"#)
                .unwrap();

        assert_eq!(list.shown(), 2);
        assert_eq!(list.total, 312);
        assert_eq!(list.cars[0], "Honda Civic");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let list: CarList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.total, 0);
    }
}
