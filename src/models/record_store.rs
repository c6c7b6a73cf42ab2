//! The immutable, insertion-ordered employee record store.
//!
//! The store is the single input of every analytics operation. It is built
//! once (from a data file or directly from employees) and never mutated.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::Employee;
use crate::error::{EngineError, EngineResult};

/// Employees keyed by identifier, iterated in the order they were supplied.
///
/// When deserialized from a JSON object the order is the document order of
/// its keys, and a repeated key is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    employees: Vec<Employee>,
}

impl RecordStore {
    /// Builds a store from employees, rejecting duplicate identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_analytics::models::RecordStore;
    ///
    /// let store = RecordStore::from_employees(vec![]).unwrap();
    /// assert!(store.is_empty());
    /// ```
    pub fn from_employees(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = employees.iter().find(|e| !seen.insert(e.id.as_str())) {
            return Err(EngineError::DuplicateEmployee {
                id: duplicate.id.clone(),
            });
        }
        Ok(Self { employees })
    }

    /// Iterates employees in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Looks up an employee by identifier.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up an employee, failing with `EmployeeNotFound`.
    pub fn require(&self, id: &str) -> EngineResult<&Employee> {
        self.get(id).ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Parses every date in the store, failing on the first malformed one.
    pub fn validate_dates(&self) -> EngineResult<()> {
        self.employees.iter().try_for_each(Employee::validate_dates)
    }
}

impl<'de> Deserialize<'de> for RecordStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = RecordStore;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of employee identifiers to employee records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut employees = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, mut employee)) = map.next_entry::<String, Employee>()? {
                    employee.id = id;
                    employees.push(employee);
                }
                RecordStore::from_employees(employees).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
