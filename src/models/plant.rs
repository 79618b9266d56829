//! Plant (site) model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;
use crate::table::{FieldValue, TableRecord};

/// A production/distribution site employees and teams are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique plant identifier.
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub plant_type: PlantType,
    pub status: PlantStatus,
    /// Headcount capacity.
    pub capacity: u32,
    /// Managing employee.
    pub manager_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantType {
    Production,
    Assembly,
    Distribution,
    ResearchAndDevelopment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantStatus {
    Operational,
    Maintenance,
    Offline,
}

impl Plant {
    /// Creates an operational plant.
    pub fn new(id: EntityId, name: impl Into<String>, plant_type: PlantType) -> Self {
        Self {
            id,
            name: name.into(),
            location: String::new(),
            plant_type,
            status: PlantStatus::Operational,
            capacity: 0,
            manager_id: 0,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: PlantStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the managing employee.
    pub fn with_manager(mut self, manager_id: EntityId) -> Self {
        self.manager_id = manager_id;
        self
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlantType::Production => "Production",
            PlantType::Assembly => "Assembly",
            PlantType::Distribution => "Distribution",
            PlantType::ResearchAndDevelopment => "R&D",
        };
        f.write_str(s)
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlantStatus::Operational => "Operational",
            PlantStatus::Maintenance => "Maintenance",
            PlantStatus::Offline => "Offline",
        };
        f.write_str(s)
    }
}

impl TableRecord for Plant {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Int(self.id as i64),
            "name" => FieldValue::Text(self.name.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "type" => FieldValue::Text(self.plant_type.to_string()),
            "status" => FieldValue::Text(self.status.to_string()),
            "capacity" => FieldValue::Int(self.capacity as i64),
            "manager_id" => FieldValue::Int(self.manager_id as i64),
            _ => FieldValue::Text(String::new()),
        }
    }
}
