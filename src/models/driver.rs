//! Season driver roster model.

use serde::{Deserialize, Serialize};

use super::{DriverId, EntityId};

/// A driver entered in a season.
///
/// The roster is part of the season snapshot: a driver who never recorded a
/// result still appears here and is ranked at the bottom of the standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Unique identifier (derived from the driver name at import time)
    pub id: DriverId,

    /// Display name
    pub name: String,

    /// Team or constructor name, if the league tracks teams
    pub team: Option<String>,

    /// Car number
    pub car_number: Option<u32>,
}

impl Driver {
    /// Create a new Driver with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&[&name]);

        Self {
            id,
            name,
            team: None,
            car_number: None,
        }
    }

    /// Builder method to set the team name.
    pub fn with_team(mut self, team: String) -> Self {
        self.team = Some(team);
        self
    }

    /// Builder method to set the car number.
    pub fn with_car_number(mut self, number: u32) -> Self {
        self.car_number = Some(number);
        self
    }
}
