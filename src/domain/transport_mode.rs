use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::{DomainError, ensure_non_negative};
use crate::config::TRANSPORT;

/// Emission and speed profile of a way of travelling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransportMode {
    pub name: String,
    /// kg of CO2 per km
    co2_per_km: f64,
    avg_speed_kmh: f64,
}

impl TransportMode {
    pub fn new(
        name: impl Into<String>,
        co2_per_km: f64,
        avg_speed_kmh: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.into(),
            co2_per_km: ensure_non_negative("co2_per_km", co2_per_km)?,
            avg_speed_kmh: ensure_non_negative("avg_speed_kmh", avg_speed_kmh)?,
        })
    }

    pub fn co2_per_km(&self) -> f64 {
        self.co2_per_km
    }

    pub fn avg_speed_kmh(&self) -> f64 {
        self.avg_speed_kmh
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The transport presets offered by the booking inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum TransportKind {
    Plane,
    Train,
    Bus,
    LuxuryJet,
}

impl TransportKind {
    pub fn mode(self) -> TransportMode {
        let preset = match self {
            Self::Plane => TRANSPORT.plane,
            Self::Train => TRANSPORT.train,
            Self::Bus => TRANSPORT.bus,
            Self::LuxuryJet => TRANSPORT.luxury_jet,
        };
        // Presets are compile-time constants, so they skip validation
        TransportMode {
            name: self.to_string(),
            co2_per_km: preset.co2_per_km,
            avg_speed_kmh: preset.avg_speed_kmh,
        }
    }
}
