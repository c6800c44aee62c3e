//! Emission and speed presets for the booking inventory.

#[derive(Debug, Clone, Copy)]
pub struct TransportPreset {
    /// kg of CO2 emitted per km travelled
    pub co2_per_km: f64,
    pub avg_speed_kmh: f64,
}

pub struct TransportPresets {
    pub plane: TransportPreset,
    pub train: TransportPreset,
    pub bus: TransportPreset,
    pub luxury_jet: TransportPreset,
}

pub const TRANSPORT: TransportPresets = TransportPresets {
    plane: TransportPreset {
        co2_per_km: 0.25,
        avg_speed_kmh: 850.0,
    },
    train: TransportPreset {
        co2_per_km: 0.04,
        avg_speed_kmh: 300.0,
    },
    bus: TransportPreset {
        co2_per_km: 0.08,
        avg_speed_kmh: 100.0,
    },
    luxury_jet: TransportPreset {
        co2_per_km: 0.40,
        avg_speed_kmh: 2000.0,
    },
};
