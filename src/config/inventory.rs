//! The fixed set of trips offered by the travel binary.
use crate::domain::TransportKind;

#[derive(Debug, Clone, Copy)]
pub struct PlaceRef {
    pub city: &'static str,
    pub country: &'static str,
}

/// One bookable trip. The basic trip table uses the transport name only,
/// the booking table uses the full preset plus distance.
#[derive(Debug, Clone, Copy)]
pub struct InventoryEntry {
    pub origin: PlaceRef,
    pub destination: PlaceRef,
    pub transport: TransportKind,
    pub total_cost: f64,
    pub duration_days: u32,
    pub distance_km: f64,
}

pub struct InventoryConfig {
    pub entries: &'static [InventoryEntry],
}

const LISBON: PlaceRef = PlaceRef {
    city: "Lisbon",
    country: "Portugal",
};
const PARIS: PlaceRef = PlaceRef {
    city: "Paris",
    country: "France",
};
const MADRID: PlaceRef = PlaceRef {
    city: "Madrid",
    country: "Spain",
};
const BERLIN: PlaceRef = PlaceRef {
    city: "Berlin",
    country: "Germany",
};
const NEW_YORK: PlaceRef = PlaceRef {
    city: "New York",
    country: "USA",
};

pub const INVENTORY: InventoryConfig = InventoryConfig {
    entries: &[
        InventoryEntry {
            origin: LISBON,
            destination: PARIS,
            transport: TransportKind::Plane,
            total_cost: 1600.0,
            duration_days: 6,
            distance_km: 1450.0,
        },
        InventoryEntry {
            origin: PARIS,
            destination: MADRID,
            transport: TransportKind::Train,
            total_cost: 1800.0,
            duration_days: 8,
            distance_km: 1050.0,
        },
        InventoryEntry {
            origin: LISBON,
            destination: MADRID,
            transport: TransportKind::Bus,
            total_cost: 500.0,
            duration_days: 3,
            distance_km: 500.0,
        },
        InventoryEntry {
            origin: PARIS,
            destination: BERLIN,
            transport: TransportKind::Plane,
            total_cost: 1200.0,
            duration_days: 4,
            distance_km: 880.0,
        },
        InventoryEntry {
            origin: PARIS,
            destination: NEW_YORK,
            transport: TransportKind::LuxuryJet,
            total_cost: 5000.0,
            duration_days: 5,
            distance_km: 5800.0,
        },
        InventoryEntry {
            origin: BERLIN,
            destination: LISBON,
            transport: TransportKind::Train,
            total_cost: 2100.0,
            duration_days: 12,
            distance_km: 2300.0,
        },
    ],
};
