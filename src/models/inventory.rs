use log::debug;

use crate::config::{INVENTORY, InventoryEntry, PlaceRef};
use crate::domain::{DomainError, EcoTrip, Place, Trip};

/// Builds the domain objects for the configured trip inventory.
pub struct Inventory;

impl Inventory {
    fn place(place: PlaceRef) -> Place {
        Place::new(place.city, place.country)
    }

    fn trip(entry: &InventoryEntry) -> Result<Trip, DomainError> {
        Trip::new(
            Self::place(entry.origin),
            Self::place(entry.destination),
            entry.transport.to_string(),
            entry.total_cost,
            entry.duration_days,
        )
    }

    fn eco_trip(entry: &InventoryEntry) -> Result<EcoTrip, DomainError> {
        EcoTrip::new(
            Self::place(entry.origin),
            Self::place(entry.destination),
            entry.transport.mode(),
            entry.total_cost,
            entry.duration_days,
            entry.distance_km,
        )
    }

    /// Every inventory entry as a plain trip, in inventory order.
    pub fn basic_trips() -> Result<Vec<Trip>, DomainError> {
        let trips = INVENTORY
            .entries
            .iter()
            .map(Self::trip)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built {} basic trips", trips.len());
        Ok(trips)
    }

    /// Every inventory entry with distance and transport preset, in inventory order.
    pub fn eco_trips() -> Result<Vec<EcoTrip>, DomainError> {
        let trips = INVENTORY
            .entries
            .iter()
            .map(Self::eco_trip)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built {} eco trips", trips.len());
        Ok(trips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_and_eco_trips_line_up() {
        let basic = Inventory::basic_trips().unwrap();
        let eco = Inventory::eco_trips().unwrap();
        assert_eq!(basic.len(), 6);
        assert_eq!(basic.len(), eco.len());
        for (plain, full) in basic.iter().zip(&eco) {
            assert_eq!(plain, &full.as_trip());
        }
    }

    #[test]
    fn fifth_trip_is_the_luxury_jet_to_new_york() {
        let basic = Inventory::basic_trips().unwrap();
        assert_eq!(basic[4].destination.city(), "New York");
        assert_eq!(basic[4].transport_mode, "LuxuryJet");
        assert_eq!(basic[4].total_cost(), 5000.0);
    }
}
