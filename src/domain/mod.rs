// Domain types and value objects
mod eco_trip;
mod error;
mod place;
mod transport_mode;
mod trip;

// Re-export commonly used types to the world
pub use eco_trip::EcoTrip;
pub use error::DomainError;
pub use place::Place;
pub use transport_mode::{TransportKind, TransportMode};
pub use trip::Trip;

/// Rejects negative, NaN and infinite inputs for the non-negative quantities of the travel model.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidQuantity { field, value })
    }
}
