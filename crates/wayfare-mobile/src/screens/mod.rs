//! Mobile screens: the new-trip wizard and the trip view.

mod activities;
mod create_trip;
mod details;
mod trip;

pub use create_trip::CreateTripScreen;
pub use trip::TripScreen;
