//! API forms for the [`place`](crate::servers::apis::v1::context::place)
//! API context.
use serde::{Deserialize, Serialize};

/// The form to add a place. The owner is taken from the access token, not
/// from the form.
#[derive(Serialize, Deserialize, Debug)]
pub struct AddPlaceForm {
    /// The title of the place.
    pub title: String,
    /// An optional description.
    pub description: Option<String>,
    /// The price per night.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// The ids of the amenities the place offers.
    pub amenities: Option<Vec<String>>,
}

/// The form to update a place. Absent attributes are kept unchanged. The
/// owner cannot be changed.
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdatePlaceForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// The new list of amenity ids. When present it replaces the old one.
    pub amenities: Option<Vec<String>>,
}
