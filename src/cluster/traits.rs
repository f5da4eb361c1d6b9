/// Anything that can be placed on the map.
///
/// The clustering engine reads only these three accessors; every other field
/// of the implementing type is carried through untouched.
pub trait Geolocated {
    /// Identifier, unique within one clustering call.
    fn id(&self) -> &str;

    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Longitude in degrees.
    fn lng(&self) -> f64;
}

impl<T: Geolocated + ?Sized> Geolocated for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}
