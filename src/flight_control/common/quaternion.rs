use num::traits::Num;
use std::fmt::{Display, Formatter};

/// A rotation quaternion in `(x, y, z, w)` component order.
///
/// This is the order in which the vessel-state provider reports the vessel
/// rotation and in which the flight computer expects the `Orientation` value
/// of an attitude command.
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Quaternion<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

impl<T: Copy> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self { x, y, z, w } }

    pub const fn x(&self) -> T { self.x }

    pub const fn y(&self) -> T { self.y }

    pub const fn z(&self) -> T { self.z }

    pub const fn w(&self) -> T { self.w }
}

impl<T: Num + Copy> Quaternion<T> {
    /// The identity rotation, serialized as `"0,0,0,1"`.
    pub fn identity() -> Self { Self::new(T::zero(), T::zero(), T::zero(), T::one()) }
}

impl<T> From<(T, T, T, T)> for Quaternion<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Quaternion { x: tuple.0, y: tuple.1, z: tuple.2, w: tuple.3 }
    }
}

impl<T: Display> Display for Quaternion<T> {
    /// Comma separated components without whitespace, e.g. `0,0,0,1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}
