use super::common::{Quaternion, Vec3D};
use strum_macros::Display;

/// A planned maneuver node as reported by the game.
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ManeuverNode {
    /// Universal time at which the node is reached, in seconds.
    ut: f64,
    /// Burn vector of the node in m/s.
    delta_v: Vec3D<f64>,
}

impl ManeuverNode {
    pub fn new(ut: f64, delta_v: Vec3D<f64>) -> Self { Self { ut, delta_v } }

    pub fn ut(&self) -> f64 { self.ut }

    pub fn delta_v(&self) -> Vec3D<f64> { self.delta_v }

    /// Magnitude of the burn vector in m/s.
    pub fn delta_v_magnitude(&self) -> f64 { self.delta_v.abs() }
}

/// The currently selected navigation target.
#[derive(Debug, PartialEq, Eq, Clone, Display, serde::Serialize, serde::Deserialize)]
pub enum Target {
    CelestialBody(String),
    DockingPort(String),
    Vessel(String),
}

impl Target {
    pub fn name(&self) -> &str {
        match self {
            Target::CelestialBody(name) | Target::DockingPort(name) | Target::Vessel(name) => name,
        }
    }
}

/// Read access to the active vessel and the game clock.
///
/// The flight computer never caches anything obtained through this trait;
/// every operation queries the provider again.
pub trait VesselStateProvider {
    /// Current universal (mission) time in seconds.
    fn mission_time(&self) -> f64;
    /// Total vessel mass in kg.
    fn mass(&self) -> f64;
    /// Combined vacuum specific impulse of the active engines in s.
    fn specific_impulse(&self) -> f64;
    /// Currently available thrust in N.
    fn thrust(&self) -> f64;
    /// Gravitational acceleration used to convert specific impulse to exhaust velocity.
    fn gravity(&self) -> f64;
    /// Vessel rotation in the orbital reference frame.
    fn rotation(&self) -> Quaternion<f64>;
    /// Pending maneuver nodes, earliest first.
    fn maneuver_nodes(&self) -> Vec<ManeuverNode>;
    /// Selected target, if any.
    fn target(&self) -> Option<Target>;

    fn next_maneuver_node(&self) -> Option<ManeuverNode> { self.maneuver_nodes().first().copied() }
}

impl<P: VesselStateProvider + ?Sized> VesselStateProvider for &P {
    fn mission_time(&self) -> f64 { (**self).mission_time() }
    fn mass(&self) -> f64 { (**self).mass() }
    fn specific_impulse(&self) -> f64 { (**self).specific_impulse() }
    fn thrust(&self) -> f64 { (**self).thrust() }
    fn gravity(&self) -> f64 { (**self).gravity() }
    fn rotation(&self) -> Quaternion<f64> { (**self).rotation() }
    fn maneuver_nodes(&self) -> Vec<ManeuverNode> { (**self).maneuver_nodes() }
    fn target(&self) -> Option<Target> { (**self).target() }
    fn next_maneuver_node(&self) -> Option<ManeuverNode> { (**self).next_maneuver_node() }
}

/// Standard gravity in m/s², the conventional constant for specific impulse.
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// A frozen copy of the vessel state.
///
/// Useful when the host polls the game once per frame and hands the result to
/// the flight computer, and as a stand-in provider in tests.
#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct VesselSnapshot {
    pub mission_time: f64,
    pub mass: f64,
    pub specific_impulse: f64,
    pub thrust: f64,
    pub gravity: f64,
    pub rotation: Quaternion<f64>,
    pub maneuver_nodes: Vec<ManeuverNode>,
    pub target: Option<Target>,
}

impl Default for VesselSnapshot {
    fn default() -> Self {
        Self {
            mission_time: 0.0,
            mass: 0.0,
            specific_impulse: 0.0,
            thrust: 0.0,
            gravity: STANDARD_GRAVITY,
            rotation: Quaternion::identity(),
            maneuver_nodes: Vec::new(),
            target: None,
        }
    }
}

impl VesselStateProvider for VesselSnapshot {
    fn mission_time(&self) -> f64 { self.mission_time }
    fn mass(&self) -> f64 { self.mass }
    fn specific_impulse(&self) -> f64 { self.specific_impulse }
    fn thrust(&self) -> f64 { self.thrust }
    fn gravity(&self) -> f64 { self.gravity }
    fn rotation(&self) -> Quaternion<f64> { self.rotation }
    fn maneuver_nodes(&self) -> Vec<ManeuverNode> { self.maneuver_nodes.clone() }
    fn target(&self) -> Option<Target> { self.target.clone() }
}
