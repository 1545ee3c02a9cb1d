use super::vessel::{ManeuverNode, VesselStateProvider};

/// Burn duration estimate for a single maneuver node.
///
/// Derived from the rocket equation: the propellant consumed for a given
/// delta-v divided by the mass flow rate of the engines.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BurnEstimate {
    mass: f64,
    isp: f64,
    gravity: f64,
    thrust: f64,
    delta_v: f64,
}

impl BurnEstimate {
    pub fn new(mass: f64, isp: f64, gravity: f64, thrust: f64, delta_v: f64) -> Self {
        Self { mass, isp, gravity, thrust, delta_v }
    }

    /// Reads mass, specific impulse, gravity and thrust from the provider and
    /// the delta-v magnitude from `node`.
    pub fn for_node<P: VesselStateProvider + ?Sized>(vessel: &P, node: &ManeuverNode) -> Self {
        Self::new(
            vessel.mass(),
            vessel.specific_impulse(),
            vessel.gravity(),
            vessel.thrust(),
            node.delta_v_magnitude(),
        )
    }

    /// Effective exhaust velocity `isp * g` in m/s.
    pub fn exhaust_velocity(&self) -> f64 { self.isp * self.gravity }

    /// Mass flow rate `T / (isp * g)` in kg/s.
    pub fn mass_flow(&self) -> f64 { self.thrust / self.exhaust_velocity() }

    /// Propellant mass `m - m * exp(-dv / (isp * g))` in kg.
    pub fn propellant_mass(&self) -> f64 {
        self.mass - self.mass * (-self.delta_v / self.exhaust_velocity()).exp()
    }

    /// Burn duration in seconds. Not finite without thrust.
    pub fn burn_time(&self) -> f64 { self.propellant_mass() / self.mass_flow() }

    /// Ignition time that centers the burn on `node_ut`.
    pub fn start_time(&self, node_ut: f64) -> f64 { node_ut - self.burn_time() / 2.0 }
}
