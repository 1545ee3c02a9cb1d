use crate::command::CommandQueue;
use crate::flight_control::common::{Quaternion, Vec3D};
use crate::flight_control::{FlightComputer, ManeuverNode, Target, VesselSnapshot};
use rand::Rng;

pub(crate) const MISSION_TIME: f64 = 9_000.0;
pub(crate) const NODE_UT: f64 = 10_000.0;

/// 1 t vessel with a 300 s, 5 kN engine and a 500 m/s node at [`NODE_UT`].
pub(crate) fn vessel_with_node() -> VesselSnapshot {
    VesselSnapshot {
        mission_time: MISSION_TIME,
        mass: 1000.0,
        specific_impulse: 300.0,
        thrust: 5000.0,
        gravity: 9.81,
        rotation: Quaternion::new(0.1, 0.2, 0.3, 0.9),
        maneuver_nodes: vec![ManeuverNode::new(NODE_UT, Vec3D::new(300.0, 400.0, 0.0))],
        target: None,
    }
}

pub(crate) fn vessel_without_node() -> VesselSnapshot {
    VesselSnapshot { maneuver_nodes: Vec::new(), ..vessel_with_node() }
}

pub(crate) fn vessel_with_target(target: Target) -> VesselSnapshot {
    VesselSnapshot { target: Some(target), ..vessel_without_node() }
}

pub(crate) fn random_vessel() -> VesselSnapshot {
    let mut rng = rand::rng();
    let ut = rng.random_range(200.0..1_000_000.0);
    VesselSnapshot {
        mission_time: ut - rng.random_range(0.0..180.0),
        mass: rng.random_range(500.0..200_000.0),
        specific_impulse: rng.random_range(80.0..4200.0),
        thrust: rng.random_range(1_000.0..5_000_000.0),
        gravity: 9.81,
        rotation: Quaternion::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ),
        maneuver_nodes: vec![ManeuverNode::new(
            ut,
            Vec3D::new(
                rng.random_range(-1500.0..1500.0),
                rng.random_range(-1500.0..1500.0),
                rng.random_range(-1500.0..1500.0),
            ),
        )],
        target: None,
    }
}

pub(crate) fn queued(vessel: VesselSnapshot) -> FlightComputer<VesselSnapshot, CommandQueue> {
    FlightComputer::new(vessel, CommandQueue::new())
}
