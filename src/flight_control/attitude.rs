use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Pointing modes understood by the flight computer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum AttitudeMode {
    Off,
    KillRot,
    AttitudeHold,
    AltitudeHold,
}

/// Direction to hold, interpreted relative to a [`ReferenceFrame`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum FlightAttitude {
    Null,
    NormalPlus,
    NormalMinus,
    RadialPlus,
    RadialMinus,
    Prograde,
    Retrograde,
    Surface,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ReferenceFrame {
    Orbit,
    Surface,
    TargetVelocity,
    TargetParallel,
    North,
    Maneuver,
    World,
}

/// The six orbital axes accepted by [`FlightComputer::orbital`](super::FlightComputer::orbital).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum OrbitalAxis {
    Prograde,
    Retrograde,
    RadialPlus,
    RadialMinus,
    NormalPlus,
    NormalMinus,
}

impl From<OrbitalAxis> for FlightAttitude {
    fn from(value: OrbitalAxis) -> Self {
        match value {
            OrbitalAxis::Prograde => FlightAttitude::Prograde,
            OrbitalAxis::Retrograde => FlightAttitude::Retrograde,
            OrbitalAxis::RadialPlus => FlightAttitude::RadialPlus,
            OrbitalAxis::RadialMinus => FlightAttitude::RadialMinus,
            OrbitalAxis::NormalPlus => FlightAttitude::NormalPlus,
            OrbitalAxis::NormalMinus => FlightAttitude::NormalMinus,
        }
    }
}
