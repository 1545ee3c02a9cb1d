use itertools::Itertools;
use std::fmt::{Display, Formatter};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};
use uuid::Uuid;

/// Value keys used by the flight computer command nodes.
pub mod keys {
    pub const MODE: &str = "Mode";
    pub const ATTITUDE: &str = "Attitude";
    pub const FRAME: &str = "Frame";
    pub const ORIENTATION: &str = "Orientation";
    pub const ALTITUDE: &str = "Altitude";
    pub const THROTTLE: &str = "Throttle";
    pub const DURATION: &str = "Duration";
    pub const DELTA_V: &str = "DeltaV";
    pub const KAC_ITEM_ID: &str = "KaCItemId";
    pub const NODE_INDEX: &str = "NodeIndex";
    pub const TIME_STAMP: &str = "TimeStamp";
    pub const EXTRA_DELAY: &str = "ExtraDelay";
    pub const GUID: &str = "Guid";
}

/// Placeholder the executor reads as "no altitude".
pub const ALTITUDE_UNUSED: &str = "NaN";

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, StrumDisplay, EnumString, EnumIter, AsRefStr,
    serde::Serialize, serde::Deserialize,
)]
pub enum CommandKind {
    AttitudeCommand,
    BurnCommand,
    ManeuverCommand,
}

impl CommandKind {
    /// The fixed, ordered key layout of a record of this kind.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            CommandKind::AttitudeCommand => &[
                keys::MODE,
                keys::ATTITUDE,
                keys::FRAME,
                keys::ORIENTATION,
                keys::ALTITUDE,
                keys::TIME_STAMP,
                keys::EXTRA_DELAY,
                keys::GUID,
            ],
            CommandKind::BurnCommand => &[
                keys::THROTTLE,
                keys::DURATION,
                keys::DELTA_V,
                keys::KAC_ITEM_ID,
                keys::TIME_STAMP,
                keys::EXTRA_DELAY,
                keys::GUID,
            ],
            CommandKind::ManeuverCommand => &[
                keys::NODE_INDEX,
                keys::KAC_ITEM_ID,
                keys::TIME_STAMP,
                keys::EXTRA_DELAY,
                keys::GUID,
            ],
        }
    }
}

/// A scalar command value.
///
/// Guids serialize as plain strings, so they only come back as
/// [`CommandValue::Guid`] under the [`keys::GUID`] key of a record.
#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CommandValue {
    Integer(i64),
    Number(f64),
    #[serde(skip_deserializing)]
    Guid(Uuid),
    Text(String),
}

impl CommandValue {
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CommandValue::Number(n) => Some(*n),
            CommandValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CommandValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            CommandValue::Guid(g) => Some(*g),
            _ => None,
        }
    }
}

impl Display for CommandValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValue::Integer(i) => write!(f, "{i}"),
            CommandValue::Number(n) => write!(f, "{n}"),
            CommandValue::Guid(g) => write!(f, "{}", g.hyphenated()),
            CommandValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CommandValue {
    fn from(value: f64) -> Self { CommandValue::Number(value) }
}

impl From<i64> for CommandValue {
    fn from(value: i64) -> Self { CommandValue::Integer(value) }
}

impl From<Uuid> for CommandValue {
    fn from(value: Uuid) -> Self { CommandValue::Guid(value) }
}

impl From<&str> for CommandValue {
    fn from(value: &str) -> Self { CommandValue::Text(value.to_string()) }
}

impl From<String> for CommandValue {
    fn from(value: String) -> Self { CommandValue::Text(value) }
}

/// An ordered key-value command node, ready to be queued on the flight computer.
///
/// Records are only built through the per-kind constructors, so the key layout
/// always matches [`CommandKind::keys`] and every record owns a fresh [`Uuid`].
#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct CommandRecord {
    kind: CommandKind,
    #[serde(deserialize_with = "deserialize_values")]
    values: Vec<(String, CommandValue)>,
}

fn deserialize_values<'de, D>(deserializer: D) -> Result<Vec<(String, CommandValue)>, D::Error>
where D: serde::Deserializer<'de> {
    let values = <Vec<(String, CommandValue)> as serde::Deserialize>::deserialize(deserializer)?;
    values
        .into_iter()
        .map(|(key, value)| match value {
            CommandValue::Text(text) if key == keys::GUID => {
                let guid = Uuid::parse_str(&text).map_err(serde::de::Error::custom)?;
                Ok((key, CommandValue::Guid(guid)))
            }
            other => Ok((key, other)),
        })
        .collect()
}

impl CommandRecord {
    fn new(kind: CommandKind, values: Vec<(&str, CommandValue)>) -> Self {
        debug_assert!(values.iter().map(|(k, _)| *k).eq(kind.keys().iter().copied()));
        Self {
            kind,
            values: values.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Point-and-hold command. `orientation` is forwarded verbatim.
    pub fn attitude(
        mode: &str,
        attitude: &str,
        frame: &str,
        orientation: &str,
        time_stamp: f64,
        extra_delay: f64,
    ) -> Self {
        Self::new(CommandKind::AttitudeCommand, vec![
            (keys::MODE, mode.into()),
            (keys::ATTITUDE, attitude.into()),
            (keys::FRAME, frame.into()),
            (keys::ORIENTATION, orientation.into()),
            (keys::ALTITUDE, ALTITUDE_UNUSED.into()),
            (keys::TIME_STAMP, time_stamp.into()),
            (keys::EXTRA_DELAY, extra_delay.into()),
            (keys::GUID, Uuid::new_v4().into()),
        ])
    }

    /// Timed burn. Delta-v is left at 0 for the executor to fill in.
    pub fn burn(throttle: f64, duration: f64, time_stamp: f64, extra_delay: f64) -> Self {
        Self::new(CommandKind::BurnCommand, vec![
            (keys::THROTTLE, throttle.into()),
            (keys::DURATION, duration.into()),
            (keys::DELTA_V, 0.0_f64.into()),
            (keys::KAC_ITEM_ID, CommandValue::Text(String::new())),
            (keys::TIME_STAMP, time_stamp.into()),
            (keys::EXTRA_DELAY, extra_delay.into()),
            (keys::GUID, Uuid::new_v4().into()),
        ])
    }

    /// Execution of the maneuver node at `node_index`, starting at `time_stamp`.
    pub fn maneuver(node_index: i64, time_stamp: f64, extra_delay: f64) -> Self {
        Self::new(CommandKind::ManeuverCommand, vec![
            (keys::NODE_INDEX, node_index.into()),
            (keys::KAC_ITEM_ID, CommandValue::Text(String::new())),
            (keys::TIME_STAMP, time_stamp.into()),
            (keys::EXTRA_DELAY, extra_delay.into()),
            (keys::GUID, Uuid::new_v4().into()),
        ])
    }

    pub fn kind(&self) -> CommandKind { self.kind }

    pub fn values(&self) -> &[(String, CommandValue)] { &self.values }

    pub fn keys(&self) -> impl Iterator<Item = &str> { self.values.iter().map(|(k, _)| k.as_str()) }

    pub fn get(&self, key: &str) -> Option<&CommandValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn guid(&self) -> Option<Uuid> { self.get(keys::GUID).and_then(CommandValue::as_guid) }

    pub fn time_stamp(&self) -> Option<f64> {
        self.get(keys::TIME_STAMP).and_then(CommandValue::as_f64)
    }
}

impl Display for CommandRecord {
    /// Renders the record as a config node:
    /// ```text
    /// BurnCommand
    /// {
    ///     Throttle = 1
    ///     ...
    /// }
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let body = self.values.iter().map(|(k, v)| format!("\t{k} = {v}")).join("\n");
        write!(f, "{}\n{{\n{body}\n}}", self.kind)
    }
}
