use super::{BurnEstimate, FlightComputer, OrbitalAxis, Target, VesselSnapshot};
use crate::command::{CommandKind, CommandQueue, CommandRecord, CommandSink, CommandValue, keys};
use crate::test_support::{
    MISSION_TIME, NODE_UT, queued, random_vessel, vessel_with_node, vessel_with_target,
    vessel_without_node,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn text<'a>(record: &'a CommandRecord, key: &str) -> &'a str {
    record.get(key).and_then(CommandValue::as_str).unwrap()
}

fn number(record: &CommandRecord, key: &str) -> f64 {
    record.get(key).and_then(CommandValue::as_f64).unwrap()
}

fn single(f_cont: &FlightComputer<VesselSnapshot, CommandQueue>) -> CommandRecord {
    let mut records = f_cont.sink().drain();
    assert_eq!(records.len(), 1, "expected exactly one queued command");
    records.remove(0)
}

#[test]
fn test_has_maneuver_node() {
    assert!(queued(vessel_with_node()).has_maneuver_node());
    assert!(!queued(vessel_without_node()).has_maneuver_node());
}

#[test]
fn test_kill_rotation() {
    let f_cont = queued(vessel_with_node());
    assert!(f_cont.kill_rotation(0.0));
    let record = single(&f_cont);
    assert_eq!(record.kind(), CommandKind::AttitudeCommand);
    assert_eq!(text(&record, keys::MODE), "KillRot");
    assert_eq!(text(&record, keys::ATTITUDE), "Prograde");
    assert_eq!(text(&record, keys::FRAME), "World");
    assert_eq!(text(&record, keys::ORIENTATION), "0.1,0.2,0.3,0.9");
    assert_eq!(record.time_stamp(), Some(MISSION_TIME));
}

#[test]
fn test_kill_rotation_follows_vessel_rotation() {
    for _ in 0..20 {
        let vessel = random_vessel();
        let expected = vessel.rotation.to_string();
        let f_cont = queued(vessel);
        assert!(f_cont.kill_rotation(1.5));
        let record = single(&f_cont);
        assert_eq!(text(&record, keys::ORIENTATION), expected);
        assert_eq!(number(&record, keys::EXTRA_DELAY), 1.5);
    }
}

#[test]
fn test_node_leads_maneuver() {
    let f_cont = queued(vessel_with_node());
    assert!(f_cont.node(2.0));
    let record = single(&f_cont);
    assert_eq!(text(&record, keys::MODE), "AttitudeHold");
    assert_eq!(text(&record, keys::ATTITUDE), "Prograde");
    assert_eq!(text(&record, keys::FRAME), "Maneuver");
    assert_eq!(text(&record, keys::ORIENTATION), "0,0,0,1");
    assert_eq!(record.time_stamp(), Some(NODE_UT - 180.0));
    assert_eq!(number(&record, keys::EXTRA_DELAY), 2.0);
}

#[test]
fn test_node_without_maneuver_node_queues_nothing() {
    let f_cont = queued(vessel_without_node());
    assert!(!f_cont.node(0.0));
    assert!(f_cont.sink().is_empty());
}

#[test]
fn test_relative_velocity() {
    let targets = [
        Target::CelestialBody("Mun".to_string()),
        Target::DockingPort("Clamp-O-Tron".to_string()),
        Target::Vessel("Relay 1".to_string()),
    ];
    for target in targets {
        let f_cont = queued(vessel_with_target(target));
        assert!(f_cont.relative_velocity(true, 0.0));
        assert!(f_cont.relative_velocity(false, 0.0));
        let records = f_cont.sink().drain();
        assert_eq!(records.len(), 2);
        assert_eq!(text(&records[0], keys::ATTITUDE), "Prograde");
        assert_eq!(text(&records[1], keys::ATTITUDE), "Retrograde");
        for record in &records {
            assert_eq!(text(record, keys::MODE), "AttitudeHold");
            assert_eq!(text(record, keys::FRAME), "TargetVelocity");
        }
    }
}

#[test]
fn test_relative_velocity_without_target_queues_nothing() {
    let f_cont = queued(vessel_with_node());
    assert!(!f_cont.relative_velocity(true, 0.0));
    assert!(!f_cont.relative_velocity(false, 0.0));
    assert!(f_cont.sink().is_empty());
}

#[test]
fn test_orbital_axes() {
    let f_cont = queued(vessel_without_node());
    for axis in OrbitalAxis::iter() {
        assert!(f_cont.orbital(axis, 0.0));
        let record = single(&f_cont);
        assert_eq!(text(&record, keys::FRAME), "Orbit");
        assert_eq!(text(&record, keys::ATTITUDE), axis.to_string());
        assert_eq!(text(&record, keys::MODE), "AttitudeHold");
    }
}

#[test]
fn test_attitude_timestamp_resolution() {
    let f_cont = queued(vessel_without_node());
    let cases = [
        (-1.0, MISSION_TIME),
        (-42.0, MISSION_TIME),
        (0.0, 0.0),
        (12_345.5, 12_345.5),
        (f64::NAN, MISSION_TIME),
    ];
    for (given, expected) in cases {
        assert!(f_cont.attitude("AttitudeHold", "Surface", "North", 0.0, given, "0,0,0,1"));
        assert_eq!(single(&f_cont).time_stamp(), Some(expected), "timestamp {given}");
    }
}

#[test]
fn test_attitude_layout() {
    let f_cont = queued(vessel_without_node());
    assert!(f_cont.attitude("AltitudeHold", "Null", "Surface", 3.0, -1.0, "1,0,0,0"));
    let record = single(&f_cont);
    assert!(record.keys().eq(CommandKind::AttitudeCommand.keys().iter().copied()));
    assert_eq!(text(&record, keys::MODE), "AltitudeHold");
    assert_eq!(text(&record, keys::ATTITUDE), "Null");
    assert_eq!(text(&record, keys::FRAME), "Surface");
    assert_eq!(text(&record, keys::ORIENTATION), "1,0,0,0");
    assert_eq!(text(&record, keys::ALTITUDE), "NaN");
    assert_eq!(number(&record, keys::EXTRA_DELAY), 3.0);
    assert!(record.guid().is_some());
}

#[test]
fn test_burn() {
    let f_cont = queued(vessel_without_node());
    for (throttle, duration) in [(1.0, 12.0), (-3.0, 0.5), (0.0, 0.0), (250.0, 60.0)] {
        assert!(f_cont.burn(throttle, duration, 4.0));
        let record = single(&f_cont);
        assert_eq!(record.kind(), CommandKind::BurnCommand);
        assert!(record.keys().eq(CommandKind::BurnCommand.keys().iter().copied()));
        assert_eq!(number(&record, keys::THROTTLE), throttle);
        assert_eq!(number(&record, keys::DURATION), duration);
        assert_eq!(number(&record, keys::DELTA_V), 0.0);
        assert_eq!(text(&record, keys::KAC_ITEM_ID), "");
        assert_eq!(record.time_stamp(), Some(MISSION_TIME));
        assert_eq!(number(&record, keys::EXTRA_DELAY), 4.0);
    }
}

#[test]
fn test_burn_time_estimate() {
    let estimate = BurnEstimate::new(1000.0, 300.0, 9.81, 5000.0, 500.0);
    let expected = (1000.0 - 1000.0 * (-500.0_f64 / (300.0 * 9.81)).exp()) / (5000.0 / (300.0 * 9.81));
    assert!((estimate.burn_time() - expected).abs() < 1e-9);
    assert!((estimate.burn_time() - 91.97).abs() < 0.01);
    assert!((estimate.start_time(NODE_UT) - (NODE_UT - expected / 2.0)).abs() < 1e-9);
    assert!(!BurnEstimate::new(1000.0, 300.0, 9.81, 0.0, 500.0).burn_time().is_finite());
}

#[test]
fn test_exec_maneuver_without_thrust_queues_nothing() {
    for (thrust, isp) in [(0.0, 300.0), (0.0, 0.0)] {
        let vessel = VesselSnapshot { thrust, specific_impulse: isp, ..vessel_with_node() };
        let f_cont = queued(vessel);
        assert!(!f_cont.exec_maneuver(0.0), "thrust {thrust}, isp {isp}");
        assert!(f_cont.sink().is_empty());
    }
}

#[test]
fn test_exec_maneuver() {
    let f_cont = queued(vessel_with_node());
    assert!(f_cont.exec_maneuver(5.0));
    let records = f_cont.sink().drain();
    assert_eq!(records.len(), 2);

    let (align, maneuver) = (&records[0], &records[1]);
    assert_eq!(align.kind(), CommandKind::AttitudeCommand);
    assert_eq!(text(align, keys::FRAME), "Maneuver");
    assert_eq!(number(align, keys::EXTRA_DELAY), 5.0);

    assert_eq!(maneuver.kind(), CommandKind::ManeuverCommand);
    assert!(maneuver.keys().eq(CommandKind::ManeuverCommand.keys().iter().copied()));
    assert_eq!(maneuver.get(keys::NODE_INDEX), Some(&CommandValue::Integer(0)));
    assert_eq!(text(maneuver, keys::KAC_ITEM_ID), "");
    assert_eq!(number(maneuver, keys::EXTRA_DELAY), 5.0);
    let burn_time = BurnEstimate::new(1000.0, 300.0, 9.81, 5000.0, 500.0).burn_time();
    let time_stamp = maneuver.time_stamp().unwrap();
    assert!((time_stamp - (NODE_UT - burn_time / 2.0)).abs() < 1e-9);
}

#[test]
fn test_exec_maneuver_without_node_queues_nothing() {
    let f_cont = queued(vessel_without_node());
    assert!(!f_cont.exec_maneuver(0.0));
    assert!(f_cont.sink().is_empty());
}

#[test]
fn test_exec_maneuver_reports_maneuver_outcome() {
    // room for the alignment command only
    let f_cont = FlightComputer::new(vessel_with_node(), CommandQueue::bounded(1));
    assert!(!f_cont.exec_maneuver(0.0));
    let records = f_cont.sink().drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), CommandKind::AttitudeCommand);
}

#[test]
fn test_exec_maneuver_survives_rejected_alignment() {
    let accepted = CommandQueue::new();
    let sink = |record: &CommandRecord| {
        record.kind() != CommandKind::AttitudeCommand && accepted.queue_command(record)
    };
    let f_cont = FlightComputer::new(vessel_with_node(), sink);
    assert!(f_cont.exec_maneuver(0.0));
    let records = accepted.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), CommandKind::ManeuverCommand);
}

#[test]
fn test_sink_rejection_is_reported() {
    let f_cont = FlightComputer::new(vessel_with_node(), |_: &CommandRecord| false);
    assert!(!f_cont.kill_rotation(0.0));
    assert!(!f_cont.node(0.0));
    assert!(!f_cont.orbital(OrbitalAxis::NormalMinus, 0.0));
    assert!(!f_cont.burn(1.0, 10.0, 0.0));
    assert!(!f_cont.exec_maneuver(0.0));
}

#[test]
fn test_guids_are_unique() {
    let f_cont = queued(vessel_with_target(Target::Vessel("Station".to_string())));
    let mut vessel_with_both = vessel_with_node();
    vessel_with_both.target = Some(Target::CelestialBody("Minmus".to_string()));
    let f_cont_node = queued(vessel_with_both);
    for _ in 0..50 {
        assert!(f_cont.kill_rotation(0.0));
        assert!(f_cont.relative_velocity(true, 0.0));
        assert!(f_cont.burn(1.0, 1.0, 0.0));
        assert!(f_cont_node.exec_maneuver(0.0));
        assert!(f_cont_node.orbital(OrbitalAxis::RadialPlus, 0.0));
    }
    let records: Vec<CommandRecord> =
        f_cont.sink().drain().into_iter().chain(f_cont_node.sink().drain()).collect();
    assert_eq!(records.len(), 300);
    let guids: HashSet<_> = records.iter().map(|r| r.guid().unwrap()).collect();
    assert_eq!(guids.len(), records.len());
}
