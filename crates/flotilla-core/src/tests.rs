#[cfg(test)]
mod tests {
    use crate::commands::WorldCommand;
    use crate::config::{MovementConfig, OceanConfig, ScenarioConfig, VesselConfig};
    use crate::enums::VesselClass;
    use crate::events::SimEvent;
    use crate::state::WorldSnapshot;
    use crate::types::{InputState, Position, SimTime, VesselId};

    /// Verify VesselClass round-trips through serde_json.
    #[test]
    fn test_vessel_class_serde() {
        let variants = vec![
            VesselClass::Standard,
            VesselClass::Patrol,
            VesselClass::Cargo,
            VesselClass::Sailing,
            VesselClass::Drone,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: VesselClass = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify WorldCommand round-trips through serde (tagged union).
    #[test]
    fn test_world_command_serde() {
        let commands = vec![
            WorldCommand::AddVessel(VesselConfig::default()),
            WorldCommand::RemoveVessel {
                vessel: VesselId(3),
            },
            WorldCommand::SetHeading {
                vessel: VesselId(0),
                heading: 1.2,
            },
            WorldCommand::SetSpeed {
                vessel: VesselId(0),
                speed: 0.1,
            },
            WorldCommand::SetHelmInput {
                vessel: VesselId(1),
                input: InputState {
                    forward: true,
                    ..Default::default()
                },
            },
            WorldCommand::AssignStrategy {
                vessel: VesselId(2),
                movement: MovementConfig::auto(vec![[10.0, 0.0], [10.0, 10.0]]),
            },
            WorldCommand::ClearStrategy {
                vessel: VesselId(2),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: WorldCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since WorldCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SimEvent round-trips through serde.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::WaypointReached {
                vessel: VesselId(7),
                waypoint_index: 2,
            },
            SimEvent::HeadingDrift {
                vessel: VesselId(1),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// A scenario written as plain JSON parses with defaults filled in.
    #[test]
    fn test_scenario_config_from_json() {
        let json = r#"{
            "vessels": [
                { "class": "Patrol", "direction": 0.5 },
                { "movement": { "kind": "auto", "waypoints": [[10.0, 0.0], [10.0, 10.0]] } }
            ],
            "obstacles": [ { "position": { "x": 100.0, "y": 0.0, "z": 0.0 } } ]
        }"#;
        let scenario: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.vessels.len(), 2);
        assert_eq!(scenario.vessels[0].class, VesselClass::Patrol);
        assert_eq!(scenario.vessels[1].movement.as_ref().unwrap().kind, "auto");
        assert_eq!(scenario.obstacles.len(), 1);
        assert!(scenario.ocean.is_none());
        assert!(scenario.drift.is_none());
    }

    /// Default ocean parameters match the documented tuning.
    #[test]
    fn test_ocean_config_defaults() {
        let ocean = OceanConfig::default();
        assert_eq!(ocean.radius, 1000.0);
        assert_eq!(ocean.amplitude, 5.0);
        assert_eq!(ocean.speed, 1.2);
    }

    /// Non-positive physical factors are rejected at validation.
    #[test]
    fn test_vessel_config_validation() {
        let mut config = VesselConfig::default();
        assert!(config.validate().is_ok());

        config.roll_factor = Some(0.0);
        assert!(config.validate().is_err());

        config.roll_factor = Some(1.5);
        assert!(config.validate().is_ok());
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 0.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.horizontal_distance_to(&b) - 5.0).abs() < 1e-10);

        // Height never contributes to the horizontal distance.
        let c = Position::new(3.0, 100.0, 4.0);
        assert!((a.horizontal_distance_to(&c) - 5.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Verify WorldSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = WorldSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
