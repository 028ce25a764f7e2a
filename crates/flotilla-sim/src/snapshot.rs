//! Snapshot construction — flattens vessel state into serializable views.

use flotilla_core::events::SimEvent;
use flotilla_core::state::{VesselView, WorldSnapshot};
use flotilla_core::types::SimTime;

use crate::vessel::Vessel;

/// Build the post-tick snapshot for rendering/camera/minimap consumers.
pub fn build_snapshot(time: &SimTime, vessels: &[Vessel], events: Vec<SimEvent>) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        vessels: vessels.iter().map(vessel_view).collect(),
        events,
    }
}

fn vessel_view(vessel: &Vessel) -> VesselView {
    let attitude = vessel.attitude();
    VesselView {
        id: vessel.id(),
        class: vessel.class(),
        position: vessel.position(),
        heading: vessel.heading(),
        speed: vessel.speed(),
        pitch: attitude.pitch,
        roll: attitude.roll,
    }
}
