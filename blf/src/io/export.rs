use stowage::entities::PackingSession;

use crate::io::ext_repr::{ExtPlacedItem, ExtSolution};
use crate::stuff::StuffReport;

pub fn export_solution(session: &PackingSession, report: &StuffReport) -> ExtSolution {
    let placed_items = session
        .placed_items()
        .iter()
        .map(|pi| ExtPlacedItem {
            item_id: pi.item.id.clone(),
            position: pi.position.into(),
            rotation: pi.rotation.euler_degrees(),
        })
        .collect();

    ExtSolution {
        container_id: session.container.id.clone(),
        placed_items,
        rejected_units: report.rejected.clone(),
        total_volume: session.total_volume(),
        used_volume: session.used_volume(),
        remaining_volume: session.remaining_volume(),
        utilization: session.utilization(),
        placed_weight: session.placed_weight(),
    }
}
