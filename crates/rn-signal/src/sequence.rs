//! Phase-sequence normalisation.
//!
//! Road descriptions number a junction's phases as they please (`0, 1, 3`
//! is common for a three-phase program).  The engine needs `1..=N` in list
//! order.

use rn_core::JunctionId;

use crate::ControllerDescriptor;

/// Assign `sequence_normalized = position + 1` within each junction, in list
/// order.  Gaps in the original numbering are discarded.
pub fn normalize_sequences(controllers: &[ControllerDescriptor]) -> Vec<ControllerDescriptor> {
    let mut seen: Vec<(JunctionId, u32)> = Vec::new();
    controllers
        .iter()
        .map(|c| {
            let next = match seen.iter_mut().find(|(j, _)| *j == c.junction) {
                Some((_, n)) => {
                    *n += 1;
                    *n
                }
                None => {
                    seen.push((c.junction, 1));
                    1
                }
            };
            ControllerDescriptor { sequence_normalized: next, ..*c }
        })
        .collect()
}
