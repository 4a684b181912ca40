use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::chemistry::tolerance::MzTolerance;
use crate::database::candidate::{CandidateRecord, InterferenceStatus};

/// Classify one candidate against all candidates emitted before it.
///
/// Classification is directional: a candidate only reports interference with
/// earlier-emitted candidates, so exactly the later of an interfering pair
/// carries the annotation. All matches are collected and the reported peer is
/// chosen deterministically — an identical rounded mass beats a
/// tolerance-window match, then the smallest mass difference wins, then the
/// lowest peer id. Comparisons run on the display-rounded masses, the same
/// representation consumers see.
pub fn find_interference(
    records: &[CandidateRecord],
    index: usize,
    tolerance: &MzTolerance,
) -> InterferenceStatus {
    let mass = records[index].exact_mass;
    let mut exact_peer: Option<usize> = None;
    let mut possible_peer: Option<(OrderedFloat<f64>, usize)> = None;

    for (peer_index, peer) in records.iter().enumerate().take(index) {
        if peer.exact_mass == mass {
            if exact_peer.is_none() {
                exact_peer = Some(peer_index);
            }
        } else if tolerance.check_within_tolerance(peer.exact_mass, mass) {
            let key = (OrderedFloat((peer.exact_mass - mass).abs()), peer_index);
            if possible_peer.map_or(true, |best| key < best) {
                possible_peer = Some(key);
            }
        }
    }

    if let Some(peer_index) = exact_peer {
        return InterferenceStatus::Exact {
            peer: records[peer_index].abbreviation.clone(),
        };
    }
    if let Some((_, peer_index)) = possible_peer {
        return InterferenceStatus::Possible {
            peer: records[peer_index].abbreviation.clone(),
        };
    }
    InterferenceStatus::None
}

/// Annotate every candidate's interference status in place.
///
/// The scan is all-pairs over the frozen set and runs in parallel; each
/// status is a pure function of the immutable candidate slice, so the result
/// is reproducible regardless of scheduling.
pub fn annotate_interferences(records: &mut [CandidateRecord], tolerance: &MzTolerance) {
    let statuses: Vec<InterferenceStatus> = {
        let frozen: &[CandidateRecord] = records;
        (0..frozen.len())
            .into_par_iter()
            .map(|index| find_interference(frozen, index, tolerance))
            .collect()
    };
    for (record, status) in records.iter_mut().zip(statuses) {
        record.interference = status;
    }
}
