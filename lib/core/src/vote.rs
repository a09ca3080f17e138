use crate::LabelAggregate;

/// Pick the aggregate with the greatest accumulated weight.
///
/// Exact ties go to the earlier entry, which for distance-ordered input is the
/// label with the closer best hit. Returns `None` for an empty slice.
pub fn distance_weighted_vote(aggregates: &[LabelAggregate]) -> Option<&LabelAggregate> {
    let mut best: Option<&LabelAggregate> = None;
    for agg in aggregates {
        match best {
            Some(current) if agg.weight <= current.weight => {}
            _ => best = Some(agg),
        }
    }
    best
}
