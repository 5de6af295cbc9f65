use rand::Rng;

/// Weighted draw by prefix sum over a reusable, fixed-size weights
/// buffer. Returns `None` when no weight is positive, so callers can
/// skip an event instead of dividing by zero.
pub fn weighted_index<R: Rng>(rng: &mut R, weights: &[f32]) -> Option<usize> {
    let total: f32 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return None;
    }

    let mut target = rng.gen::<f32>() * total;

    for (index, weight) in weights.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }

        target -= weight;
        if target < 0.0 {
            return Some(index);
        }
    }

    // float rounding can leave a sliver of target; land on the last
    // positive weight
    weights.iter().rposition(|w| *w > 0.0)
}
