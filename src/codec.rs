//! Dense bijective ranking between a [`crate::state::Skewb`] configuration and a single `u64`
//! ("state number"), used as both the hash key and the canonical identity in the search engine's
//! predecessor table.
//!
//! The configuration is treated as a mixed-radix numeral built from three Lehmer codes: five
//! independent centers (position 5 is determined by the other five and excluded), seven
//! independent corners (position 7 is the fixed anchor and excluded), and eight ternary corner
//! rotations. See `crate::state` for why those positions are redundant but still stored.

use crate::state::{NUM_CENTERS, NUM_CORNERS};

const CENTER_DIGITS: usize = NUM_CENTERS - 1;
const CORNER_DIGITS: usize = NUM_CORNERS - 1;

/// Computes the Lehmer code of `labels` against the universe `0..universe_size`: digit `k` is
/// the number of labels still "in play" at step `k` that are strictly less than `labels[k]`.
/// Equivalently, the index `labels[k]` would occupy in the sorted list of not-yet-consumed
/// labels.
fn lehmer_digits(labels: &[u8], universe_size: usize) -> Vec<u64> {
    let mut pool: Vec<u8> = (0..universe_size as u8).collect();
    let mut digits = Vec::with_capacity(labels.len());

    for &label in labels {
        let idx = pool
            .iter()
            .position(|&x| x == label)
            .expect("label must be present in the remaining pool");
        digits.push(idx as u64);
        pool.remove(idx);
    }

    digits
}

/// Inverse of [`lehmer_digits`]: reinflates a sequence of Lehmer digits back into labels drawn
/// from the universe `0..universe_size`.
fn labels_from_lehmer_digits(digits: &[u64], universe_size: usize) -> Vec<u8> {
    let mut pool: Vec<u8> = (0..universe_size as u8).collect();
    let mut labels = Vec::with_capacity(digits.len());

    for &digit in digits {
        labels.push(pool.remove(digit as usize));
    }

    labels
}

/// Encodes a configuration's three fields into a single state number.
///
/// `corners[7]` and `centers[5]` are not read directly: they are redundant with the other five
/// (resp. seven) entries and are re-derived on decode.
pub fn encode(centers: &[u8; NUM_CENTERS], corners: &[u8; NUM_CORNERS], rotation: &[u8; NUM_CORNERS]) -> u64 {
    let center_digits = lehmer_digits(&centers[..CENTER_DIGITS], NUM_CENTERS);
    let corner_digits = lehmer_digits(&corners[..CORNER_DIGITS], NUM_CORNERS);

    let mut n: u64 = 0;
    for (k, &d) in center_digits.iter().enumerate() {
        n = n * (NUM_CENTERS - k) as u64 + d;
    }
    for (k, &d) in corner_digits.iter().enumerate() {
        n = n * (NUM_CORNERS - k) as u64 + d;
    }
    for &r in rotation.iter() {
        n = n * 3 + r as u64;
    }

    n
}

/// Decodes a state number back into the three raw fields. No bounds checking is performed beyond
/// what integer division naturally enforces; a rank outside the valid range silently wraps to
/// some other, likely bogus, configuration. Callers are expected to only decode ranks that came
/// from [`encode`] or from a search engine's predecessor table.
pub fn decode(mut n: u64) -> ([u8; NUM_CENTERS], [u8; NUM_CORNERS], [u8; NUM_CORNERS]) {
    let mut rotation = [0u8; NUM_CORNERS];
    for i in (0..NUM_CORNERS).rev() {
        rotation[i] = (n % 3) as u8;
        n /= 3;
    }

    let mut corner_digits = [0u64; CORNER_DIGITS];
    for k in (0..CORNER_DIGITS).rev() {
        let radix = (NUM_CORNERS - k) as u64;
        corner_digits[k] = n % radix;
        n /= radix;
    }

    let mut center_digits = [0u64; CENTER_DIGITS];
    for k in (0..CENTER_DIGITS).rev() {
        let radix = (NUM_CENTERS - k) as u64;
        center_digits[k] = n % radix;
        n /= radix;
    }

    let corner_labels = labels_from_lehmer_digits(&corner_digits, NUM_CORNERS);
    let mut corners = [0u8; NUM_CORNERS];
    corners[..CORNER_DIGITS].copy_from_slice(&corner_labels);
    corners[7] = 7;

    let center_labels = labels_from_lehmer_digits(&center_digits, NUM_CENTERS);
    let mut centers = [0u8; NUM_CENTERS];
    centers[..CENTER_DIGITS].copy_from_slice(&center_labels);
    let placed_sum: u8 = centers[..CENTER_DIGITS].iter().sum();
    let full_sum: u8 = (0..NUM_CENTERS as u8).sum();
    centers[5] = full_sum - placed_sum;

    (centers, corners, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::state::Skewb;

    #[test]
    fn solved_state_ranks_to_zero() {
        assert_eq!(Skewb::solved().rank(), 0);
    }

    #[test]
    fn decode_of_zero_is_solved() {
        assert_eq!(Skewb::from_rank(0), Skewb::solved());
    }

    #[test]
    fn round_trips_through_a_handful_of_scrambles() {
        let scrambles: [&[Move]; 4] = [
            &[Move::U],
            &[Move::U, Move::L, Move::D, Move::RPrime],
            &[Move::U, Move::U, Move::L, Move::D, Move::L, Move::U, Move::RPrime],
            &[Move::R, Move::R, Move::L, Move::DPrime, Move::U, Move::LPrime, Move::D],
        ];

        for scramble in scrambles {
            let mut s = Skewb::solved();
            for &m in scramble {
                s.apply(m);
            }
            let rank = s.rank();
            assert_eq!(Skewb::from_rank(rank), s, "round-trip failed for {scramble:?}");
        }
    }

    #[test]
    fn lehmer_digits_round_trip() {
        let labels = [3u8, 0, 2, 1];
        let digits = lehmer_digits(&labels, 5);
        let back = labels_from_lehmer_digits(&digits, 5);
        assert_eq!(back, labels);
    }

    #[test]
    fn distinct_states_have_distinct_ranks() {
        let mut seen = std::collections::HashSet::new();
        let s = Skewb::solved();
        seen.insert(s.rank());

        for &m in Move::ELEMENTARY.iter() {
            let mut t = s;
            t.apply(m);
            assert!(seen.insert(t.rank()), "rank collision after applying {m}");
        }
    }
}
