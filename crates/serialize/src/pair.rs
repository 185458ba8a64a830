//! Pair codec
//!
//! A pair is framed as an array of exactly two elements:
//!
//! ```text
//! begin_array(2) first delimit_array second end_array
//! ```
//!
//! Both directions run the same five steps and check the archive after each
//! one. The first failure ends the pass: when the first element fails, the
//! second is never touched. A pair whose decode returned `false` holds no
//! meaningful value and must be discarded whole.

use crate::element::PairElement;
use crate::ser::Serialize;
use crate::LOG_CATEGORY;
use archwire_archive::Archive;
use archwire_log::log_debug;

/// Number of framed elements in a pair
pub const PAIR_LEN: usize = 2;

/// Write `pair` to, or read it from, `ar`
///
/// A decoded count other than [`PAIR_LEN`] returns `false` with the archive
/// still healthy and the array closed again, having consumed only the count.
pub fn serialize_pair<A, F, S>(ar: &mut A, pair: &mut (F, S)) -> bool
where
    A: Archive,
    F: PairElement,
    S: PairElement,
{
    let mut count = PAIR_LEN;
    ar.begin_array(&mut count);
    if !ar.good() {
        log_debug!(LOG_CATEGORY, "pair framing failed at byte {}", ar.position());
        return false;
    }
    if count != PAIR_LEN {
        log_debug!(
            LOG_CATEGORY,
            "pair array has {} elements, expected {}",
            count,
            PAIR_LEN
        );
        ar.end_array();
        return false;
    }

    if !pair.0.serialize_pair_element(ar) || !ar.good() {
        log_debug!(LOG_CATEGORY, "pair first element failed at byte {}", ar.position());
        return false;
    }

    ar.delimit_array();

    if !pair.1.serialize_pair_element(ar) || !ar.good() {
        log_debug!(LOG_CATEGORY, "pair second element failed at byte {}", ar.position());
        return false;
    }

    ar.end_array();
    ar.good()
}

impl<F: PairElement, S: PairElement> Serialize for (F, S) {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        serialize_pair(ar, self)
    }
}
