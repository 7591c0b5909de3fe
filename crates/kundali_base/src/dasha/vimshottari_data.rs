//! Const data for the Vimshottari (120-year) dasha system.
//!
//! Provenance: BPHS Vimshottari chapter.

use crate::graha::Graha;

/// Graha sequence in dasha order, starting from Ketu.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full mahadasha length in years, parallel to `VIMSHOTTARI_SEQUENCE`.
pub const VIMSHOTTARI_YEARS: [u32; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

/// Sum of all mahadasha lengths.
pub const VIMSHOTTARI_TOTAL_YEARS: u32 = 120;

/// Position of a graha in the Vimshottari sequence.
pub fn sequence_position(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == graha)
        .unwrap_or(0)
}

/// Full mahadasha years of a graha.
pub fn graha_years(graha: Graha) -> u32 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Ruler of the first mahadasha for a birth nakshatra (0-26).
///
/// Nakshatras cycle through the sequence: Ashwini → Ketu, Bharani → Shukra,
/// and so on, repeating every 9.
pub fn starting_ruler(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_total() {
        assert_eq!(VIMSHOTTARI_YEARS.iter().sum::<u32>(), VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn sequence_covers_all_grahas() {
        for g in crate::graha::ALL_GRAHAS {
            assert!(VIMSHOTTARI_SEQUENCE.contains(&g));
        }
    }

    #[test]
    fn known_lords() {
        assert_eq!(starting_ruler(0), Graha::Ketu);
        assert_eq!(starting_ruler(3), Graha::Chandra);
        assert_eq!(starting_ruler(15), Graha::Guru);
        assert_eq!(starting_ruler(26), Graha::Buddh);
        assert_eq!(graha_years(Graha::Shukra), 20);
        assert_eq!(graha_years(Graha::Buddh), 17);
    }
}
