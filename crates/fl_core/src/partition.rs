//! Squad slot partitioner
//!
//! Maps a within-squad slot number to its position group via prefix sums of
//! the configured composition, and back to the group's contiguous slot
//! interval. Slot intervals are half-open `[start, end)`.

use crate::config::PositionGroup;
use crate::error::{Result, WorldGenError};
use std::ops::Range;

/// Position group owning `slot` under `composition`'s fixed order.
pub fn group_for_slot(slot: u32, composition: &[(PositionGroup, u32)]) -> Result<PositionGroup> {
    let squad_size: u32 = composition.iter().map(|(_, count)| count).sum();
    if slot >= squad_size {
        return Err(WorldGenError::SlotOutOfRange { slot, squad_size });
    }

    let mut start = 0u32;
    for (group, count) in composition {
        if slot < start + count {
            return Ok(*group);
        }
        start += count;
    }
    // Unreachable: slot < squad_size == sum of counts.
    Err(WorldGenError::SlotOutOfRange { slot, squad_size })
}

/// Contiguous slot interval `[start, end)` owned by `group`.
///
/// Intervals are disjoint across groups and their union is `[0, squad_size)`.
pub fn slot_range_for_group(
    group: PositionGroup,
    composition: &[(PositionGroup, u32)],
) -> Result<Range<u32>> {
    let mut start = 0u32;
    for (candidate, count) in composition {
        if *candidate == group {
            return Ok(start..start + count);
        }
        start += count;
    }
    Err(WorldGenError::InvalidConfiguration(format!(
        "position group {:?} absent from composition",
        group
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HierarchyConfig;

    fn composition() -> Vec<(PositionGroup, u32)> {
        HierarchyConfig::default().composition
    }

    #[test]
    fn test_boundary_slots() {
        let comp = composition();
        // Composition order GK(4) DF(7) MF(7) AT(7); slot 0 is a goalkeeper
        // and slot 24 an attacker.
        assert_eq!(group_for_slot(0, &comp).unwrap(), PositionGroup::Goalkeeper);
        assert_eq!(group_for_slot(3, &comp).unwrap(), PositionGroup::Goalkeeper);
        assert_eq!(group_for_slot(4, &comp).unwrap(), PositionGroup::Defender);
        assert_eq!(group_for_slot(10, &comp).unwrap(), PositionGroup::Defender);
        assert_eq!(group_for_slot(11, &comp).unwrap(), PositionGroup::Midfielder);
        assert_eq!(group_for_slot(17, &comp).unwrap(), PositionGroup::Midfielder);
        assert_eq!(group_for_slot(18, &comp).unwrap(), PositionGroup::Attacker);
        assert_eq!(group_for_slot(24, &comp).unwrap(), PositionGroup::Attacker);
    }

    #[test]
    fn test_out_of_range_slot() {
        let err = group_for_slot(25, &composition()).unwrap_err();
        assert!(matches!(err, WorldGenError::SlotOutOfRange { slot: 25, squad_size: 25 }));
    }

    #[test]
    fn test_ranges_partition_the_squad() {
        let comp = composition();
        let mut covered = Vec::new();
        for (group, _) in &comp {
            let range = slot_range_for_group(*group, &comp).unwrap();
            for slot in range {
                // Inverse agrees with the forward mapping.
                assert_eq!(group_for_slot(slot, &comp).unwrap(), *group);
                covered.push(slot);
            }
        }
        covered.sort_unstable();
        assert_eq!(covered, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_group_is_config_error() {
        let comp = vec![(PositionGroup::Defender, 25)];
        let err = slot_range_for_group(PositionGroup::Goalkeeper, &comp).unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidConfiguration(_)));
    }
}
