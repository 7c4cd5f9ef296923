//! Capacity guard for room allocations.
//!
//! The guard is derived only from allocations loaded from the service; callers
//! recompute it after every reload and never adjust it between requests.

use super::aggregate::RoomAllocation;
use crate::domain::a001_hotel::aggregate::Hotel;
use serde::{Deserialize, Serialize};

/// Sum of `quantity` over the given allocations
pub fn provisioned_rooms(allocations: &[RoomAllocation]) -> u32 {
    allocations
        .iter()
        .fold(0u32, |acc, a| acc.saturating_add(a.quantity))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityGuard {
    pub provisioned: u32,
    pub capacity: u32,
}

impl CapacityGuard {
    pub fn new(provisioned: u32, capacity: u32) -> Self {
        Self {
            provisioned,
            capacity,
        }
    }

    pub fn evaluate(hotel: &Hotel, allocations: &[RoomAllocation]) -> Self {
        Self::new(provisioned_rooms(allocations), hotel.room_capacity)
    }

    /// `capacityReached`: no new allocation may be created
    pub fn is_reached(&self) -> bool {
        self.provisioned >= self.capacity
    }

    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.provisioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::aggregate::HotelId;
    use crate::domain::a002_accommodation::aggregate::AccommodationId;
    use crate::domain::a003_room_type::aggregate::RoomTypeId;
    use crate::domain::a004_room_allocation::aggregate::RoomAllocationId;
    use crate::domain::common::EntityMetadata;

    fn allocation(id: i64, quantity: u32) -> RoomAllocation {
        RoomAllocation {
            id: RoomAllocationId(id),
            quantity,
            room_type_id: RoomTypeId(1),
            accommodation_id: AccommodationId(1),
            hotel_id: Some(HotelId(1)),
            room_type: None,
            accommodation: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_guard_counts_quantities_not_rows() {
        let allocations = vec![allocation(1, 3), allocation(2, 4)];
        assert_eq!(provisioned_rooms(&allocations), 7);

        let guard = CapacityGuard::new(provisioned_rooms(&allocations), 8);
        assert!(!guard.is_reached());
        assert_eq!(guard.remaining(), 1);

        let guard = CapacityGuard::new(provisioned_rooms(&allocations), 7);
        assert!(guard.is_reached());
        assert_eq!(guard.remaining(), 0);
    }

    #[test]
    fn test_guard_threshold_over_range() {
        for capacity in 1..=20u32 {
            for provisioned in 0..=25u32 {
                let guard = CapacityGuard::new(provisioned, capacity);
                assert_eq!(guard.is_reached(), provisioned >= capacity);
            }
        }
    }

    #[test]
    fn test_empty_hotel_is_open() {
        assert!(!CapacityGuard::new(provisioned_rooms(&[]), 2).is_reached());
    }

    #[test]
    fn test_over_allocated_hotel_stays_reached() {
        let guard = CapacityGuard::new(12, 10);
        assert!(guard.is_reached());
        assert_eq!(guard.remaining(), 0);
    }
}
