//! An ordered collection of rooms.

use apartment_model::{OwnerHandle, Room};

/// Rooms in insertion order.
///
/// Rooms keep their owner handles, so rooms sharing an owner inside an
/// apartment still see each other's owner edits.
#[derive(Debug, Clone, Default)]
pub struct Apartment {
    rooms: Vec<Room>,
}

impl Apartment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Room> {
        self.rooms.iter_mut()
    }

    /// Sum of `width * length` over every room, untruncated.
    pub fn total_square_feet(&self) -> f64 {
        self.rooms.iter().map(Room::square_feet).sum()
    }

    /// Rooms held by exactly this owner (identity, not equal fields).
    pub fn rooms_owned_by<'a>(
        &'a self,
        owner: &'a OwnerHandle,
    ) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms.iter().filter(move |room| {
            room.owner()
                .is_some_and(|held| OwnerHandle::ptr_eq(held, owner))
        })
    }

    /// Every owner that holds at least one room, in first-seen order.
    /// Each shared owner appears once.
    pub fn distinct_owners(&self) -> Vec<OwnerHandle> {
        let mut owners: Vec<OwnerHandle> = Vec::new();
        for owner in self.rooms.iter().filter_map(Room::owner) {
            if !owners.iter().any(|seen| OwnerHandle::ptr_eq(seen, owner)) {
                owners.push(owner.clone());
            }
        }
        owners
    }
}

impl FromIterator<Room> for Apartment {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        Self {
            rooms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Room> for Apartment {
    fn extend<I: IntoIterator<Item = Room>>(&mut self, iter: I) {
        self.rooms.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Apartment {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

impl IntoIterator for Apartment {
    type Item = Room;
    type IntoIter = std::vec::IntoIter<Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.into_iter()
    }
}
