//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat index for the four seats at the table. Seats form a
//! ring: turn order is `0 → 1 → 2 → 3 → 0`.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Big Two table.
pub const SEAT_COUNT: usize = 4;

/// Seat index in `0..SEAT_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seat(u8);

impl Seat {
    /// Create a new seat.
    ///
    /// Panics if `index` is not a valid seat.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SEAT_COUNT, "Seat index out of range");
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use big_two::core::Seat;
    ///
    /// assert_eq!(Seat::new(0).next(), Seat::new(1));
    /// assert_eq!(Seat::new(3).next(), Seat::new(0));
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Iterate over all seats in turn order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }

    /// Iterate over the three seats other than this one, in turn order.
    pub fn others(self) -> impl Iterator<Item = Seat> {
        Self::all().filter(move |&s| s != self)
    }
}

impl TryFrom<u8> for Seat {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(format!("seat index {index} out of range"))
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use big_two::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<usize> = SeatMap::new(|_| 13);
/// assert_eq!(counts[Seat::new(2)], 13);
///
/// counts[Seat::new(1)] = 12;
/// assert_eq!(counts[Seat::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Seat(i as u8))),
        }
    }

    /// Create a SeatMap from an array ordered by seat index.
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform every entry.
    pub fn map<U>(&self, f: impl Fn(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s3 = Seat::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.index(), 3);
        assert_eq!(format!("{}", s3), "Seat 3");
    }

    #[test]
    fn test_seat_ring() {
        let mut seat = Seat::new(2);
        let mut order = Vec::new();
        for _ in 0..5 {
            seat = seat.next();
            order.push(seat.0);
        }
        assert_eq!(order, vec![3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_seat_others() {
        let others: Vec<_> = Seat::new(1).others().collect();
        assert_eq!(others, vec![Seat::new(0), Seat::new(2), Seat::new(3)]);
    }

    #[test]
    #[should_panic(expected = "Seat index out of range")]
    fn test_seat_out_of_range() {
        let _ = Seat::new(4);
    }

    #[test]
    fn test_seat_from_u8() {
        assert_eq!(Seat::try_from(3), Ok(Seat::new(3)));
        assert!(Seat::try_from(7).is_err());
        assert_eq!(u8::from(Seat::new(2)), 2);
    }

    #[test]
    fn test_seat_deserialize_checks_range() {
        assert_eq!(serde_json::to_string(&Seat::new(1)).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Seat>("2").unwrap(), Seat::new(2));
        assert!(serde_json::from_str::<Seat>("7").is_err());
    }

    #[test]
    fn test_seat_map_new_and_iter() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        let pairs: Vec<_> = map.iter().map(|(s, v)| (s.0, *v)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::with_value(0);

        map[Seat::new(0)] = 10;
        map[Seat::new(3)] = 30;

        assert_eq!(map[Seat::new(0)], 10);
        assert_eq!(map[Seat::new(1)], 0);
        assert_eq!(map[Seat::new(3)], 30);
    }

    #[test]
    fn test_seat_map_map() {
        let map: SeatMap<u32> = SeatMap::from_array([1, 2, 3, 4]);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
