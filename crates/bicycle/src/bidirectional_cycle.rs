//! Module containing [BiCycle] and the [BiCyclable] extension trait.
use std::{
    fmt::Display,
    iter::{FusedIterator, Iterator},
};

use crate::errors::{Error, InvalidArgument};

/// The direction a [BiCycle] moves in on each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(i8)]
pub enum Direction {
    /// From left to right
    #[default]
    Forward = 1,
    /// From right to left
    Reverse = -1,
}

impl Direction {
    /// The signed offset applied to the cursor on each step
    pub fn offset(self) -> isize {
        self as i8 as isize
    }

    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// An iterator that can be iterated over indefinitely in both directions.
///
/// The [BiCycle] holds a cursor into a borrowed slice. Every [BiCycle::step] moves the cursor one
/// position in the current [Direction], wrapping around at either end, and returns the element it
/// lands on.
///
/// ## Note:
///
/// The cursor moves *before* an element is returned, so the element at the starting index is not
/// the first one produced. Changing the direction also only affects the next step: reversing does
/// not yield the element just returned again, but its neighbour in the new direction.
///
/// The slice is borrowed for the whole lifetime of the [BiCycle], so it can't be mutated while
/// iterating.
///
/// ```
/// use bicycle::BiCycle;
///
/// let letters = ['a', 'b', 'c'];
/// let mut cycle = BiCycle::new(&letters).unwrap();
///
/// assert_eq!(cycle.step(), &'b');
///
/// cycle.set_direction_reverse();
///
/// assert_eq!(cycle.step(), &'a');
/// assert_eq!(cycle.step(), &'c');
/// ```
#[derive(Debug)]
pub struct BiCycle<'a, T> {
    /// The elements being cycled through. Never empty.
    elements: &'a [T],
    /// Current position in [Self::elements]
    index: usize,
    /// Which way [Self::step] moves
    direction: Direction,
}

impl<'a, T> BiCycle<'a, T> {
    /// Create a new [BiCycle] starting at the first element
    ///
    /// Fails if `elements` is empty.
    pub fn new(elements: &'a [T]) -> Result<Self, Error> {
        Self::with_start(elements, 0)
    }

    /// Create a new [BiCycle] starting at `starting_index`
    ///
    /// Fails if `elements` is empty or `starting_index` is not a valid index into it.
    pub fn with_start(elements: &'a [T], starting_index: usize) -> Result<Self, Error> {
        if elements.is_empty() {
            return Err(InvalidArgument::EmptySequence.into());
        }

        if starting_index >= elements.len() {
            return Err(InvalidArgument::StartOutOfRange {
                index: starting_index,
                len: elements.len(),
            }
            .into());
        }

        Ok(Self {
            elements,
            index: starting_index,
            direction: Direction::Forward,
        })
    }

    /// Move the cursor one position in the current [Direction] and return the element there
    pub fn step(&mut self) -> &'a T {
        let len = self.elements.len();

        // `len` is never 0, so neither branch can go out of bounds
        self.index = match self.direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Reverse => self.index.checked_sub(1).unwrap_or(len - 1),
        };

        log::trace!("Stepped {:?} to index {}", self.direction, self.index);

        &self.elements[self.index]
    }

    /// Set the direction of iteration from left to right.
    pub fn set_direction_forward(&mut self) {
        self.set_direction(Direction::Forward);
    }

    /// Set the direction of iteration from right to left.
    pub fn set_direction_reverse(&mut self) {
        self.set_direction(Direction::Reverse);
    }

    /// Set [Self::direction]
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            log::debug!("Changing direction to {:?}", direction);
        }

        self.direction = direction;
    }

    /// Flip [Self::direction], returning the new one
    pub fn reverse_direction(&mut self) -> Direction {
        self.set_direction(self.direction.reversed());

        self.direction
    }

    /// Getter function for [Self::direction]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Getter function for [Self::index]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, without moving it
    pub fn current(&self) -> &'a T {
        &self.elements[self.index]
    }

    /// Number of elements in one full cycle
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`, since a [BiCycle] can't be created from an empty slice
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The slice being cycled through
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

// Derived Clone would require `T: Clone`
impl<T> Clone for BiCycle<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            index: self.index,
            direction: self.direction,
        }
    }
}

impl<'a, T> Iterator for BiCycle<'a, T> {
    type Item = &'a T;

    /// Same as [BiCycle::step]. Never returns [None].
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for BiCycle<'_, T> {}

/// Extension trait that adds the [BiCyclable::bi_cycle] method to slices
pub trait BiCyclable<T> {
    /// Create a [BiCycle] over `self`, starting at the first element
    fn bi_cycle(&self) -> Result<BiCycle<'_, T>, Error>;

    /// Create a [BiCycle] over `self`, starting at `starting_index`
    fn bi_cycle_from(&self, starting_index: usize) -> Result<BiCycle<'_, T>, Error>;
}

impl<T> BiCyclable<T> for [T] {
    fn bi_cycle(&self) -> Result<BiCycle<'_, T>, Error> {
        BiCycle::new(self)
    }

    fn bi_cycle_from(&self, starting_index: usize) -> Result<BiCycle<'_, T>, Error> {
        BiCycle::with_start(self, starting_index)
    }
}
