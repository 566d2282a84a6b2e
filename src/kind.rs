//! Runtime selection of a queue implementation
//!
//! [`PqKind`] names one of the four queues and builds it behind
//! `Box<dyn PriorityQueue>`, so callers can pick a structure from user input
//! and exercise it through the shared interface only.
//!
//! ```rust
//! use priority_queues::{Less, PqKind};
//!
//! let kind: PqKind = "pairing".parse().unwrap();
//! let mut pq = kind.build::<i32, _>(Less);
//! pq.push(4);
//! pq.push(9);
//! assert_eq!(pq.top(), Some(&9));
//! ```

use crate::binary::BinaryPQ;
use crate::compare::Comparator;
use crate::pairing::PairingPQ;
use crate::sorted::SortedPQ;
use crate::traits::PriorityQueue;
use crate::unordered::UnorderedPQ;
use std::fmt;
use std::str::FromStr;

/// The queue implementations provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PqKind {
    Unordered,
    Sorted,
    Binary,
    Pairing,
}

impl PqKind {
    /// Every kind, in menu order
    pub const ALL: [PqKind; 4] = [
        PqKind::Unordered,
        PqKind::Sorted,
        PqKind::Binary,
        PqKind::Pairing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PqKind::Unordered => "Unordered",
            PqKind::Sorted => "Sorted",
            PqKind::Binary => "Binary",
            PqKind::Pairing => "Pairing",
        }
    }

    /// Builds an empty queue of this kind ordered by `comp`
    pub fn build<'a, T: 'a, C: Comparator<T> + 'a>(
        self,
        comp: C,
    ) -> Box<dyn PriorityQueue<T, C> + 'a> {
        match self {
            PqKind::Unordered => Box::new(UnorderedPQ::<T, C>::with_comparator(comp)),
            PqKind::Sorted => Box::new(SortedPQ::<T, C>::with_comparator(comp)),
            PqKind::Binary => Box::new(BinaryPQ::<T, C>::with_comparator(comp)),
            PqKind::Pairing => Box::new(PairingPQ::<T, C>::with_comparator(comp)),
        }
    }

    /// Builds a queue of this kind holding every element of `iter`
    pub fn build_from<'a, T: 'a, C: Comparator<T> + 'a, I>(
        self,
        iter: I,
        comp: C,
    ) -> Box<dyn PriorityQueue<T, C> + 'a>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            PqKind::Unordered => Box::new(UnorderedPQ::<T, C>::from_iter_with(iter, comp)),
            PqKind::Sorted => Box::new(SortedPQ::<T, C>::from_iter_with(iter, comp)),
            PqKind::Binary => Box::new(BinaryPQ::<T, C>::from_iter_with(iter, comp)),
            PqKind::Pairing => Box::new(PairingPQ::<T, C>::from_iter_with(iter, comp)),
        }
    }
}

impl fmt::Display for PqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`PqKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown container {:?}", self.input)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for PqKind {
    type Err = ParseKindError;

    /// Accepts a kind name (any case) or its menu index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            if let Some(&kind) = PqKind::ALL.get(index) {
                return Ok(kind);
            }
        }
        PqKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Greater, Less};

    #[test]
    fn test_parse() {
        assert_eq!("Pairing".parse(), Ok(PqKind::Pairing));
        assert_eq!(" binary ".parse(), Ok(PqKind::Binary));
        assert_eq!("0".parse(), Ok(PqKind::Unordered));
        assert_eq!("1".parse(), Ok(PqKind::Sorted));
        assert!("4".parse::<PqKind>().is_err());
        assert!("fibonacci".parse::<PqKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in PqKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_every_kind_behaves_alike() {
        for kind in PqKind::ALL {
            let mut pq = kind.build_from([5, 2, 10, 3], Greater);
            assert_eq!(pq.len(), 4, "{kind}");
            assert_eq!(pq.pop(), Some(2), "{kind}");
            assert_eq!(pq.pop(), Some(3), "{kind}");
            assert_eq!(pq.top(), Some(&5), "{kind}");

            let mut pq = kind.build::<i32, _>(Less);
            pq.push(1);
            pq.push(7);
            assert_eq!(pq.top(), Some(&7), "{kind}");
            assert!(!pq.is_empty(), "{kind}");
        }
    }
}
