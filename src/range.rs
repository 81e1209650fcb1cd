// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Values
//!
//! The typed, in-memory representation of a range literal. A `Range<T>`
//! holds an optional lower bound, an optional upper bound, and a
//! [`RangeFlags`] value describing emptiness, inclusivity, and unbounded
//! sides. It is produced by [`crate::literal::parse`], consumed by
//! [`crate::literal::serialize`], and queried in between through the
//! containment predicates.
//!
//! The element type `T` carries no intrinsic ordering requirement: the
//! `*_by` predicate variants take an explicit comparator, and the plain
//! variants are conveniences for `T: Ord`.

use crate::flags::RangeFlags;
use std::{cmp::Ordering, fmt, ops, str::FromStr};

/// A range over an arbitrary element type `T`.
///
/// Each side is either finite (the `Option` holds a value) or unbounded
/// (the matching `*_UNBOUNDED` facet is set and the slot is `None`). The
/// distinguished empty range carries the `EMPTY` facet and no bounds.
///
/// Values are immutable by convention: changing a field produces a
/// different value, never a state transition, so ranges can be shared and
/// compared freely.
///
/// # Examples
///
/// ```rust
/// # use rangelit::Range;
///
/// let range: Range<i32> = (1..10).into();
/// assert!(range.contains_point(&5));
/// assert!(!range.contains_point(&10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    /// The lower bound value, absent when the side is unbounded or the
    /// range is empty.
    pub lower: Option<T>,
    /// The upper bound value, absent when the side is unbounded or the
    /// range is empty.
    pub upper: Option<T>,
    /// The facet set describing the shape of the range.
    pub flags: RangeFlags,
}

impl<T> Range<T> {
    /// Creates a new `Range` from raw parts.
    ///
    /// No semantic validation is performed: the caller is free to build a
    /// range whose lower bound exceeds its upper bound. Only the literal
    /// grammar, not interval algebra, is this crate's concern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::{Range, RangeFlags};
    ///
    /// let range = Range::new(Some(0), Some(10), RangeFlags::LOWER_INCLUSIVE);
    /// assert!(range.is_lower_bound_closed());
    /// assert!(!range.is_upper_bound_closed());
    /// ```
    #[inline]
    pub const fn new(lower: Option<T>, upper: Option<T>, flags: RangeFlags) -> Self {
        Self {
            lower,
            upper,
            flags,
        }
    }

    /// Creates the canonical empty range: the `EMPTY` facet and no bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::Range;
    ///
    /// let range: Range<i32> = Range::empty();
    /// assert!(range.is_empty());
    /// assert!(!range.contains_point(&0));
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::new(None, None, RangeFlags::EMPTY)
    }

    /// Creates the range that is unbounded on both sides, `(,)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::Range;
    ///
    /// let range: Range<i32> = Range::unbounded();
    /// assert!(range.contains_point(&i32::MIN));
    /// assert!(range.contains_point(&i32::MAX));
    /// ```
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(
            None,
            None,
            RangeFlags::LOWER_UNBOUNDED.union(RangeFlags::UPPER_UNBOUNDED),
        )
    }

    /// Returns `true` if the range denotes the empty set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.flags.contains(RangeFlags::EMPTY)
    }

    /// Returns `true` if neither side extends to infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::parse;
    ///
    /// assert!(parse("[1,10)").unwrap().is_bounded());
    /// assert!(!parse("(,10)").unwrap().is_bounded());
    /// ```
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        !self.flags.contains(RangeFlags::LOWER_UNBOUNDED)
            && !self.flags.contains(RangeFlags::UPPER_UNBOUNDED)
    }

    /// Returns `true` if the lower side does not extend to negative infinity.
    #[inline]
    pub const fn has_lower_bound(&self) -> bool {
        !self.flags.contains(RangeFlags::LOWER_UNBOUNDED)
    }

    /// Returns `true` if the upper side does not extend to positive infinity.
    #[inline]
    pub const fn has_upper_bound(&self) -> bool {
        !self.flags.contains(RangeFlags::UPPER_UNBOUNDED)
    }

    /// Returns `true` if the lower bound exists and includes its boundary
    /// value.
    ///
    /// An unbounded lower side is never closed, regardless of the raw
    /// `LOWER_INCLUSIVE` facet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::parse;
    ///
    /// assert!(parse("[0,1]").unwrap().is_lower_bound_closed());
    /// assert!(!parse("(0,1]").unwrap().is_lower_bound_closed());
    /// ```
    #[inline]
    pub const fn is_lower_bound_closed(&self) -> bool {
        self.has_lower_bound() && self.flags.contains(RangeFlags::LOWER_INCLUSIVE)
    }

    /// Returns `true` if the upper bound exists and includes its boundary
    /// value.
    ///
    /// An unbounded upper side is never closed, regardless of the raw
    /// `UPPER_INCLUSIVE` facet.
    #[inline]
    pub const fn is_upper_bound_closed(&self) -> bool {
        self.has_upper_bound() && self.flags.contains(RangeFlags::UPPER_INCLUSIVE)
    }

    /// Returns `true` if `point` lies within the range, using the supplied
    /// total order over `T`.
    ///
    /// An inclusive finite bound admits equality, an exclusive one requires
    /// strict inequality, and an unbounded side admits any point on that
    /// side. The empty range contains no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::parse;
    ///
    /// let range = parse("[1,10)").unwrap();
    /// assert!(range.contains_point_by(&"5".to_owned(), |a, b| {
    ///     a.parse::<i32>().unwrap().cmp(&b.parse::<i32>().unwrap())
    /// }));
    /// ```
    pub fn contains_point_by<F>(&self, point: &T, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_empty() {
            return false;
        }

        let in_lower = match &self.lower {
            Some(lower) if self.has_lower_bound() => match compare(lower, point) {
                Ordering::Less => true,
                Ordering::Equal => self.flags.contains(RangeFlags::LOWER_INCLUSIVE),
                Ordering::Greater => false,
            },
            _ => true,
        };
        if !in_lower {
            return false;
        }

        match &self.upper {
            Some(upper) if self.has_upper_bound() => match compare(upper, point) {
                Ordering::Greater => true,
                Ordering::Equal => self.flags.contains(RangeFlags::UPPER_INCLUSIVE),
                Ordering::Less => false,
            },
            _ => true,
        }
    }

    /// Returns `true` if `point` lies within the range.
    ///
    /// Convenience for [`contains_point_by`](Range::contains_point_by) with
    /// the intrinsic ordering of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::parse_with;
    ///
    /// let range = parse_with("[1,10)", |raw| raw.parse::<i32>()).unwrap();
    /// assert!(range.contains_point(&5));
    /// assert!(!range.contains_point(&-5));
    /// assert!(!range.contains_point(&10));
    /// ```
    #[inline]
    pub fn contains_point(&self, point: &T) -> bool
    where
        T: Ord,
    {
        self.contains_point_by(point, T::cmp)
    }

    /// Returns `true` if every finite bound of `other` lies within this
    /// range, using the supplied total order over `T`.
    ///
    /// Only the finite bounds actually present on `other` are tested; an
    /// unbounded side of `other` satisfies its check automatically. This is
    /// a known asymmetry inherited from the original behavior: a strictly
    /// correct containment check would additionally require this range to
    /// be unbounded on every side `other` is unbounded on. Callers needing
    /// strict interval-algebra containment must add that check themselves.
    pub fn contains_range_by<F>(&self, other: &Range<T>, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let lower_in = match &other.lower {
            Some(lower) if other.has_lower_bound() => {
                self.contains_point_by(lower, &mut compare)
            }
            _ => true,
        };
        if !lower_in {
            return false;
        }

        match &other.upper {
            Some(upper) if other.has_upper_bound() => self.contains_point_by(upper, &mut compare),
            _ => true,
        }
    }

    /// Returns `true` if every finite bound of `other` lies within this
    /// range.
    ///
    /// Convenience for [`contains_range_by`](Range::contains_range_by) with
    /// the intrinsic ordering of `T`; the same weak-containment asymmetry
    /// applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::parse_with;
    ///
    /// let range = parse_with("[1,10)", |raw| raw.parse::<i32>()).unwrap();
    /// let inner = parse_with("[1,3]", |raw| raw.parse::<i32>()).unwrap();
    /// let outer = parse_with("[-1,3]", |raw| raw.parse::<i32>()).unwrap();
    ///
    /// assert!(range.contains_range(&inner));
    /// assert!(!range.contains_range(&outer));
    /// ```
    #[inline]
    pub fn contains_range(&self, other: &Range<T>) -> bool
    where
        T: Ord,
    {
        self.contains_range_by(other, T::cmp)
    }
}

impl<T> Default for Range<T> {
    /// Returns the empty range.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<ops::Range<T>> for Range<T> {
    /// Converts `start..end` into the half-open range `[start,end)`.
    #[inline]
    fn from(range: ops::Range<T>) -> Self {
        Self::new(
            Some(range.start),
            Some(range.end),
            RangeFlags::LOWER_INCLUSIVE,
        )
    }
}

impl<T> From<ops::RangeInclusive<T>> for Range<T> {
    /// Converts `start..=end` into the closed range `[start,end]`.
    #[inline]
    fn from(range: ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(
            Some(start),
            Some(end),
            RangeFlags::LOWER_INCLUSIVE | RangeFlags::UPPER_INCLUSIVE,
        )
    }
}

impl<T> From<ops::RangeFrom<T>> for Range<T> {
    /// Converts `start..` into `[start,)`.
    #[inline]
    fn from(range: ops::RangeFrom<T>) -> Self {
        Self::new(
            Some(range.start),
            None,
            RangeFlags::LOWER_INCLUSIVE | RangeFlags::UPPER_UNBOUNDED,
        )
    }
}

impl<T> From<ops::RangeTo<T>> for Range<T> {
    /// Converts `..end` into `(,end)`.
    #[inline]
    fn from(range: ops::RangeTo<T>) -> Self {
        Self::new(None, Some(range.end), RangeFlags::LOWER_UNBOUNDED)
    }
}

impl<T> From<ops::RangeToInclusive<T>> for Range<T> {
    /// Converts `..=end` into `(,end]`.
    #[inline]
    fn from(range: ops::RangeToInclusive<T>) -> Self {
        Self::new(
            None,
            Some(range.end),
            RangeFlags::LOWER_UNBOUNDED | RangeFlags::UPPER_INCLUSIVE,
        )
    }
}

impl<T> From<ops::RangeFull> for Range<T> {
    /// Converts `..` into the fully unbounded range `(,)`.
    #[inline]
    fn from(_: ops::RangeFull) -> Self {
        Self::unbounded()
    }
}

impl<T> fmt::Display for Range<T>
where
    T: fmt::Display,
{
    /// Renders the canonical literal form of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::Range;
    ///
    /// let range: Range<i32> = (1..10).into();
    /// assert_eq!(range.to_string(), "[1,10)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::literal::serialize_with(self, |value| {
            value.to_string()
        }))
    }
}

impl FromStr for Range<String> {
    type Err = crate::literal::ParseError;

    /// Parses a literal with the identity transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::Range;
    ///
    /// let range: Range<String> = "[a,z)".parse().unwrap();
    /// assert_eq!(range.lower.as_deref(), Some("a"));
    /// ```
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::literal::parse(s)
    }
}
