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

//! # Range Flags
//!
//! The flag set describing the shape of a range: whether it is empty, which
//! finite bounds include their boundary value, and which sides extend to
//! infinity. A `Range<T>` embeds one `RangeFlags` value; the literal parser
//! produces it and the literal serializer consumes it.
//!
//! ## Invariants
//!
//! - `EMPTY` stands alone: the parser never combines it with another facet,
//!   and the serializer ignores every other facet once it is set.
//! - An `*_UNBOUNDED` facet makes the matching `*_INCLUSIVE` facet
//!   inapplicable. The parser normalizes such combinations away and
//!   `Range` routes all closedness queries through accessors that honor the
//!   rule, so stray combinations in hand-built values stay harmless.

use bitflags::bitflags;

bitflags! {
    /// Boolean facets describing the shape of a range.
    ///
    /// Facets combine with the bitwise operators and are tested with
    /// [`contains`](RangeFlags::contains), which requires *all* requested
    /// facets to be set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelit::RangeFlags;
    ///
    /// let flags = RangeFlags::LOWER_INCLUSIVE | RangeFlags::UPPER_UNBOUNDED;
    /// assert!(flags.contains(RangeFlags::LOWER_INCLUSIVE));
    /// assert!(!flags.contains(RangeFlags::LOWER_INCLUSIVE | RangeFlags::EMPTY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RangeFlags: u8 {
        /// The range denotes the empty set and carries no bounds.
        const EMPTY           = 0b0000_0001;
        /// The lower bound, if finite, is part of the range.
        const LOWER_INCLUSIVE = 0b0000_0010;
        /// The upper bound, if finite, is part of the range.
        const UPPER_INCLUSIVE = 0b0000_0100;
        /// The lower bound is negative infinity; no value is stored.
        const LOWER_UNBOUNDED = 0b0000_1000;
        /// The upper bound is positive infinity; no value is stored.
        const UPPER_UNBOUNDED = 0b0001_0000;
    }
}

impl Default for RangeFlags {
    /// Returns the set with no facets: a bounded range with two open,
    /// finite bounds.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
