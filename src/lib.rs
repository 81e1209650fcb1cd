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

//! # Rangelit
//!
//! Conversion between the textual range literal used by relational
//! databases (`[1,10)`, `(,infinity)`, `empty`) and a structured,
//! generically-typed [`Range<T>`] value, and back.
//!
//! ## Modules
//!
//! - `flags`: The [`RangeFlags`] facet set describing emptiness,
//!   bound inclusivity, and unbounded sides.
//! - `range`: The [`Range<T>`] value type with containment predicates and
//!   conversions from the standard range types.
//! - `literal`: The bidirectional grammar: a quote- and escape-aware
//!   [`parse`] and its structural inverse [`serialize`], with
//!   caller-supplied element conversion.
//!
//! ## Example
//!
//! ```rust
//! use rangelit::{parse_with, serialize_with};
//!
//! let range = parse_with("[1,10)", |raw| raw.parse::<i32>())?;
//! assert!(range.contains_point(&5));
//! assert!(!range.contains_point(&10));
//! assert_eq!(serialize_with(&range, i32::to_string), "[1,10)");
//! # Ok::<(), rangelit::ParseError<std::num::ParseIntError>>(())
//! ```
//!
//! Both directions are pure, synchronous, stateless functions; concurrent
//! use is safe as long as the caller-supplied closures are.

pub mod flags;
pub mod literal;
pub mod range;

pub use flags::RangeFlags;
pub use literal::{parse, parse_with, serialize, serialize_with, ParseError};
pub use range::Range;
