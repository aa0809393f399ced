//! Matchlight pattern engine.
//!
//! A [`Pattern`] is compiled once into a [`Check`], which is then tested
//! against values without side effects.
//!
//! # Pattern forms
//!
//! | Form                      | Matches                                        |
//! |---------------------------|------------------------------------------------|
//! | Primitive value           | Strictly equal value (`NaN` never matches)     |
//! | Predicate / type constant | Values the predicate accepts                   |
//! | Function value            | Values for which the call result is truthy     |
//! | Regex ([`Tester`])        | Values whose string form the regex accepts     |
//! | Array template            | Arrays, positionally                           |
//! | Object template           | Objects whose declared keys all match          |
//! | `Any` / `undefined`       | Any single value                               |
//! | `Rest` (in arrays)        | The remainder of the array                     |
//! | `Seek` (in arrays)        | Skips values until the next entry matches      |

pub mod ast;
pub mod compiler;
pub mod matcher;
pub mod notation;

pub use ast::{Pattern, Predicate, Tester};
pub use compiler::{Check, compile};
pub use matcher::{match_array, match_object};
pub use notation::from_json;
