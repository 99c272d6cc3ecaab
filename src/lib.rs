//! # Parsnip - Parser Combinator Library
//!
//! Composable, type-safe parsers over borrowed byte slices. Small
//! parsers combine into larger ones using combinators, and grammars
//! read like the data they describe:
//!
//! - **Zero copies**: parsers walk a [`Cursor`] view of the input and
//!   never own or duplicate the source text
//! - **Zero panics**: a failed parse is a [`Miss`] carried through
//!   `Result`, never an unwind
//! - **Always-good tracking**: parsers that cannot miss implement
//!   [`PureParser`] and skip failure plumbing entirely
//! - **Straight-line grammars**: [`chain`](chain::chain) writes
//!   multi-step rules as ordinary imperative code with `?`

pub mod and;
pub mod ascii;
pub mod between;
pub mod chain;
pub mod cursor;
pub mod fold_left;
pub mod lazy;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod pure;
pub mod quoted_string;
pub mod recurse;
pub mod result;
pub mod sequence_of;
pub mod some;
pub mod then;
pub mod try_parse;

pub use cursor::Cursor;
pub use parser::{BoxedExt, BoxedParser, Parser, PureParser};
pub use result::{Miss, ParseResult, PureResult};
