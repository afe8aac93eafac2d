//! # Table Encoders
//!
//! ## Example
//!
//! ```rust
//! use fmtab::{EncoderOptions, RowWidthPolicy};
//!
//! let encoder = EncoderOptions::default()
//!     .with_row_width(RowWidthPolicy::MatchHeader)
//!     .build();
//!
//! let encoded = encoder
//!     .encode(&["h\tA\tB", "r1\t3.5\tcat", "r2\tdog\t7.1"])
//!     .unwrap();
//!
//! assert_eq!(encoded.numeric_lines(), vec!["3.5 0:1 2:1", "7.1 1:1 3:1"]);
//! assert_eq!(encoded.placeholder_lines(), vec!["0 0:1 3:1", "0 1:1 2:1"]);
//! assert_eq!(encoded.meta_lines(), vec!["0", "0", "1", "1"]);
//! ```

mod encoded_table;
mod encoder_options;
mod table_encoder;

#[doc(inline)]
pub use encoded_table::*;
#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use table_encoder::*;
