//! # Table Decoders
//!
//! ## Example
//!
//! ```rust
//! use fmtab::{TableDecoder, TableEncoder};
//!
//! let encoded = TableEncoder::default()
//!     .encode(&["h\tA\tB", "r1\t3.5\tcat", "r2\tdog\t7.1"])
//!     .unwrap();
//!
//! // One prediction per placeholder, in placeholder order.
//! let lines = TableDecoder::default()
//!     .decode(&encoded.state, &[1.2, 3.4])
//!     .unwrap();
//!
//! assert_eq!(lines, vec!["h\tA\tB", "r1\t3.5\t1.2", "r2\t3.4\t7.1"]);
//! ```

mod decoder_options;
mod table_decoder;

#[doc(inline)]
pub use decoder_options::*;
#[doc(inline)]
pub use table_decoder::*;
