//! # `fmtab` Table <-> libFM Transcoder
//!
//! `fmtab` turns a tab-separated table with missing values into sparse
//! libFM feature lists, and splices a factorization model's predictions
//! back into the table.
//!
//! Each data row is a pivot cell (label / key) followed by feature cells.
//! Every feature cell becomes one token ``<value> <row>:1 <column>:1``,
//! where rows are indexed ``[0, total_rows)`` and columns continue from
//! ``total_rows``. Numeric cells form the training tokens; every other cell
//! is *missing*, and becomes a placeholder token to be predicted.
//!
//! See:
//! * [`encoders`] to encode a table into tokens.
//! * [`decoders`] to decode predictions into a table.
//! * [`cells`] for the shared cell classifier.
//! * [`io`] for loading tables and predictions, and persisting state.
//!
//! ```rust
//! use fmtab::{TableDecoder, TableEncoder};
//!
//! let lines = ["h\tA\tB", "r1\t3.5\tcat", "r2\tdog\t7.1"];
//!
//! let encoded = TableEncoder::default().encode(&lines).unwrap();
//! assert_eq!(encoded.placeholders.len(), 2);
//!
//! // ... train on `encoded.numeric`, predict `encoded.placeholders` ...
//! let predictions = [1.2, 3.4];
//!
//! let table = TableDecoder::default()
//!     .decode(&encoded.state, &predictions)
//!     .unwrap();
//! assert_eq!(table[1], "r1\t3.5\t1.2");
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod cells;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod io;
pub mod table_state;
pub mod types;

#[doc(inline)]
pub use decoders::{DecoderOptions, PredictionFormat, TableDecoder};
#[doc(inline)]
pub use encoders::{EncodedTable, EncoderOptions, NumericPayload, RowWidthPolicy, TableEncoder};
#[doc(inline)]
pub use errors::{FTResult, FmTabError};
#[doc(inline)]
pub use table_state::TableState;
#[doc(inline)]
pub use types::{FeatureToken, IdentitySpace};
