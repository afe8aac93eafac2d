#![allow(missing_docs)]

use fmtab::{
    FmTabError,
    IdentitySpace,
    TableDecoder,
    TableEncoder,
    cells::{CellClass, split_row},
};
use proptest::prelude::*;

/// A cell that is numeric, categorical, or empty.
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?",
        "[a-z]{1,4}",
        Just(String::new()),
        Just("NA".to_string()),
    ]
}

/// A header plus `rows` data rows of `width` feature cells.
fn table_strategy() -> impl Strategy<Value = Vec<String>> {
    (0usize..6, 0usize..5).prop_flat_map(|(rows, width)| {
        prop::collection::vec(prop::collection::vec(cell_strategy(), width), rows).prop_map(
            move |cells| {
                let mut header = vec!["id".to_string()];
                header.extend((0..width).map(|c| format!("c{c}")));

                let mut lines = vec![header.join("\t")];
                for (r, row) in cells.into_iter().enumerate() {
                    let mut line = vec![format!("r{r}")];
                    line.extend(row);
                    lines.push(line.join("\t"));
                }
                lines
            },
        )
    })
}

proptest! {
    #[test]
    fn tokens_cover_every_cell(lines in table_strategy()) {
        let encoded = TableEncoder::default().encode(&lines).unwrap();
        let cells: usize = lines[1..].iter().map(|l| split_row(l).feature_count()).sum();
        prop_assert_eq!(encoded.token_count(), cells);
    }

    #[test]
    fn meta_marks_identity_spaces(lines in table_strategy()) {
        let encoded = TableEncoder::default().encode(&lines).unwrap();
        let total_rows = lines.len() - 1;
        let width = if total_rows == 0 { 0 } else { split_row(&lines[0]).feature_count() };

        prop_assert_eq!(encoded.meta.len(), total_rows + width);
        prop_assert!(encoded.meta[..total_rows].iter().all(|m| *m == IdentitySpace::Row));
        prop_assert!(encoded.meta[total_rows..].iter().all(|m| *m == IdentitySpace::Column));
    }

    #[test]
    fn decode_substitutes_only_missing_cells(lines in table_strategy()) {
        let encoded = TableEncoder::default().encode(&lines).unwrap();
        let predictions: Vec<f64> = (0..encoded.placeholders.len())
            .map(|i| 1000.0 + i as f64)
            .collect();
        let decoded = TableDecoder::default().decode(&encoded.state, &predictions).unwrap();

        prop_assert_eq!(decoded.len(), lines.len());
        prop_assert_eq!(&decoded[0], &lines[0]);

        let mut next = predictions.iter();
        for (original, rebuilt) in lines[1..].iter().zip(&decoded[1..]) {
            let original = split_row(original);
            let rebuilt = split_row(rebuilt);
            prop_assert_eq!(original.pivot(), rebuilt.pivot());
            prop_assert_eq!(original.feature_count(), rebuilt.feature_count());

            for (before, after) in original.classified().zip(rebuilt.features()) {
                match before {
                    CellClass::Numeric { text, .. } => prop_assert_eq!(text, after),
                    CellClass::Missing { .. } => {
                        let expected = next.next().unwrap().to_string();
                        prop_assert_eq!(expected.as_str(), after);
                    }
                }
            }
        }
        prop_assert!(next.next().is_none());
    }
}

#[test]
fn placeholder_tokens_index_row_and_column() {
    let lines = ["h\tA\tB", "r1\t3.5\tcat", "r2\tdog\t7.1"];
    let encoded = TableEncoder::default().encode(&lines).unwrap();

    let positions: Vec<(usize, usize)> = encoded
        .placeholders
        .iter()
        .map(|t| (t.row, t.column))
        .collect();
    assert_eq!(positions, vec![(0, 3), (1, 2)]);
    assert!(encoded.placeholders.iter().all(|t| t.value == "0"));
}

#[test]
fn decode_after_reencoding_is_stable() {
    let lines = ["h\tA\tB", "r1\tx\t1", "r2\t2\ty"];
    let encoder = TableEncoder::default();
    let decoder = TableDecoder::default();

    let first = encoder.encode(&lines).unwrap();
    let filled = decoder.decode(&first.state, &[5.0, 6.0]).unwrap();
    assert_eq!(filled, vec!["h\tA\tB", "r1\t5\t1", "r2\t2\t6"]);

    // Once filled, nothing is missing.
    let second = encoder.encode(&filled).unwrap();
    assert!(second.placeholders.is_empty());
    assert_eq!(decoder.decode(&second.state, &[]).unwrap(), filled);
}

#[test]
fn decode_rejects_mismatched_predictions() {
    let encoded = TableEncoder::default()
        .encode(&["h\tA", "r1\tx", "r2\ty"])
        .unwrap();
    assert!(matches!(
        TableDecoder::default().decode(&encoded.state, &[1.0]),
        Err(FmTabError::PredictionCountMismatch {
            expected: 2,
            actual: 1
        })
    ));
}
