#![allow(missing_docs)]

use lexbio_standards::{TableOptions, parse_table};
use proptest::prelude::*;

const HEADERS: [&str; 3] = ["term_localName", "label", "definition"];

fn serialize(rows: &[Vec<String>], delimiter: u8) -> String {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(HEADERS).unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

proptest! {
    #[test]
    fn quoted_cells_survive_a_round_trip(
        rows in prop::collection::vec(
            prop::collection::vec("[a-zA-Z0-9 ,;\"]{0,12}", 3),
            1..8,
        ),
        delimiter in prop::sample::select(vec![b',', b';']),
    ) {
        let text = serialize(&rows, delimiter);
        let parsed = parse_table(&text, &TableOptions::default().with_delimiter(delimiter)).unwrap();

        prop_assert_eq!(parsed.len(), rows.len());
        for (row, cells) in parsed.iter().zip(&rows) {
            for (header, cell) in HEADERS.iter().zip(cells) {
                prop_assert_eq!(&row[*header], cell);
            }
        }
    }
}
