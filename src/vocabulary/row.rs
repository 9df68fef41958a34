//! CSV ingestion
//!
//! Rows are read with header-based access. Header names and cell values
//! are trimmed; ragged rows are accepted, with missing cells treated as
//! absent and surplus cells ignored.

use super::error::VocabularyResult;
use indexmap::IndexMap;
use std::io::Read;

/// Recognized vocabulary columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    PrefLabel,
    AltLabel,
    Definition,
    Example,
    ExactMatch,
    CloseMatch,
    Broader,
}

impl Column {
    /// Header names accepted for this column, in lookup order
    pub fn aliases(self) -> [&'static str; 2] {
        match self {
            Column::Id => ["ID", "id"],
            Column::PrefLabel => ["prefLabel", "preflabel"],
            Column::AltLabel => ["altLabel", "altlabel"],
            Column::Definition => ["definition", "Definition"],
            Column::Example => ["example", "Example"],
            Column::ExactMatch => ["exactMatch", "exactmatch"],
            Column::CloseMatch => ["closeMatch", "closematch"],
            Column::Broader => ["broader", "Broader"],
        }
    }
}

/// One data line of the input table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// 1-based data line number (the header is line 0)
    pub line: usize,
    fields: IndexMap<String, String>,
}

impl Row {
    /// Create a row from header/value pairs
    pub fn new<K, V>(line: usize, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into().trim().to_string(), v.into().trim().to_string()))
                .collect(),
        }
    }

    /// Value of a recognized column.
    ///
    /// Aliases are tried in order and the first non-empty value wins, so an
    /// exact-case header takes precedence over its lowercase twin.
    pub fn get(&self, column: Column) -> Option<&str> {
        column
            .aliases()
            .into_iter()
            .filter_map(|name| self.fields.get(name))
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }

    /// Raw value under an arbitrary header name
    pub fn get_raw(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// Concept ID, if present
    pub fn id(&self) -> Option<&str> {
        self.get(Column::Id)
    }
}

/// Read every row of a headed CSV document
pub fn read_rows<R: Read>(reader: R) -> VocabularyResult<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
            h.trim().to_string()
        })
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.as_str(), v));
        rows.push(Row::new(idx + 1, fields));
    }

    Ok(rows)
}

/// Split an `altLabel` cell on commas
pub fn split_alt_labels(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Split a `broader` cell on `|` or `;`
pub fn split_broader(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(['|', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_trims_headers_and_values() {
        let input = " ID , prefLabel ,broader\n A , Animal ,\nB,Dog, A \n";
        let rows = read_rows(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[0].id(), Some("A"));
        assert_eq!(rows[0].get(Column::PrefLabel), Some("Animal"));
        assert_eq!(rows[0].get(Column::Broader), None);
        assert_eq!(rows[1].get(Column::Broader), Some("A"));
    }

    #[test]
    fn test_alternate_header_casing() {
        let input = "id,preflabel,altlabel,Definition,Example,exactmatch,closematch,Broader\n\
                     A,Animal,beast,A living thing,Rex,x,y,B\n";
        let rows = read_rows(input.as_bytes()).unwrap();

        let row = &rows[0];
        assert_eq!(row.id(), Some("A"));
        assert_eq!(row.get(Column::PrefLabel), Some("Animal"));
        assert_eq!(row.get(Column::AltLabel), Some("beast"));
        assert_eq!(row.get(Column::Definition), Some("A living thing"));
        assert_eq!(row.get(Column::Example), Some("Rex"));
        assert_eq!(row.get(Column::ExactMatch), Some("x"));
        assert_eq!(row.get(Column::CloseMatch), Some("y"));
        assert_eq!(row.get(Column::Broader), Some("B"));
    }

    #[test]
    fn test_exact_case_wins_over_lowercase() {
        let row = Row::new(1, [("prefLabel", "Exact"), ("preflabel", "lower")]);
        assert_eq!(row.get(Column::PrefLabel), Some("Exact"));

        let row = Row::new(1, [("prefLabel", ""), ("preflabel", "lower")]);
        assert_eq!(row.get(Column::PrefLabel), Some("lower"));
    }

    #[test]
    fn test_ragged_rows() {
        let input = "ID,prefLabel,definition\nA\nB,Dog,A dog.,surplus\n";
        let rows = read_rows(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), Some("A"));
        assert_eq!(rows[0].get(Column::PrefLabel), None);
        assert_eq!(rows[1].get(Column::Definition), Some("A dog."));
    }

    #[test]
    fn test_byte_order_mark_and_unknown_columns() {
        let input = "\u{feff}ID,notes\nA,ignored\n";
        let rows = read_rows(input.as_bytes()).unwrap();

        assert_eq!(rows[0].id(), Some("A"));
        assert_eq!(rows[0].get_raw("notes"), Some("ignored"));
    }

    #[test]
    fn test_quoted_cells() {
        let input = "ID,altLabel\nA,\"beast, creature\"\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows[0].get(Column::AltLabel), Some("beast, creature"));
    }

    #[test]
    fn test_split_alt_labels() {
        let labels: Vec<&str> = split_alt_labels("x, y ,z,, ").collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_split_broader() {
        let ids: Vec<&str> = split_broader("A | B;C ;; ").collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
