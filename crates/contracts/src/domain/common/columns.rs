/// How a table cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Hex color value shown next to a colored swatch
    Swatch,
}

/// Static column descriptor of a list table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub const fn text(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            kind: ColumnKind::Text,
        }
    }

    pub const fn swatch(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            kind: ColumnKind::Swatch,
        }
    }
}

/// Flattened list row with preformatted cell values
pub trait TableRow: Clone + PartialEq + Send + Sync + 'static {
    fn row_id(&self) -> &str;

    /// Display value of the column with the given key; empty for unknown keys
    fn cell(&self, key: &str) -> String;
}

/// Case-insensitive substring filter on one column
pub fn filter_rows<R: TableRow>(rows: &[R], search_key: &str, query: &str) -> Vec<R> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.cell(search_key).to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Cell text of a boolean flag
pub fn yes_no(value: bool) -> String {
    if value { "Sim" } else { "Não" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Row(&'static str, &'static str);

    impl TableRow for Row {
        fn row_id(&self) -> &str {
            self.0
        }

        fn cell(&self, key: &str) -> String {
            match key {
                "name" => self.1.to_string(),
                _ => String::new(),
            }
        }
    }

    #[test]
    fn test_filter_rows_case_insensitive() {
        let rows = vec![Row("1", "Camiseta"), Row("2", "Calça"), Row("3", "Boné")];
        let filtered = filter_rows(&rows, "name", "CA");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_rows(&rows, "name", "  ").len(), 3);
        assert!(filter_rows(&rows, "unknown", "ca").is_empty());
    }
}
