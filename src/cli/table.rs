/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            alignment,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
}

impl Table {
    /// Computes the content widths for each column based on headers, rows,
    /// and column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                width
            })
            .collect()
    }

    fn render_header(&self, widths: &[usize]) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&header, widths)
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    /// Renders the full table, optionally including headers and a separator.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut out = String::new();

        if self.show_headers {
            out.push_str(&self.render_header(&widths));
            out.push('\n');
            out.push_str(&horizontal_rule(&widths, self.padding));
            if !self.rows.is_empty() {
                out.push('\n');
            }
        }

        for (idx, row) in self.rows.iter().enumerate() {
            out.push_str(&self.render_row(row, &widths));
            if idx + 1 < self.rows.len() {
                out.push('\n');
            }
        }

        out
    }
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fill = width.saturating_sub(visible_width(text));
    let mut cell = match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
    };
    cell.push_str(&" ".repeat(padding));
    cell
}

fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total: usize = widths.iter().sum::<usize>() + (widths.len() * (padding + 1));
    "-".repeat(total.saturating_sub(padding + 1).max(1))
}

/// Character width of the text, skipping over ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
                continue;
            }
        }

        if let Some(ch) = text[idx..].chars().next() {
            width += 1;
            idx += ch.len_utf8();
        } else {
            idx += 1;
        }
    }

    width
}
