use crate::model::{PageTable, PageText};

pub(crate) const MIN_TABLE_COLS: usize = 2;
const MIN_TABLE_ROWS: usize = 2;

pub(crate) fn split_line_into_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut whitespace_run = 0_usize;

    for ch in trimmed.chars() {
        if ch == '\t' {
            if !current.trim().is_empty() {
                cells.push(current.trim().to_string());
                current.clear();
            }
            whitespace_run = 0;
            continue;
        }

        if ch.is_whitespace() {
            whitespace_run += 1;
            if whitespace_run >= 2 {
                if !current.trim().is_empty() {
                    cells.push(current.trim().to_string());
                    current.clear();
                }
                continue;
            }
            current.push(' ');
            continue;
        }

        whitespace_run = 0;
        current.push(ch);
    }

    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }

    cells
}

pub(crate) fn soft_split_line_into_cells(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

pub(crate) fn detect_tables_in_page(page: &PageText) -> Vec<PageTable> {
    let mut tables = Vec::new();
    let mut current_rows: Vec<Vec<String>> = Vec::new();

    let flush_current = |rows: &mut Vec<Vec<String>>, tables: &mut Vec<PageTable>| {
        if rows.len() >= MIN_TABLE_ROWS {
            tables.push(PageTable {
                page: page.page_number,
                rows: std::mem::take(rows),
            });
        } else {
            rows.clear();
        }
    };

    for line in page.text.lines() {
        let mut cells = split_line_into_cells(line);
        if cells.len() < MIN_TABLE_COLS {
            let soft_cells = soft_split_line_into_cells(line);
            let has_numeric = soft_cells
                .iter()
                .any(|cell| cell.chars().any(|ch| ch.is_ascii_digit()));
            let looks_like_sentence = ['.', '!', '?']
                .iter()
                .any(|punctuation| line.trim_end().ends_with(*punctuation));
            if soft_cells.len() >= MIN_TABLE_COLS
                && !looks_like_sentence
                && (has_numeric || soft_cells.len() <= 6)
            {
                cells = soft_cells;
            }
        }

        if cells.len() >= MIN_TABLE_COLS {
            current_rows.push(cells);
        } else {
            flush_current(&mut current_rows, &mut tables);
        }
    }

    flush_current(&mut current_rows, &mut tables);
    tables
}
