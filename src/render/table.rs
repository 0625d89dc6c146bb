//! Table rendering: head, rows, cells, and span/border handling.

use super::options::RenderOptions;
use super::style::{css_color, paragraph_css, style_attr};
use super::text::render_run;
use crate::model::{Border, Table, TableCell, TableRow, WidthType};

/// Render a table node into `<div><table>…</table></div>`.
pub(crate) fn render_table(table: &Table, options: &RenderOptions) -> String {
    let head = render_head(table);
    let body = render_rows(&table.table_rows, options);

    let wrapper_class = class_attr(&options.table_wrapper_class);
    let table_class = class_attr(&options.table_class);
    format!(
        "<div{wrapper_class}><table style=\"border-collapse: collapse;\"{table_class}>{head}{body}</table></div>"
    )
}

/// Render the `<thead>` from the declared columns: fixed-width columns get
/// a width attribute, everything else a bare `<th>`.
fn render_head(table: &Table) -> String {
    let columns: String = table
        .table_style
        .table_column_properties
        .iter()
        .map(|column| match (&column.width, column.width_type) {
            (Some(width), WidthType::FixedWidth) => {
                format!("<th width=\"{}\"></th>", width.css())
            }
            _ => "<th></th>".to_string(),
        })
        .collect();
    format!("<thead><tr>{columns}</tr></thead>")
}

/// Render all rows into a `<tbody>`.
fn render_rows(rows: &[TableRow], options: &RenderOptions) -> String {
    let body: String = rows
        .iter()
        .map(|row| format!("<tr>{}</tr>", render_row(row, options)))
        .collect();
    format!("<tbody>{body}</tbody>")
}

fn render_row(row: &TableRow, options: &RenderOptions) -> String {
    let mut html = String::new();
    let mut colspan_counter: u32 = 1;

    for cell in &row.table_cells {
        // Skip source cells covered by a previous cell's colspan
        if colspan_counter > 1 {
            colspan_counter -= 1;
            continue;
        }

        let cell_style = &cell.table_cell_style;
        let mut props = Vec::new();
        let mut styles = Vec::new();

        if cell_style.row_span > 1 {
            props.push(format!("rowspan=\"{}\"", cell_style.row_span));
        }
        if cell_style.column_span > 1 {
            colspan_counter = cell_style.column_span;
            props.push(format!("colspan=\"{}\"", cell_style.column_span));
        }

        let borders = [
            ("top", cell_style.border_top.as_ref()),
            ("bottom", cell_style.border_bottom.as_ref()),
        ];
        for (position, border) in borders {
            if let Some(border) = border {
                push_border_styles(&mut styles, position, border);
            }
        }

        if !styles.is_empty() {
            props.push(format!("style=\"{}\"", styles.join(";")));
        }

        let content = render_cell(cell, options);
        if props.is_empty() {
            html.push_str(&format!("<td>{content}</td>"));
        } else {
            html.push_str(&format!("<td {}>{content}</td>", props.join(" ")));
        }
    }

    html
}

fn push_border_styles(styles: &mut Vec<String>, position: &str, border: &Border) {
    styles.push(format!("border-{position}-width: {}", border.width.css()));
    styles.push(format!(
        "border-{position}-color: {}",
        css_color(border.color.as_ref())
    ));
    styles.push(format!("border-{position}-style: solid"));
}

/// Render a cell's nested content lines. Only paragraph-bearing lines
/// produce output; runs use a `div` wrapper for single-element paragraphs
/// and `span` otherwise, same as top-level paragraphs.
fn render_cell(cell: &TableCell, options: &RenderOptions) -> String {
    cell.content
        .iter()
        .map(|line| {
            let Some(paragraph) = &line.paragraph else {
                return String::new();
            };
            let run_wrapper = if paragraph.elements.len() == 1 {
                "div"
            } else {
                "span"
            };
            let styles = paragraph_css(paragraph.paragraph_style.as_ref(), options.indent_ratio);
            let content: String = paragraph
                .elements
                .iter()
                .filter_map(|element| element.text_run.as_ref())
                .filter_map(|run| render_run(run, Some(run_wrapper), options))
                .collect();
            format!("<div{}>{content}</div>", style_attr(&styles))
        })
        .collect()
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ColumnProperties, Dimension, OptionalColor, TableStyle,
    };

    fn options() -> RenderOptions {
        RenderOptions::default()
    }

    fn table_with_rows(rows: Vec<TableRow>) -> Table {
        Table {
            table_style: TableStyle::default(),
            table_rows: rows,
        }
    }

    #[test]
    fn test_colspan_skips_covered_cells() {
        let row = TableRow::new(vec![
            TableCell::with_text("wide").colspan(3),
            TableCell::with_text("covered"),
            TableCell::with_text("covered too"),
        ]);
        let html = render_row(&row, &options());

        assert_eq!(html.matches("<td").count(), 1);
        assert!(html.starts_with("<td colspan=\"3\">"));
        assert!(!html.contains("covered"));
    }

    #[test]
    fn test_rowspan_prop() {
        let row = TableRow::new(vec![TableCell::with_text("tall").rowspan(2)]);
        let html = render_row(&row, &options());
        assert!(html.starts_with("<td rowspan=\"2\">"));
    }

    #[test]
    fn test_plain_cell_has_no_props() {
        let row = TableRow::new(vec![TableCell::with_text("plain")]);
        let html = render_row(&row, &options());
        assert_eq!(html, "<td><div>plain</div></td>");
    }

    #[test]
    fn test_border_styles() {
        let border = Border {
            width: Dimension::points(1.0),
            color: Some(OptionalColor::rgb(1.0, 0.0, 0.0)),
        };
        let row = TableRow::new(vec![TableCell::with_text("x").border_top(border)]);
        let html = render_row(&row, &options());

        assert!(html.contains("border-top-width: 1pt"));
        assert!(html.contains("border-top-color: rgb(1, 0, 0)"));
        assert!(html.contains("border-top-style: solid"));
    }

    #[test]
    fn test_border_color_fallback() {
        let border = Border::with_width(Dimension::points(1.0));
        let row = TableRow::new(vec![TableCell::with_text("x").border_bottom(border)]);
        let html = render_row(&row, &options());
        assert!(html.contains("border-bottom-color: #000"));
    }

    #[test]
    fn test_head_fixed_and_flexible_columns() {
        let table = Table {
            table_style: TableStyle {
                table_column_properties: vec![
                    ColumnProperties {
                        width: Some(Dimension::points(120.0)),
                        width_type: WidthType::FixedWidth,
                    },
                    ColumnProperties {
                        width: None,
                        width_type: WidthType::EvenlyDistributed,
                    },
                ],
            },
            table_rows: Vec::new(),
        };
        assert_eq!(
            render_head(&table),
            "<thead><tr><th width=\"120pt\"></th><th></th></tr></thead>"
        );
    }

    #[test]
    fn test_table_wrapper() {
        let table = table_with_rows(vec![TableRow::new(vec![TableCell::with_text("a")])]);
        let html = render_table(&table, &options());
        assert_eq!(
            html,
            "<div><table style=\"border-collapse: collapse;\"><thead><tr></tr></thead>\
             <tbody><tr><td><div>a</div></td></tr></tbody></table></div>"
        );
    }

    #[test]
    fn test_table_classes() {
        let table = table_with_rows(Vec::new());
        let opts = RenderOptions::new().with_table_classes("wrap", "tbl");
        let html = render_table(&table, &opts);
        assert!(html.starts_with("<div class=\"wrap\"><table style=\"border-collapse: collapse;\" class=\"tbl\">"));
    }

    #[test]
    fn test_cell_line_without_paragraph_renders_empty() {
        let mut cell = TableCell::with_text("kept");
        cell.content.push(crate::model::BodyNode::section_break(0));
        let html = render_cell(&cell, &options());
        assert_eq!(html, "<div>kept</div>");
    }
}
