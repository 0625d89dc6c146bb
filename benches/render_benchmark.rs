//! Benchmarks for undoc rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents of varying shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undoc::{
    to_html, BodyNode, Document, GlyphType, ListDefinition, Paragraph, Table, TableCell, TableRow,
    TextRun,
};

/// Build a document of `paragraphs` text paragraphs followed by a bulleted
/// list of the same length.
fn create_text_document(paragraphs: usize) -> Document {
    let mut doc = Document::new();
    let mut index = 1;

    for i in 0..paragraphs {
        let mut p = Paragraph::new();
        p.add_run(TextRun::new(format!(
            "Paragraph {i} with enough words to look like real body text.\n"
        )));
        p.add_run(TextRun::bold("Emphasis."));
        doc.add_node(BodyNode::paragraph(index, p));
        index += 80;
    }

    doc.add_list(
        "kix.bench",
        ListDefinition::with_glyphs(vec![GlyphType::UpperAlpha]),
    );
    for i in 0..paragraphs {
        doc.add_node(BodyNode::paragraph(
            index,
            Paragraph::with_text(format!("List item {i}\n")).with_bullet("kix.bench", 0),
        ));
        index += 20;
    }

    doc
}

/// Build a document containing `tables` tables of `rows` x 4 cells.
fn create_table_document(tables: usize, rows: usize) -> Document {
    let mut doc = Document::new();
    let mut index = 1;

    for _ in 0..tables {
        let mut table = Table::new();
        for r in 0..rows {
            table.add_row(TableRow::new(vec![
                TableCell::with_text(format!("r{r}c0")),
                TableCell::with_text(format!("r{r}c1")).colspan(2),
                TableCell::with_text(format!("r{r}c2")),
                TableCell::with_text(format!("r{r}c3")),
            ]));
        }
        doc.add_node(BodyNode::table(index, table));
        index += 500;
    }

    doc
}

fn bench_text_rendering(c: &mut Criterion) {
    let small = create_text_document(50);
    let large = create_text_document(1000);

    c.bench_function("render_text_50", |b| {
        b.iter(|| to_html(black_box(&small)).unwrap())
    });
    c.bench_function("render_text_1000", |b| {
        b.iter(|| to_html(black_box(&large)).unwrap())
    });
}

fn bench_table_rendering(c: &mut Criterion) {
    let doc = create_table_document(20, 25);

    c.bench_function("render_tables_20x25", |b| {
        b.iter(|| to_html(black_box(&doc)).unwrap())
    });
}

criterion_group!(benches, bench_text_rendering, bench_table_rendering);
criterion_main!(benches);
