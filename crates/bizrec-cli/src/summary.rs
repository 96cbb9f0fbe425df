use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bizrec_cli::profile::{ProfileReport, TableProfile};
use bizrec_cli::types::{LinkSummary, RunReport, SourceSummary};

pub fn print_summary(report: &RunReport) {
    println!("Root: {}", report.root.display());
    if let Some(path) = &report.report_path {
        println!("Run report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Raw"),
        header_cell("Expanded"),
        header_cell("Invalid"),
        header_cell("No key"),
        header_cell("Duplicates"),
        header_cell("Suspect phones"),
        header_cell("Canonical"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in &report.sources {
        table.add_row(source_row(summary));
    }
    println!("{table}");

    if let Some(link) = &report.link {
        print_link_table(link);
    }
}

fn source_row(summary: &SourceSummary) -> Vec<Cell> {
    let raw_rows = summary.raw.as_ref().map(|c| c.rows);
    let mut row = vec![source_cell(summary.source.label()), count_cell(raw_rows)];
    match &summary.normalize {
        Some(normalize) => {
            row.push(Cell::new(normalize.expanded_rows));
            row.push(dropped_cell(normalize.pattern_rejected, Color::Red));
            row.push(dropped_cell(normalize.missing_key_rejected, Color::Red));
            row.push(dropped_cell(normalize.duplicates_removed, Color::Yellow));
            row.push(dropped_cell(normalize.suspect_phones, Color::Yellow));
            row.push(Cell::new(normalize.output_rows).add_attribute(Attribute::Bold));
        }
        None => row.extend((0..6).map(|_| dim_cell("-"))),
    }
    row
}

fn print_link_table(link: &LinkSummary) {
    let report = &link.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Link stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Social rows", report.social_rows),
        ("Web rows", report.web_rows),
        ("Directory rows", report.directory_rows),
        ("Social + Web (domain join)", report.primary_rows),
        ("Directory rows with full key", report.directory_eligible),
        ("Names agree", report.agreeing_rows),
        ("Names disagree", report.disagreeing_rows),
        ("Matched on social key", report.agreeing_matches),
        ("Matched on web key", report.disagreeing_matches),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("RESOLVED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Output: {}", link.output.path.display());
    println!("{table}");
}

pub fn print_profile(report: &ProfileReport) {
    if report.tables.is_empty() {
        println!("No checkpoints found.");
    }
    for profile in &report.tables {
        print_table_profile(profile);
    }
    if let Some(overlap) = report.domain_overlap_percent {
        println!();
        println!("Web domains found in social table: {overlap:.1}%");
    }
}

fn print_table_profile(profile: &TableProfile) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Unique %"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &profile.columns {
        let missing = if column.null_percent > 0.0 {
            Cell::new(format!("{:.1}", column.null_percent)).fg(Color::Yellow)
        } else {
            dim_cell(format!("{:.1}", column.null_percent))
        };
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(format!("{:.1}", column.unique_percent)),
            missing,
        ]);
    }
    println!();
    println!(
        "{} {} ({} rows): {}",
        profile.kind.as_str(),
        profile.source,
        profile.rows,
        profile.path.display()
    );
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn source_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dropped_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
