//! Terminal rendering of command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use lexbio_map::{ClassAlignment, ExtensionRow, field_count, flat_properties};
use lexbio_model::{AlignmentStatus, GbifStatus, ModelConfig, format_pct};
use lexbio_report::{DefinitionTable, LexiconReport, OverviewReport};

use crate::commands::BuildTermsResult;

pub fn print_build_summary(result: &BuildTermsResult) {
    println!("Source: {}", result.source.display());
    println!("SHA-256: {}", result.source_sha256);
    println!("Output: {}", result.output.display());
    println!("{}", build_summary_table(result));
}

pub fn build_summary_table(result: &BuildTermsResult) -> Table {
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let skipped = [
        ("Not recommended", summary.not_recommended),
        ("Class rows", summary.class_rows),
        ("IRI variants", summary.iri_variants),
        ("Unnamed", summary.unnamed),
        ("Duplicates", summary.duplicates),
    ];
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.rows)]);
    for (label, count) in skipped {
        table.add_row(vec![dim_cell(label), count_cell(count, Color::Yellow)]);
    }
    table.add_row(vec![
        Cell::new("Terms written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.terms).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_overview(report: &OverviewReport) {
    println!(
        "{} lexicons · {} fields · {} DwC coverage · {} terms mapped",
        report.lexicon_count,
        report.stats.total_fields,
        report.pct_label(),
        report.stats.stats.mapped
    );
    println!("{}", overview_table(report));
}

pub fn overview_table(report: &OverviewReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lexicon"),
        header_cell("NSID"),
        header_cell("Fields"),
        header_cell("Mapped"),
        header_cell("Coverage"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for card in &report.cards {
        table.add_row(vec![
            Cell::new(&card.title)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(&card.nsid),
            Cell::new(card.field_count),
            Cell::new(format!("{}/{}", card.stats.mapped, card.stats.total)),
            pct_cell(card.stats.pct),
            Cell::new(&card.description),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.stats.total_fields).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{}",
            report.stats.stats.mapped, report.stats.stats.total
        ))
        .add_attribute(Attribute::Bold),
        pct_cell(report.stats.stats.pct).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn print_lexicon(report: &LexiconReport) {
    println!("{} ({})", report.name, report.id);
    if !report.description.is_empty() {
        println!("{}", report.description);
    }
    println!(
        "{} fields · {} DwC coverage · {} mapped · {} missing",
        report.stats.field_count,
        report.pct_label(),
        report.stats.coverage.mapped,
        report.stats.coverage.missing
    );
    let toc: Vec<&str> = report.toc.iter().map(|entry| entry.label.as_str()).collect();
    println!("Definitions: {}", toc.join(", "));

    for table in &report.definitions {
        println!();
        println!("#{} {}", table.anchor, table.label);
        if !table.description.is_empty() {
            println!("{}", table.description);
        }
        println!("{}", definition_table(table));
    }
    for class in &report.alignment.classes {
        println!();
        println!("{} ({}/{})", class.class_group, class.mapped, class.total);
        println!("{}", alignment_table(class));
    }
    if !report.alignment.extensions.is_empty() {
        println!();
        println!("Lexicon-only fields ({})", report.alignment.extensions.len());
        println!("{}", extension_table(&report.alignment.extensions));
    }
}

pub fn definition_table(def: &DefinitionTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Req"),
        header_cell("Type"),
        header_cell("Constraints"),
        header_cell("DwC term"),
        header_cell("Description"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for row in &def.rows {
        table.add_row(vec![
            Cell::new(&row.field).add_attribute(Attribute::Bold),
            required_cell(row.required),
            Cell::new(&row.type_label).fg(Color::Magenta),
            text_or_dash(&row.constraints),
            match &row.dwc_term {
                Some(term) => Cell::new(term).fg(Color::Green),
                None => dim_cell("-"),
            },
            text_or_dash(&row.description),
        ]);
    }
    table
}

pub fn alignment_table(class: &ClassAlignment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("DwC term"),
        header_cell("GBIF"),
        header_cell("Field"),
        header_cell("Req"),
        header_cell("Type"),
        header_cell("Status"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    for row in &class.rows {
        table.add_row(vec![
            Cell::new(&row.term).add_attribute(Attribute::Bold),
            gbif_cell(row.gbif),
            match &row.field {
                Some(field) => Cell::new(field),
                None => dim_cell("-"),
            },
            match row.status {
                AlignmentStatus::Mapped => required_cell(row.required),
                _ => dim_cell("-"),
            },
            match &row.type_label {
                Some(label) => Cell::new(label).fg(Color::Magenta),
                None => dim_cell("-"),
            },
            status_cell(row.status),
        ]);
    }
    table
}

pub fn extension_table(rows: &[ExtensionRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Req"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Description"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.field).add_attribute(Attribute::Bold),
            required_cell(row.required),
            Cell::new(&row.type_label).fg(Color::Magenta),
            status_cell(row.status),
            text_or_dash(&row.description),
        ]);
    }
    table
}

pub fn print_models(models: &[ModelConfig]) {
    println!("{}", models_table(models));
}

pub fn models_table(models: &[ModelConfig]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slug"),
        header_cell("Lexicon"),
        header_cell("Fields"),
        header_cell("Classes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for model in models {
        table.add_row(vec![
            Cell::new(&model.slug)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&model.lexicon.id),
            Cell::new(field_count(&flat_properties(&model.lexicon))),
            Cell::new(model.classes.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() == 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn pct_cell(pct: f64) -> Cell {
    let color = if pct >= 75.0 {
        Color::Green
    } else if pct >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format_pct(pct)).fg(color)
}

fn required_cell(required: bool) -> Cell {
    if required {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn status_cell(status: AlignmentStatus) -> Cell {
    let color = match status {
        AlignmentStatus::Mapped => Color::Green,
        AlignmentStatus::Missing => Color::Red,
        AlignmentStatus::Extension => Color::Blue,
    };
    Cell::new(status.as_str()).fg(color)
}

fn gbif_cell(gbif: Option<GbifStatus>) -> Cell {
    match gbif {
        Some(GbifStatus::Required) => Cell::new(GbifStatus::Required.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(GbifStatus::Recommended) => {
            Cell::new(GbifStatus::Recommended.as_str()).fg(Color::Yellow)
        }
        None => dim_cell(""),
    }
}

fn text_or_dash(text: &str) -> Cell {
    if text.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(text)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
