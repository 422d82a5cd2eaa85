use rust_xlsxwriter::Workbook;

use enrichbar::{render_png, RenderConfig, SheetSelection};

// Dev harness: builds a small enrichment workbook in memory, renders the
// composite figure, and writes the PNG next to the crate. Plays the role
// of the interactive host during development.

struct Category {
    sheet: &'static str,
    label_column: &'static str,
    rows: &'static [(&'static str, f64, f64)],
}

const CATEGORIES: &[Category] = &[
    Category {
        sheet: "Cellular Component",
        label_column: "Term",
        rows: &[
            ("Cytoplasm", 48.0, 6.2),
            ("Nucleus", 35.0, 4.8),
            ("Mitochondrion", 21.0, 3.1),
            ("Plasma membrane", 17.0, 2.4),
            ("Extracellular exosome", 29.0, 5.5),
        ],
    },
    Category {
        sheet: "Biological Process",
        label_column: "Term",
        rows: &[
            ("Translation", 26.0, 7.9),
            ("Cell division", 14.0, 2.2),
            ("Apoptotic process", 19.0, 3.6),
            ("DNA repair", 11.0, 1.8),
        ],
    },
    Category {
        sheet: "Molecular Function",
        label_column: "Term",
        rows: &[
            ("Protein binding", 61.0, 8.4),
            ("ATP binding", 24.0, 3.9),
            ("RNA binding", 18.0, 5.1),
        ],
    },
    Category {
        sheet: "Reactome Pathways",
        label_column: "Pathway",
        rows: &[
            ("Metabolism of RNA", 22.0, 6.7),
            ("Cell cycle", 16.0, 2.9),
            ("Signal transduction", 12.0, 1.4),
            ("Immune system", 9.0, 0.9),
        ],
    },
];

fn build_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    for cat in CATEGORIES {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(cat.sheet).expect("valid sheet name");
        worksheet
            .write_string(0, 0, cat.label_column)
            .expect("write header");
        worksheet.write_string(0, 1, "Count").expect("write header");
        worksheet
            .write_string(0, 2, "-log10(P-Value)")
            .expect("write header");
        for (i, (label, count, metric)) in cat.rows.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, *label).expect("write label");
            worksheet.write_number(row, 1, *count).expect("write count");
            worksheet
                .write_number(row, 2, *metric)
                .expect("write metric");
        }
    }
    workbook.save_to_buffer().expect("serialize workbook")
}

fn main() {
    env_logger::init();

    // An optional JSON config path overrides the built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).expect("read config file");
            serde_json::from_str(&text).expect("parse config JSON")
        }
        None => RenderConfig::new(
            CATEGORIES
                .iter()
                .map(|cat| SheetSelection {
                    sheet: cat.sheet.to_string(),
                    label_column: cat.label_column.to_string(),
                    metric_column: "-log10(P-Value)".to_string(),
                    display_name: None,
                    rename_map: Default::default(),
                })
                .collect(),
        ),
    };

    let workbook = build_workbook();
    let png = render_png(&workbook, &config).expect("render figure");

    let output_path = "enrichment_panels.png";
    std::fs::write(output_path, &png).expect("write png");
    println!(
        "Wrote {} panels ({} bytes) to {output_path}",
        config.sheets.len(),
        png.len()
    );
}
