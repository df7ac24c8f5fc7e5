//! End-to-end extraction scenarios on hand-built acta headers.
//!
//! Text and word sets are supplied separately, as an external provider
//! would deliver them.

use actas_oxide::extractors::format_grade_section;
use actas_oxide::layout::{split_run, PositionedWord};
use actas_oxide::naming::derive_filename;
use actas_oxide::{
    ActaParser, ExtractionConfig, InstitutionDirectory, Level, PageContent, RawPage,
};

fn word(text: &str, top: f32, bottom: f32, x0: f32, x1: f32) -> PositionedWord {
    PositionedWord::new(text, top, bottom, x0, x1)
}

fn parse(text: &str, words: Vec<PositionedWord>) -> actas_oxide::Result<actas_oxide::ActaMetadata> {
    ActaParser::default().parse_page(&PageContent::new(text, words), "test.pdf")
}

fn section_of(grade_section: &str) -> &str {
    grade_section.rsplit(' ').next().unwrap()
}

#[test]
fn test_unica_right_of_section_label() {
    let text = "MINISTERIO DE EDUCACION\n\
                Datos de la Institución Educativa o Programa Educativo\n\
                Número y/o Nombre 71009\n\
                Código Modular - Anexo 1154814 - 0\n\
                Nivel PRIMARIA\n\
                Sección(8) UNICA";
    let words = vec![
        word("Sección(8)", 100.0, 110.0, 50.0, 100.0),
        word("UNICA", 100.0, 110.0, 120.0, 160.0),
    ];
    let record = parse(text, words).unwrap();
    assert_eq!(section_of(&record.grade_section), "U");
    assert_eq!(record.institution_name, "71009");
    assert_eq!(record.modular_code, "1154814");
}

#[test]
fn test_numeric_institution_name_from_text_only() {
    let text = "MINISTERIO DE EDUCACION\nNúmero y/o Nombre 71009\nNivel PRIMARIA";
    let record = parse(text, Vec::new()).unwrap();
    assert_eq!(record.institution_name, "71009");
}

#[test]
fn test_accented_unica() {
    let text = "Sección(8) ÚNICA\nNivel SECUNDARIA";
    let words = vec![
        word("Sección(8)", 100.0, 110.0, 50.0, 100.0),
        word("ÚNICA", 100.0, 110.0, 120.0, 160.0),
    ];
    let record = parse(text, words).unwrap();
    assert_eq!(record.grade_section, "1ro U");
}

#[test]
fn test_known_institution_from_directory() {
    let directory = InstitutionDirectory::from_json_file(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/institutions.json"),
    )
    .unwrap();
    let parser = ActaParser::new(ExtractionConfig::new().with_institutions(directory));

    let text = "Número y/o Nombre FE Y ALEGRIA 27 SANTA LUCIA\nSección B\nNivel SECUNDARIA";
    let words = vec![
        word("Sección", 100.0, 110.0, 50.0, 90.0),
        word("B", 100.0, 110.0, 110.0, 120.0),
    ];
    let record = parser
        .parse_page(&PageContent::new(text, words), "test.pdf")
        .unwrap();
    assert_eq!(record.institution_name, "27 SANTA LUCIA FE Y ALEGRIA");
    assert_eq!(record.grade_section, "1ro B");
}

#[test]
fn test_missing_level_builds_no_record() {
    let text = "Número y/o Nombre 71009\nGrado 5 Sección B";
    let err = parse(text, Vec::new()).unwrap_err();
    assert!(err.is_parsing());
    assert_eq!(err.to_string(), "Level not detected");
}

#[test]
fn test_grade_five_secondary_section_b() {
    let text = "Nivel SECUNDARIA\nGrado 5 Sección: B";
    let record = parse(text, Vec::new()).unwrap();
    assert_eq!(record.level, Level::Secundaria);
    assert_eq!(record.grade_section, "5to B");
    assert_eq!(format_grade_section(Level::Secundaria, "5", "B"), "5to B");
}

#[test]
fn test_distractor_left_of_section_label() {
    let text = "Gestión P Sección(8) UNICA\nNivel PRIMARIA";
    let words = vec![
        word("Gestión", 100.0, 110.0, 10.0, 40.0),
        word("P", 100.0, 110.0, 45.0, 55.0),
        word("Sección(8)", 100.0, 110.0, 60.0, 110.0),
        word("UNICA", 100.0, 110.0, 120.0, 160.0),
    ];
    let record = parse(text, words).unwrap();
    assert_eq!(section_of(&record.grade_section), "U");
    assert_eq!(record.institution_name, "IE DESCONOCIDA");
}

#[test]
fn test_distractor_between_label_and_value() {
    // "P" sits closest to the label and is rejected by every tier.
    let text = "Sección(8) P UNICA\nNivel PRIMARIA";
    let words = vec![
        word("Sección(8)", 100.0, 110.0, 60.0, 110.0),
        word("P", 100.0, 110.0, 115.0, 120.0),
        word("UNICA", 100.0, 110.0, 130.0, 170.0),
    ];
    let record = parse(text, words).unwrap();
    assert_eq!(section_of(&record.grade_section), "U");
}

#[test]
fn test_layout_interference_between_rows() {
    // Row 1: Grado(5) 1 Turno(9) M / Row 2: Gestión(4) P Sección(8) UNICA
    let text = "Grado(5) 1 Turno(9) M\nGestión(4) P Sección(8) UNICA\nNivel PRIMARIA";
    let words = vec![
        word("Grado(5)", 50.0, 60.0, 100.0, 140.0),
        word("1", 50.0, 60.0, 150.0, 160.0),
        word("Turno(9)", 50.0, 60.0, 180.0, 220.0),
        word("M", 50.0, 60.0, 230.0, 240.0),
        word("Gestión(4)", 65.0, 75.0, 50.0, 90.0),
        word("P", 65.0, 75.0, 100.0, 110.0),
        word("Sección(8)", 65.0, 75.0, 120.0, 170.0),
        word("UNICA", 65.0, 75.0, 180.0, 220.0),
    ];
    let record = parse(text, words).unwrap();
    assert_eq!(record.grade_section, "1ro U");
    assert_eq!(record.institution_name, "IE DESCONOCIDA");
}

#[test]
fn test_initial_level_label_and_filename() {
    let text = "2023\nNivel INICIAL\nGrado(5) 3 Sección(8) Única\nACTA DE RECUPERACIÓN";
    let record = parse(text, Vec::new()).unwrap();
    assert_eq!(record.grade_section, "3a U");
    assert!(record.is_recovery);
    assert_eq!(
        derive_filename(&record),
        "2023 - 0000000 - IE DESCONOCIDA - 3a U REC.pdf"
    );
}

#[test]
fn test_level_detection_per_keyword() {
    for (keyword, level) in [
        ("INICIAL", Level::Inicial),
        ("PRIMARIA", Level::Primaria),
        ("SECUNDARIA", Level::Secundaria),
    ] {
        let record = parse(&format!("Nivel: {}", keyword.to_lowercase()), Vec::new()).unwrap();
        assert_eq!(record.level, level);
    }
}

#[test]
fn test_multi_word_runs_are_split_before_location() {
    // Providers report each header cell as one run.
    let mut words = split_run("Nivel PRIMARIA", 50.0, 190.0, 20.0, 30.0);
    words.extend(split_run("Grado(5) 3 Sección(8) B", 50.0, 280.0, 60.0, 70.0));
    words.extend(split_run("Turno(9) M", 300.0, 400.0, 60.0, 70.0));

    let parser = ActaParser::default();
    let page = PageContent::from_raw(RawPage::new(792.0, words), parser.config());
    let record = parser.parse_page(&page, "scan.pdf").unwrap();
    assert_eq!(record.grade_section, "3ro B");
}
