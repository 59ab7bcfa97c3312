//! Validates the embedded WGSL shaders with naga, without touching a GPU.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use thefirstone::shader::{ShaderSet, Stage};

fn parse_and_validate(source: &str) -> naga::Module {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("WGSL parse error: {}", e.emit_to_string(source)));

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {}", e));

    module
}

#[test]
fn combined_module_has_both_entry_points() {
    let module = parse_and_validate(&ShaderSet::default().module_source());

    let vertex = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "vs_main")
        .expect("vertex entry point missing");
    assert_eq!(vertex.stage, naga::ShaderStage::Vertex);

    let fragment = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "fs_main")
        .expect("fragment entry point missing");
    assert_eq!(fragment.stage, naga::ShaderStage::Fragment);
}

#[test]
fn each_stage_validates_standalone() {
    let set = ShaderSet::default();
    parse_and_validate(set.source(Stage::Vertex));
    parse_and_validate(set.source(Stage::Fragment));
}

#[test]
fn build_report_is_clean_for_embedded_sources() {
    let report = ShaderSet::default().build();
    assert!(report.all_ok(), "embedded shaders must build cleanly");
}
