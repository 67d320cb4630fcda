use std::io::Write;

use larder::{
    CatalogConfig, CatalogError, CatalogProvider, ConfigLoadError, Difficulty, Engine,
    GenerationRequest, JsonFileCatalog, LarderConfig, MatchError, MatchRequest, PipelineError,
    Recipe, admit, admit_generated, recommend,
};
use tempfile::NamedTempFile;

fn catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write catalog");
    file
}

#[test]
fn empty_query_is_reported_before_any_work() {
    let err = Engine::default()
        .query(&[], &MatchRequest::new(["", "   "]))
        .unwrap_err();
    assert_eq!(err, MatchError::EmptyQuery);
    assert_eq!(err.to_string(), "query has no ingredients");
}

#[test]
fn invalid_constraints_carry_a_reason() {
    let engine = Engine::default();
    let cases = [
        (MatchRequest::new(["rice"]).with_difficulty("expert"), "expert"),
        (MatchRequest::new(["rice"]).with_max_duration(-1), "max_duration_minutes"),
        (MatchRequest::new(["rice"]).with_restriction("carnivore"), "carnivore"),
    ];
    for (request, needle) in cases {
        match engine.query(&[], &request) {
            Err(MatchError::InvalidConstraint(reason)) => {
                assert!(reason.contains(needle), "{reason:?} should mention {needle}")
            }
            other => panic!("expected InvalidConstraint, got {other:?}"),
        }
    }
}

#[test]
fn malformed_catalog_json_is_a_data_error() {
    let file = catalog_file("{ not json ]");
    let err = JsonFileCatalog::new(file.path(), CatalogConfig::default())
        .snapshot()
        .unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert!(err.is_data_error());
}

#[test]
fn catalog_with_tokenless_recipe_is_rejected() {
    let file = catalog_file(
        r#"[{"id":"air","title":"Air","difficulty":"Easy","prep_time_minutes":1,"primary_ingredients":[" ",""]}]"#,
    );
    let err = JsonFileCatalog::new(file.path(), CatalogConfig::default())
        .snapshot()
        .unwrap_err();
    assert!(matches!(err, CatalogError::EmptyRequiredTokens(id) if id == "air"));
}

#[test]
fn catalog_errors_surface_through_recommend() {
    let file = catalog_file(
        r#"[
            {"id":"a","title":"A","difficulty":"Easy","prep_time_minutes":5,"primary_ingredients":["rice"]},
            {"id":"a","title":"A again","difficulty":"Easy","prep_time_minutes":5,"primary_ingredients":["rice"]}
        ]"#,
    );
    let provider = JsonFileCatalog::new(file.path(), CatalogConfig::default());
    let err = recommend(&provider, &Engine::default(), &MatchRequest::new(["rice"])).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Catalog(CatalogError::DuplicateId(ref id)) if id == "a"
    ));
    assert!(err.to_string().contains("duplicate recipe id"));
}

#[test]
fn out_of_scale_rating_is_rejected() {
    let recipe = Recipe::new("r", ["rice"], Difficulty::Easy, 10, Some(7.5)).with_title("R");
    let err = admit(recipe, &CatalogConfig::default()).unwrap_err();
    match err {
        CatalogError::InvalidRecipe { id, reason } => {
            assert_eq!(id, "r");
            assert!(reason.contains("quality_score"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_difficulty_in_catalog_fails_to_parse() {
    let file = catalog_file(
        r#"[{"id":"x","title":"X","difficulty":"Legendary","prep_time_minutes":5,"primary_ingredients":["rice"]}]"#,
    );
    let err = JsonFileCatalog::new(file.path(), CatalogConfig::default())
        .snapshot()
        .unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn generation_failures() {
    let cfg = CatalogConfig::default();
    assert!(matches!(
        admit_generated(&GenerationRequest::new(Vec::<String>::new()), "{}", &cfg),
        Err(CatalogError::EmptyGenerationRequest)
    ));

    let err = admit_generated(
        &GenerationRequest::new(["rice"]),
        r#"{"error": "Failed to generate recipe"}"#,
        &cfg,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::GenerationFailed(ref msg) if msg == "Failed to generate recipe"));
}

#[test]
fn config_errors() {
    assert!(matches!(
        LarderConfig::from_yaml("version: \"0.9\"\n"),
        Err(ConfigLoadError::UnsupportedVersion(_))
    ));
    assert!(matches!(
        LarderConfig::from_yaml("version: [unclosed\n"),
        Err(ConfigLoadError::YamlParse(_))
    ));
    assert!(matches!(
        LarderConfig::from_yaml("version: \"1\"\nlogging:\n  level: \"\"\n"),
        Err(ConfigLoadError::Validation(_))
    ));
}
