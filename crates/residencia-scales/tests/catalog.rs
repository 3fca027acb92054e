use residencia_scales::catalog::ScaleCatalog;
use residencia_scales::error::{CatalogError, ScaleError};
use residencia_scales::scoring::{
    InterpretationBand, ItemDefinition, ResponseOption, ResponseSet, ResponseValue,
    ScaleDefinition,
};
use residencia_scales::{get_scale, list_scales};

fn option(points: u32) -> ResponseOption {
    ResponseOption {
        value: ResponseValue::Points(points),
        description: format!("{points} puntos"),
    }
}

fn band(min_score: u32, max_score: Option<u32>, label: &str) -> InterpretationBand {
    InterpretationBand {
        min_score,
        max_score,
        label: label.to_string(),
    }
}

/// Two items scored 0–2, so the maximum total is 4.
fn two_item_scale(bands: Vec<InterpretationBand>) -> ScaleDefinition {
    ScaleDefinition {
        id: "TEST".to_string(),
        name: "Test".to_string(),
        description: None,
        items: vec![
            ItemDefinition {
                id: "a".to_string(),
                label: "A".to_string(),
                options: vec![option(0), option(1), option(2)],
            },
            ItemDefinition {
                id: "b".to_string(),
                label: "B".to_string(),
                options: vec![option(0), option(1), option(2)],
            },
        ],
        interpretation_bands: bands,
    }
}

#[test]
fn builtin_catalog_lists_every_scale() {
    assert_eq!(
        list_scales(),
        vec!["NIHSS", "GLASGOW", "MRS", "ASPECTS", "CHA2DS2-VASC", "HAS-BLED"]
    );
}

#[test]
fn builtin_scales_cover_every_score_exactly_once() {
    for scale in ScaleCatalog::builtin().iter() {
        scale.validate().unwrap();
        for total in 0..=scale.max_possible_score() {
            let matching = scale
                .interpretation_bands
                .iter()
                .filter(|b| b.contains(total))
                .count();
            assert_eq!(matching, 1, "{} score {total}", scale.id);
        }
    }
}

#[test]
fn builtin_items_keep_instrument_order() {
    let nihss = get_scale("NIHSS").unwrap();
    let ids: Vec<_> = nihss.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "loc",
            "loc-questions",
            "loc-commands",
            "gaze",
            "visual",
            "facial",
            "motor-left-arm",
            "motor-right-arm",
            "motor-left-leg",
            "motor-right-leg",
            "ataxia",
            "sensory",
            "language",
            "dysarthria",
            "extinction",
        ]
    );
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(get_scale("nihss").unwrap().id, "NIHSS");
    assert_eq!(get_scale("Has-Bled").unwrap().id, "HAS-BLED");
    assert_eq!(get_scale(" nihss\n").unwrap().id, "NIHSS");
}

#[test]
fn unknown_scale_is_not_found() {
    assert_eq!(
        get_scale("NOT_A_REAL_SCALE").unwrap_err(),
        ScaleError::NotFound("NOT_A_REAL_SCALE".to_string())
    );
}

#[test]
fn custom_catalog_scores_its_own_scales() {
    let catalog = ScaleCatalog::new(vec![two_item_scale(vec![
        band(0, Some(1), "bajo"),
        band(2, None, "alto"),
    ])])
    .unwrap();

    let responses: ResponseSet = [
        ("a".to_string(), ResponseValue::Points(2)),
        ("b".to_string(), ResponseValue::Points(1)),
    ]
    .into();
    let result = catalog.score("test", &responses).unwrap();
    assert_eq!(result.total_score, 3);
    assert_eq!(result.interpretation, "alto");
    assert_eq!(catalog.ids(), vec!["TEST"]);
}

#[test]
fn gap_between_bands_is_rejected() {
    let err = two_item_scale(vec![band(0, Some(1), "bajo"), band(3, None, "alto")])
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::BandGap {
            scale_id: "TEST".to_string(),
            from: 2,
            to: 2,
        }
    );
}

#[test]
fn bands_must_start_at_zero() {
    let err = two_item_scale(vec![band(1, None, "todo")]).validate().unwrap_err();
    assert!(matches!(err, CatalogError::BandGap { from: 0, to: 0, .. }));
}

#[test]
fn overlapping_bands_are_rejected() {
    let err = two_item_scale(vec![band(0, Some(2), "bajo"), band(2, None, "alto")])
        .validate()
        .unwrap_err();
    assert!(matches!(err, CatalogError::BandOverlap { score: 2, .. }));
}

#[test]
fn bands_must_reach_the_maximum_score() {
    let err = two_item_scale(vec![band(0, Some(1), "bajo"), band(2, Some(3), "medio")])
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::UncoveredMaximum {
            scale_id: "TEST".to_string(),
            covered_to: 3,
            max_possible: 4,
        }
    );
}

#[test]
fn open_band_must_be_last() {
    let err = two_item_scale(vec![band(0, None, "todo"), band(5, None, "más")])
        .validate()
        .unwrap_err();
    assert!(matches!(err, CatalogError::OpenBandNotLast { .. }));
}

#[test]
fn inverted_band_is_rejected() {
    let err = two_item_scale(vec![band(0, Some(1), "bajo"), band(2, Some(1), "roto")])
        .validate()
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvertedBand { .. }));
}

#[test]
fn item_without_scoreable_value_is_rejected() {
    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items[1].options = vec![ResponseOption {
        value: ResponseValue::Unscoreable,
        description: "No evaluable".to_string(),
    }];

    let err = scale.validate().unwrap_err();
    assert_eq!(
        err,
        CatalogError::NoScoreableValue {
            scale_id: "TEST".to_string(),
            item_id: "b".to_string(),
        }
    );
}

#[test]
fn duplicate_item_and_option_are_rejected() {
    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items[1].id = "a".to_string();
    assert!(matches!(
        scale.validate().unwrap_err(),
        CatalogError::DuplicateItem { .. }
    ));

    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items[0].options.push(option(1));
    assert!(matches!(
        scale.validate().unwrap_err(),
        CatalogError::DuplicateOption { value: ResponseValue::Points(1), .. }
    ));
}

#[test]
fn duplicate_scale_ids_are_rejected() {
    let scale = two_item_scale(vec![band(0, None, "todo")]);
    let mut lower = scale.clone();
    lower.id = "test".to_string();

    let err = ScaleCatalog::new(vec![scale, lower]).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateScale("test".to_string()));
}

#[test]
fn empty_scales_are_rejected() {
    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items.clear();
    assert_eq!(
        scale.validate().unwrap_err(),
        CatalogError::NoItems("TEST".to_string())
    );

    let scale = two_item_scale(Vec::new());
    assert_eq!(
        scale.validate().unwrap_err(),
        CatalogError::NoBands("TEST".to_string())
    );
}

#[test]
fn maximum_score_must_fit_in_u32() {
    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items[0].options.push(option(u32::MAX));
    scale.items[1].options.push(option(u32::MAX));

    assert_eq!(
        scale.validate().unwrap_err(),
        CatalogError::ScoreOverflow("TEST".to_string())
    );
    assert_eq!(
        ScaleCatalog::new(vec![scale]).unwrap_err(),
        CatalogError::ScoreOverflow("TEST".to_string())
    );

    let mut scale = two_item_scale(vec![band(0, None, "todo")]);
    scale.items[0].options.push(option(u32::MAX - 2));
    assert!(scale.validate().is_ok());
}
