use pretty_assertions::assert_eq;
use strata::{
    stmt::{self, Expr, OrderByExpr},
    FeatureClass, Record,
};
use tests::{ottawa_opened, Airport, ProtectedArea, Sample};

fn sorted_names(airports: &FeatureClass<Airport>) -> Vec<String> {
    let mut names: Vec<_> = airports
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.name)
        .collect();
    names.sort();
    names
}

fn filtered(airports: &FeatureClass<Airport>, expr: Expr<bool>) -> Vec<String> {
    sorted_names(&airports.filter(expr).unwrap())
}

#[test]
fn compare_with_constant() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    assert_eq!(
        filtered(&airports, fields.elevation().gt(100)),
        ["Brandon", "Gander", "Ottawa"]
    );
    assert_eq!(
        filtered(&airports, fields.elevation().le(59)),
        ["Abbotsford", "Alert", "Iqaluit"]
    );
    assert_eq!(filtered(&airports, fields.name().eq("Gander")), ["Gander"]);
}

#[test]
fn constant_on_the_left() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let expr = stmt::lit(Some(100)).lt(Airport::fields().elevation());
    assert_eq!(filtered(&airports, expr), ["Brandon", "Gander", "Ottawa"]);

    let min = Some(150);
    let expr = stmt::captured("min", &min).le(Airport::fields().elevation());
    assert_eq!(filtered(&airports, expr), ["Brandon", "Gander"]);
}

#[test]
fn null_comparisons() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    assert_eq!(
        filtered(&airports, fields.class().is_none()),
        ["Alert", "Bagotville"]
    );
    assert_eq!(
        filtered(&airports, fields.class().eq(None::<String>)),
        ["Alert", "Bagotville"]
    );
    assert_eq!(filtered(&airports, fields.class().is_some()).len(), 5);

    // Rows with a null class never satisfy an inequality.
    assert_eq!(
        filtered(&airports, fields.class().ne("Major")),
        ["Abbotsford", "Brandon", "Iqaluit"]
    );

    let err = airports
        .filter(fields.elevation().gt(None::<i32>))
        .unwrap_err();
    assert!(err.is_unsupported_expression(), "{err}");
}

#[test]
fn like_patterns() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    assert_eq!(
        filtered(&airports, fields.name().starts_with("B")),
        ["Bagotville", "Brandon"]
    );
    assert_eq!(
        filtered(&airports, fields.name().ends_with("t")),
        ["Alert", "Iqaluit"]
    );
    assert_eq!(
        filtered(&airports, fields.name().contains("an")),
        ["Brandon", "Gander"]
    );
}

#[test]
fn contains_on_a_polygon_layer() {
    let sample = Sample::new();
    let areas = sample
        .connect()
        .open::<ProtectedArea>("prot_areas_p")
        .unwrap();

    let mut names: Vec<_> = areas
        .filter(ProtectedArea::fields().name().contains("Ice"))
        .unwrap()
        .all()
        .unwrap()
        .into_iter()
        .filter_map(|area| area.name)
        .collect();
    names.sort();

    assert_eq!(names, ["Columbia Icefield", "Ice Age Trail Reserve"]);
}

#[test]
fn boolean_connectives() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    let expr = fields
        .class()
        .eq("Major")
        .or(fields.name().starts_with("A"));
    assert_eq!(
        filtered(&airports, expr),
        ["Abbotsford", "Alert", "Gander", "Ottawa"]
    );

    let expr = !fields.name().starts_with("A");
    assert_eq!(filtered(&airports, expr).len(), 5);

    let expr = Expr::and_all([
        fields.elevation().gt(40),
        fields.elevation().lt(200),
        fields.class().is_some(),
    ]);
    assert_eq!(filtered(&airports, expr), ["Abbotsford", "Gander", "Ottawa"]);

    let expr = Expr::or_any([fields.name().eq("Alert"), fields.name().eq("Brandon")]);
    assert_eq!(filtered(&airports, expr), ["Alert", "Brandon"]);
}

#[test]
fn filters_accumulate() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    let narrowed = airports
        .filter(fields.class().eq("Regional"))
        .unwrap()
        .filter(fields.elevation().gt(40))
        .unwrap();

    assert_eq!(narrowed.query_descriptor().where_clauses().len(), 2);
    assert_eq!(sorted_names(&narrowed), ["Abbotsford"]);

    let raw = airports.filter_by("name_e LIKE 'I%'").filter_by("Elevation < 100");
    assert_eq!(sorted_names(&raw), ["Iqaluit"]);
}

#[test]
fn timestamps() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let opened = airports
        .filter(Airport::fields().opened().eq(ottawa_opened()))
        .unwrap()
        .all()
        .unwrap();

    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].name, "Ottawa");
    assert_eq!(opened[0].opened, Some(ottawa_opened()));
}

#[test]
fn unsupported_expressions() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let fields = Airport::fields();

    let err = airports
        .filter(fields.class().in_list(["Local", "Regional"]))
        .unwrap_err();
    assert!(err.is_unsupported_expression(), "{err}");

    let err = airports
        .filter(stmt::lit(Some(1)).add(fields.elevation()).gt(100))
        .unwrap_err();
    assert!(err.is_unsupported_expression(), "{err}");

    let err = airports
        .filter(stmt::lit(Some(500)).sub(fields.elevation()).lt(0))
        .unwrap_err();
    assert_eq!(err.to_string(), "operator '-' is not supported");

    let err = airports
        .order_by(OrderByExpr::asc(stmt::lit(1)))
        .unwrap_err();
    assert!(err.is_unsupported_expression(), "{err}");
}

#[test]
fn invalid_raw_predicate() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    // Raw predicates are only checked by the store.
    let broken = airports.filter_by("runway_count > 2");
    let err = broken.query().err().unwrap();
    assert!(err.to_string().contains("runway_count"), "{err}");
}

#[test]
fn fields_of_unmapped_records_are_rejected() {
    #[derive(Debug, Default, Record)]
    struct Runway {
        length: Option<i32>,
    }

    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let err = airports.filter(Runway::fields().length().gt(1000)).unwrap_err();
    assert!(err.is_schema_mismatch(), "{err}");
}
