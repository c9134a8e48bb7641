use kiplan::{
    Error, TestPlanFilter,
    config::PlanConfig,
    suite::{Suite, SuiteTest},
};
use pretty_assertions::assert_eq;

mod login {
    #[test]
    fn accepts_valid_password() {}
    kiplan::case!("10", accepts_valid_password);

    #[test]
    fn rejects_wrong_password() {}
    kiplan::case!("abc", rejects_wrong_password);
}

#[test]
fn bad_marker_aborts_preparation() {
    let configured = vec![Suite {
        name: "default".into(),
        tests: vec![SuiteTest::default()],
    }];
    let config = PlanConfig::default()
        .with_target_package("bad_marker")
        .with_plan_env("10");

    let mut suites = configured.clone();
    let err = TestPlanFilter::from_config(config)
        .alter(&mut suites)
        .unwrap_err();

    match err {
        Error::InvalidCaseId {
            class_name,
            method_name,
            value,
            ..
        } => {
            assert_eq!(class_name, "bad_marker::login");
            assert_eq!(method_name, "rejects_wrong_password");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(suites, configured);
}
