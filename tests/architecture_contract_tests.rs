//! Architecture contract tests.

mod support;

use support::architecture::{find_non_test_lines_containing, path_exists};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_non_test_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "good_lp",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_do_not_depend_on_adapters() {
    let hits = find_non_test_lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "good_lp", "reqwest::"],
    );

    assert!(
        hits.is_empty(),
        "ports should depend only on domain: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_non_test_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "good_lp", "reqwest::"],
    );

    assert!(
        hits.is_empty(),
        "application layer should reach solvers and squads through ports: {hits:#?}"
    );
}

#[test]
fn config_depends_only_on_domain_types() {
    let hits = find_non_test_lines_containing(
        "src/infrastructure/config",
        &["crate::application", "crate::adapter"],
    );

    assert!(
        hits.is_empty(),
        "config sections should use domain types only: {hits:#?}"
    );
}

#[test]
fn solver_backend_lives_in_outbound_adapter() {
    assert!(path_exists("src/port/outbound/solver.rs"));
    assert!(path_exists("src/adapter/outbound/solver/highs.rs"));

    let hits = find_non_test_lines_containing("src", &["good_lp::"]);
    assert!(
        hits.iter()
            .all(|(path, _, _)| path == "src/adapter/outbound/solver/highs.rs"),
        "good_lp should only be used by the HiGHS adapter: {hits:#?}"
    );
}
