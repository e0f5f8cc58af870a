use safeflow::{
    create_test_spawner, AlertKind, AlertStatus, Config, Dataset, Error, HtmlRenderer,
    SafeFlowLogic, Store, TestMvuRuntime,
};

use super::init_tracing;

fn mount(config: Config) -> (impl FnMut(), HtmlRenderer) {
    init_tracing();
    let html = HtmlRenderer::new().expect("templates compile");
    let runtime = TestMvuRuntime::new(
        Store::new(config.initial_state()),
        SafeFlowLogic::new(config),
        html.clone(),
        create_test_spawner(),
    );
    let mut driver = runtime.run();
    (move || driver.process_events(), html)
}

#[test]
fn given_landing_should_mount_both_role_buttons() {
    let (_process, html) = mount(Config::default());

    let markup = html.html();
    assert!(markup.contains(r#"id="btn-authority""#));
    assert!(markup.contains(r#"id="btn-public""#));
    assert!(!markup.contains("modal-overlay"));
}

#[test]
fn given_access_prompt_should_mount_password_input_and_both_buttons() {
    let (mut process, html) = mount(Config::default());

    html.click("btn-authority").unwrap();
    process();

    let markup = html.html();
    assert!(markup.contains(r#"type="password""#));
    assert!(markup.contains(r#"id="modal-input""#));
    assert!(markup.contains(r#"id="modal-cancel""#));
    assert!(markup.contains("Authority Access"));
}

#[test]
fn given_correct_code_submitted_should_mount_authority_dashboard() {
    let (mut process, html) = mount(Config::default());

    html.click("btn-authority").unwrap();
    process();
    html.submit("modal-confirm", "1212").unwrap();
    process();

    let markup = html.html();
    assert!(markup.contains("SafeFlow Command"));
    assert!(markup.contains("GRAND CITY MUSIC FESTIVAL"));
    assert!(markup.contains("12,450"));
    for gate in ["g1", "g2", "g3", "g4"] {
        assert!(markup.contains(&format!(r#"id="gate-{gate}""#)));
    }
    assert!(markup.contains("2 New"));
    assert!(!markup.contains("modal-overlay"));
}

#[test]
fn given_closed_gate_should_mount_closed_overlay() {
    let (mut process, html) = mount(Config::default());
    html.click("btn-authority").unwrap();
    process();
    html.submit("modal-confirm", "1212").unwrap();
    process();
    assert!(!html.html().contains(">CLOSED<"));

    html.click("gate-g1").unwrap();
    process();

    assert!(html.html().contains(">CLOSED<"));
}

#[test]
fn given_element_not_on_screen_when_clicked_should_fail() {
    let (_process, html) = mount(Config::default());

    let result = html.click("btn-logout");

    assert!(matches!(result, Err(Error::UnboundElement(id)) if id == "btn-logout"));
}

#[test]
fn given_markup_in_alert_text_should_escape_it() {
    let mut dataset = Dataset::seed();
    dataset.alerts[0].message = "<script>alert(1)</script>".into();
    let config = Config {
        dataset: Some(dataset),
        ..Config::default()
    };
    let (mut process, html) = mount(config);
    html.click("btn-authority").unwrap();
    process();
    html.submit("modal-confirm", "1212").unwrap();
    process();

    let markup = html.html();
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
}

#[test]
fn given_no_alerts_should_mount_empty_notice() {
    let mut dataset = Dataset::seed();
    dataset.alerts.clear();
    let config = Config {
        dataset: Some(dataset),
        ..Config::default()
    };
    let (mut process, html) = mount(config);
    html.click("btn-authority").unwrap();
    process();
    html.submit("modal-confirm", "1212").unwrap();
    process();

    assert!(html.html().contains("No active alerts"));
}

#[test]
fn given_same_seed_should_mount_identical_public_portal() {
    let (mut process, html) = mount(Config::default());
    html.click("btn-public").unwrap();
    process();
    let first = html.html();

    html.click("btn-logout").unwrap();
    process();
    html.click("btn-public").unwrap();
    process();

    assert_eq!(html.html(), first);
    assert_eq!(first.matches("hotspot absolute").count(), 3);
    assert_eq!(first.matches("/20 rounded-full blur-xl").count(), 3);
}

#[test]
fn given_authority_dashboard_should_mount_map_outline_and_heat_overlays() {
    let (mut process, html) = mount(Config::default());
    html.click("btn-authority").unwrap();
    process();
    html.submit("modal-confirm", "1212").unwrap();
    process();

    let markup = html.html();
    assert!(markup.contains("map-outline"));
    assert_eq!(markup.matches("heat-overlay").count(), 2);
    assert!(markup.contains("REAL-TIME VENUE MAP"));
}

#[test]
fn given_active_emergency_in_dataset_should_mount_public_banner() {
    let mut dataset = Dataset::seed();
    dataset.alerts[0].kind = AlertKind::Emergency;
    dataset.alerts[0].status = AlertStatus::Active;
    dataset.alerts[0].message = "Shelter in place".into();
    let config = Config {
        dataset: Some(dataset),
        ..Config::default()
    };
    let (mut process, html) = mount(config);
    html.click("btn-public").unwrap();
    process();

    let markup = html.html();
    assert!(markup.contains(r#"id="emergency-banner""#));
    assert!(markup.contains("Shelter in place"));
}

#[test]
fn given_mounted_screen_should_wrap_it_in_document_shell() {
    let (_process, html) = mount(Config::default());

    let document = html.document().unwrap();

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains(r#"<div id="app"><div class="flex flex-col"#));
}
