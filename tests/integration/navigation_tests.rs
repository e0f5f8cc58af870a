use safeflow::{Config, Modal, PageView, Role};

use super::{authority_view, build_dashboard_test};

#[test]
fn given_no_role_should_render_landing_once() {
    let test = build_dashboard_test().build();

    assert_eq!(test.renders.count(), 1);
    assert_eq!(test.page(), PageView::Landing);
    assert_eq!(test.modal_title(), None);
}

#[test]
fn given_landing_when_public_clicked_should_render_public_portal() {
    let mut test = build_dashboard_test().build();

    test.click("btn-public");

    assert_eq!(test.renders.count(), 2);
    assert!(matches!(test.page(), PageView::Public(_)));
    assert_eq!(test.state().user_role, Some(Role::Public));
}

#[test]
fn given_any_role_when_logout_clicked_should_render_landing() {
    for role in [Role::Authority, Role::Public] {
        let mut test = build_dashboard_test().given_role(role).build();

        test.click("btn-logout");

        assert_eq!(test.page(), PageView::Landing);
        assert_eq!(test.state().user_role, None);
    }
}

#[test]
fn given_landing_when_authority_clicked_should_prompt_for_access_code() {
    let mut test = build_dashboard_test().build();

    test.click("btn-authority");

    assert_eq!(test.page(), PageView::Landing);
    assert_eq!(test.state().modal, Some(Modal::AccessPrompt));
    assert_eq!(test.modal_title(), Some("Authority Access"));
}

#[test]
fn given_access_prompt_when_wrong_code_submitted_should_deny_and_stay_on_landing() {
    let mut test = build_dashboard_test().build();
    test.click("btn-authority");

    test.submit("modal-confirm", "0000");

    assert_eq!(test.page(), PageView::Landing);
    assert_eq!(test.state().modal, Some(Modal::AccessDenied));

    test.click("modal-confirm");

    assert_eq!(test.state().modal, None);
    assert_eq!(test.page(), PageView::Landing);
}

#[test]
fn given_access_prompt_when_correct_code_submitted_should_render_authority_dashboard() {
    let mut test = build_dashboard_test().build();
    test.click("btn-authority");

    test.submit("modal-confirm", "1212");

    let view = authority_view(test.page());
    assert_eq!(view.event_name, "GRAND CITY MUSIC FESTIVAL");
    assert_eq!(test.modal_title(), None);
    assert_eq!(test.state().user_role, Some(Role::Authority));
}

#[test]
fn given_access_prompt_when_cancelled_should_close_dialog() {
    let mut test = build_dashboard_test().build();
    test.click("btn-authority");

    test.click("modal-cancel");

    assert_eq!(test.state().modal, None);
    assert_eq!(test.state().user_role, None);
}

#[test]
fn given_configured_access_code_should_accept_only_that_code() {
    let config = Config {
        access_code: "open-sesame".into(),
        ..Config::default()
    };
    let mut test = build_dashboard_test().given_config(config).build();

    test.click("btn-authority");
    test.submit("modal-confirm", "1212");
    assert_eq!(test.state().modal, Some(Modal::AccessDenied));

    test.click("modal-confirm");
    test.click("btn-authority");
    test.submit("modal-confirm", "open-sesame");
    assert_eq!(test.state().user_role, Some(Role::Authority));
}

#[test]
fn given_each_action_should_render_exactly_once_more() {
    let mut test = build_dashboard_test().build();

    test.click("btn-authority");
    test.click("modal-cancel");
    test.click("btn-public");

    assert_eq!(test.renders.count(), 4);
}

#[test]
fn given_each_page_should_bind_only_its_own_controls() {
    let test = build_dashboard_test().build();
    assert!(test.is_bound("btn-authority"));
    assert!(test.is_bound("btn-public"));
    assert!(!test.is_bound("btn-logout"));

    let test = build_dashboard_test().given_role(Role::Authority).build();
    for id in ["btn-logout", "btn-emergency", "gate-g1", "gate-g4"] {
        assert!(test.is_bound(id), "`{id}` should be bound");
    }
    assert!(!test.is_bound("btn-sos"));
    assert!(!test.is_bound("modal-confirm"));

    let test = build_dashboard_test().given_role(Role::Public).build();
    assert!(test.is_bound("btn-sos"));
    assert!(!test.is_bound("btn-emergency"));
}
