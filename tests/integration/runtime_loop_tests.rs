use core::future::Future;
use core::pin::Pin;
use std::thread;
use std::time::Duration;

use safeflow::{Config, HtmlRenderer, MvuRuntime, SafeFlowLogic, Store};

use super::init_tracing;

fn thread_spawner(future: Pin<Box<dyn Future<Output = ()> + Send>>) {
    thread::spawn(move || futures::executor::block_on(future));
}

/// Start the async loop on its own thread and return the host's view of the mount.
fn start_dashboard(config: Config) -> HtmlRenderer {
    init_tracing();
    let html = HtmlRenderer::new().expect("templates compile");
    let renderer = html.clone();
    thread::spawn(move || {
        let mut runtime = MvuRuntime::new(
            Store::new(config.initial_state()),
            SafeFlowLogic::new(config),
            renderer,
            thread_spawner,
        );
        futures::executor::block_on(runtime.run());
    });
    wait_for(&html, r#"id="btn-authority""#);
    html
}

fn wait_for(html: &HtmlRenderer, needle: &str) -> String {
    for _ in 0..500 {
        let markup = html.html();
        if markup.contains(needle) {
            return markup;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("`{needle}` never mounted, last markup:\n{}", html.html());
}

#[test]
fn given_running_loop_when_public_clicked_should_mount_attendee_portal() {
    let html = start_dashboard(Config::default());

    html.click("btn-public").unwrap();

    let markup = wait_for(&html, "Attendee Portal");
    assert!(markup.contains(r#"id="btn-sos""#));
}

#[test]
fn given_running_loop_when_broadcast_confirmed_should_mount_new_alert() {
    let html = start_dashboard(Config::default());

    html.click("btn-authority").unwrap();
    wait_for(&html, "Authority Access");
    html.submit("modal-confirm", "1212").unwrap();
    wait_for(&html, "SafeFlow Command");
    html.click("btn-emergency").unwrap();
    wait_for(&html, "CONFIRM EMERGENCY BROADCAST");
    html.click("modal-confirm").unwrap();

    let markup = wait_for(&html, "ALL ZONES");
    assert!(markup.contains("3 New"));
    assert!(markup.contains("EMERGENCY EVACUATION ORDER"));
}
