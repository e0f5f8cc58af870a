use core::future::Future;
use core::pin::Pin;

use chrono::{DateTime, Local, TimeZone};
use safeflow::{
    create_test_spawner, Clock, Config, DashboardState, PageView, Role, SafeFlowLogic, Screen,
    Store, TestMvuDriver, TestMvuRuntime, TestRenderer,
};

mockall::mock! {
    pub Clock {}

    impl Clock for Clock {
        fn now(&self) -> DateTime<Local>;
    }
}

pub(crate) type TestSpawner = fn(Pin<Box<dyn Future<Output = ()> + Send>>);

pub(crate) type DashboardDriver =
    TestMvuDriver<Screen, SafeFlowLogic<MockClock>, TestRenderer<Screen>, TestSpawner>;

pub(crate) fn broadcast_time() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 12, 25, 15, 7, 0)
        .single()
        .expect("unambiguous local time")
}

pub(crate) fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub(crate) struct DashboardTest {
    pub(crate) driver: DashboardDriver,
    pub(crate) renders: TestRenderer<Screen>,
}

impl DashboardTest {
    /// Click an element on the most recent screen and process the result.
    pub(crate) fn click(&mut self, element_id: &str) {
        let bound = self.renders.with_latest(|screen| screen.click(element_id));
        assert!(bound, "`{element_id}` is not bound on the current screen");
        self.driver.process_events();
    }

    pub(crate) fn submit(&mut self, element_id: &str, value: &str) {
        let bound = self
            .renders
            .with_latest(|screen| screen.submit(element_id, value));
        assert!(bound, "`{element_id}` is not bound on the current screen");
        self.driver.process_events();
    }

    pub(crate) fn is_bound(&self, element_id: &str) -> bool {
        self.renders.with_latest(|screen| screen.is_bound(element_id))
    }

    pub(crate) fn page(&self) -> PageView {
        self.renders.with_latest(|screen| screen.page.clone())
    }

    pub(crate) fn modal_title(&self) -> Option<&'static str> {
        self.renders
            .with_latest(|screen| screen.modal.as_ref().map(|modal| modal.title))
    }

    pub(crate) fn state(&self) -> &DashboardState {
        self.driver.state()
    }
}

pub(crate) struct DashboardTestBuilder {
    config: Config,
    role: Option<Role>,
    clock_reads: Option<usize>,
}

pub(crate) fn build_dashboard_test() -> DashboardTestBuilder {
    DashboardTestBuilder {
        config: Config::default(),
        role: None,
        clock_reads: None,
    }
}

impl DashboardTestBuilder {
    pub(crate) fn given_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub(crate) fn given_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Fail the test unless the clock is read exactly `times` times.
    pub(crate) fn given_clock_read_times(mut self, times: usize) -> Self {
        self.clock_reads = Some(times);
        self
    }

    pub(crate) fn build(self) -> DashboardTest {
        init_tracing();

        let mut clock = MockClock::new();
        let expectation = clock.expect_now();
        if let Some(times) = self.clock_reads {
            expectation.times(times);
        }
        expectation.return_const(broadcast_time());

        let mut state = self.config.initial_state();
        state.user_role = self.role;

        let renders = TestRenderer::new();
        let runtime = TestMvuRuntime::new(
            Store::new(state),
            SafeFlowLogic::with_clock(self.config, clock),
            renders.clone(),
            create_test_spawner(),
        );

        DashboardTest {
            driver: runtime.run(),
            renders,
        }
    }
}

pub(crate) fn authority_view(page: PageView) -> safeflow::view::AuthorityView {
    match page {
        PageView::Authority(view) => view,
        other => panic!("expected the authority dashboard, got {other:?}"),
    }
}

pub(crate) fn public_view(page: PageView) -> safeflow::view::PublicView {
    match page {
        PageView::Public(view) => view,
        other => panic!("expected the public portal, got {other:?}"),
    }
}
