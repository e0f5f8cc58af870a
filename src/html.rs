//! HTML rendering of screens into a host-side mount.

use minijinja::{context, Environment};
use portable_atomic_util::Arc;
use spin::Mutex;
use tracing::{error, trace};

use crate::error::{Error, Result};
use crate::{Renderer, Screen};

const TEMPLATES: [(&str, &str); 5] = [
    ("shell.html", include_str!("../templates/shell.html")),
    ("landing.html", include_str!("../templates/landing.html")),
    ("authority.html", include_str!("../templates/authority.html")),
    ("public.html", include_str!("../templates/public.html")),
    ("modal.html", include_str!("../templates/modal.html")),
];

/// What the host currently displays: the markup inside `<div id="app">` and
/// the screen whose handlers that markup is wired to.
#[derive(Default)]
struct Mount {
    html: String,
    screen: Option<Screen>,
}

/// Renders [`Screen`]s to HTML and keeps the element handlers so a host can
/// forward clicks.
///
/// Clones share one mount: hand a clone to the runtime and keep another to
/// read markup and deliver input.
#[derive(Clone)]
pub struct HtmlRenderer {
    env: Arc<Environment<'static>>,
    mount: Arc<Mutex<Mount>>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(HtmlRenderer {
            env: Arc::new(env),
            mount: Arc::new(Mutex::new(Mount::default())),
        })
    }

    /// Markup for one screen: the page followed by its dialog, if any.
    pub fn render_screen(&self, screen: &Screen) -> Result<String> {
        let mut html = self
            .env
            .get_template(screen.page.template_name())?
            .render(context! { page => &screen.page })?;
        if let Some(modal) = &screen.modal {
            html.push_str(
                &self
                    .env
                    .get_template("modal.html")?
                    .render(context! { modal => modal })?,
            );
        }
        Ok(html)
    }

    /// Current contents of the mount point.
    pub fn html(&self) -> String {
        self.mount.lock().html.clone()
    }

    /// A standalone page wrapping the current mount contents.
    pub fn document(&self) -> Result<String> {
        let app = self.html();
        Ok(self
            .env
            .get_template("shell.html")?
            .render(context! { app => app })?)
    }

    /// Deliver a click to the element with this id.
    pub fn click(&self, element_id: &str) -> Result<()> {
        let mount = self.mount.lock();
        let bound = mount
            .screen
            .as_ref()
            .is_some_and(|screen| screen.click(element_id));
        if bound {
            Ok(())
        } else {
            Err(Error::UnboundElement(element_id.to_string()))
        }
    }

    /// Submit a value through the element with this id, as when confirming a
    /// dialog with text in its input field.
    pub fn submit(&self, element_id: &str, value: &str) -> Result<()> {
        let mount = self.mount.lock();
        let bound = mount
            .screen
            .as_ref()
            .is_some_and(|screen| screen.submit(element_id, value));
        if bound {
            Ok(())
        } else {
            Err(Error::UnboundElement(element_id.to_string()))
        }
    }
}

impl Renderer<Screen> for HtmlRenderer {
    fn render(&mut self, screen: Screen) {
        match self.render_screen(&screen) {
            Ok(html) => {
                trace!(
                    template = screen.page.template_name(),
                    bytes = html.len(),
                    "mounted screen"
                );
                let mut mount = self.mount.lock();
                mount.html = html;
                mount.screen = Some(screen);
            }
            Err(err) => error!(%err, "failed to render screen, keeping previous markup"),
        }
    }
}
