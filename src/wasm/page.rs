//! DOM construction for the portfolio page.
//!
//! [`App`] renders the static [`crate::content`] tables into markup under
//! the `#app` root, starts the wave background behind it, and owns every
//! event closure (nav dots, theme toggle, section observer) so unmounting
//! releases them all.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use super::render::WaveBackground;
use crate::content;
use crate::theme::Theme;

type ObserverClosure = Closure<dyn FnMut(js_sys::Array)>;

pub struct App {
    background: WaveBackground,
    dark: Rc<Cell<bool>>,
    root: Element,
    dots: Vec<(Element, Closure<dyn FnMut()>)>,
    toggle: Option<(Element, Closure<dyn FnMut()>)>,
    observer: Option<(IntersectionObserver, ObserverClosure)>,
}

impl App {
    /// Build the whole page under `#app` (created if absent) and start the
    /// background animation. The page starts in dark mode, matching the
    /// canvas default.
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let dark = Rc::new(Cell::new(true));
        set_root_mode(document, true);

        let background = WaveBackground::start(document, dark.clone())?;

        let root = match document.get_element_by_id("app") {
            Some(root) => root,
            None => {
                let root = document.create_element("div")?;
                root.set_id("app");
                document.body().ok_or("no body")?.append_child(&root)?;
                root
            }
        };
        // Remount replaces any previous content.
        root.set_inner_html("");

        let mut app = Self {
            background,
            dark,
            root,
            dots: Vec::new(),
            toggle: None,
            observer: None,
        };

        let nav = app.build_nav(document)?;
        app.root.append_child(&nav)?;

        let main = el(document, "main", "page")?;
        let sections = [
            hero_section(document)?,
            work_section(document)?,
            projects_section(document)?,
            connect_section(document)?,
        ];
        for section in &sections {
            main.append_child(section)?;
        }
        main.append_child(&app.build_footer(document)?)?;
        app.root.append_child(&main)?;

        app.observe_sections(&sections)?;
        Ok(app)
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn background(&self) -> &WaveBackground {
        &self.background
    }

    /// Tear the page down: stop the animation, disconnect the observer,
    /// release every listener and clear the root.
    pub fn unmount(mut self) {
        self.background.stop();
        if let Some((observer, _)) = self.observer.take() {
            observer.disconnect();
        }
        if let Some((button, cb)) = self.toggle.take() {
            let _ = button.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
        for (dot, cb) in self.dots.drain(..) {
            let _ = dot.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
        self.root.set_inner_html("");
    }

    /// Side nav: one dot per section, click scrolls the section into view.
    fn build_nav(&mut self, document: &Document) -> Result<Element, JsValue> {
        let nav = el(document, "nav", "section-nav")?;
        for section in content::SECTIONS {
            let dot = el(document, "button", "nav-dot")?;
            dot.set_attribute("data-section", section)?;
            dot.set_attribute("aria-label", &format!("Navigate to {section}"))?;

            let cb = {
                let document = document.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(target) = document.get_element_by_id(section) {
                        let opts = ScrollIntoViewOptions::new();
                        opts.set_behavior(ScrollBehavior::Smooth);
                        target.scroll_into_view_with_scroll_into_view_options(&opts);
                    }
                }) as Box<dyn FnMut()>)
            };
            dot.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;

            nav.append_child(&dot)?;
            self.dots.push((dot, cb));
        }
        Ok(nav)
    }

    /// Footer with copyright line and the theme toggle button.
    fn build_footer(&mut self, document: &Document) -> Result<Element, JsValue> {
        let footer = el(document, "footer", "footer")?;
        footer.append_child(&text_el(
            document,
            "div",
            "footer-copyright",
            content::FOOTER_COPYRIGHT,
        )?)?;

        let button = el(document, "button", "theme-toggle")?;
        button.set_attribute("aria-label", "Toggle theme")?;
        button.set_text_content(Some(Theme::from_dark(self.dark.get()).toggle_glyph()));

        let cb = {
            let dark = self.dark.clone();
            let document = document.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move || {
                let next = Theme::from_dark(dark.get()).toggled();
                dark.set(next.is_dark());
                set_root_mode(&document, next.is_dark());
                button.set_text_content(Some(next.toggle_glyph()));
            }) as Box<dyn FnMut()>)
        };
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;

        footer.append_child(&button)?;
        self.toggle = Some((button, cb));
        Ok(footer)
    }

    /// Reveal sections as they scroll in and light up the matching nav dot.
    fn observe_sections(&mut self, sections: &[Element]) -> Result<(), JsValue> {
        let dots: Vec<(String, Element)> = self
            .dots
            .iter()
            .map(|(dot, _)| {
                (
                    dot.get_attribute("data-section").unwrap_or_default(),
                    dot.clone(),
                )
            })
            .collect();

        let cb: ObserverClosure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                for (section, dot) in &dots {
                    let active = *section == target.id();
                    let _ = if active {
                        dot.class_list().add_1("active")
                    } else {
                        dot.class_list().remove_1("active")
                    };
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(0.3));
        init.set_root_margin("0px 0px -20% 0px");
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        for section in sections {
            observer.observe(section);
        }

        self.observer = Some((observer, cb));
        Ok(())
    }
}

fn set_root_mode(document: &Document, dark: bool) {
    if let Some(html) = document.document_element() {
        let classes = html.class_list();
        let _ = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
}

fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let e = document.create_element(tag)?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    Ok(e)
}

fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    Ok(e)
}

fn tag_list(document: &Document, tags: &[&str], class: &str) -> Result<Element, JsValue> {
    let list = el(document, "div", "tag-list")?;
    for tag in tags {
        list.append_child(&text_el(document, "span", class, tag)?)?;
    }
    Ok(list)
}

fn section(document: &Document, id: &str, class: &str) -> Result<Element, JsValue> {
    let s = el(document, "section", &format!("section {class}"))?;
    s.set_id(id);
    Ok(s)
}

fn hero_section(document: &Document) -> Result<Element, JsValue> {
    let profile = &content::PROFILE;
    let s = section(document, content::SECTIONS[0], "hero")?;
    let card = el(document, "div", "card hero-card")?;

    let intro = el(document, "div", "hero-intro")?;
    intro.append_child(&text_el(document, "div", "kicker", profile.kicker)?)?;

    let name = el(document, "h1", "hero-name")?;
    name.append_child(&text_el(document, "span", "", profile.given_name)?)?;
    name.append_child(&document.create_element("br")?)?;
    name.append_child(&text_el(document, "span", "muted", profile.family_name)?)?;
    intro.append_child(&name)?;

    intro.append_child(&text_el(document, "p", "tagline", profile.tagline)?)?;

    let status = el(document, "div", "hero-status")?;
    status.append_child(&text_el(
        document,
        "span",
        "availability",
        profile.availability,
    )?)?;
    status.append_child(&text_el(document, "span", "location", profile.location)?)?;
    intro.append_child(&status)?;
    card.append_child(&intro)?;

    let aside = el(document, "div", "hero-aside")?;
    aside.append_child(&text_el(document, "div", "kicker", "CURRENTLY")?)?;
    aside.append_child(&text_el(document, "div", "current-role", profile.current_role)?)?;
    aside.append_child(&text_el(document, "div", "muted", profile.current_org)?)?;
    aside.append_child(&text_el(
        document,
        "div",
        "muted small",
        profile.current_period,
    )?)?;
    aside.append_child(&text_el(document, "div", "kicker", "FOCUS")?)?;
    aside.append_child(&tag_list(document, profile.focus, "pill")?)?;
    card.append_child(&aside)?;

    s.append_child(&card)?;
    Ok(s)
}

fn work_section(document: &Document) -> Result<Element, JsValue> {
    let s = section(document, content::SECTIONS[1], "work")?;
    let card = el(document, "div", "card")?;

    let head = el(document, "div", "section-head")?;
    head.append_child(&text_el(document, "h2", "", content::WORK_HEADING)?)?;
    head.append_child(&text_el(document, "span", "kicker", content::WORK_PERIOD)?)?;
    card.append_child(&head)?;

    for job in &content::JOBS {
        let row = el(document, "div", "job")?;
        row.append_child(&text_el(document, "div", "job-year", job.year)?)?;

        let body = el(document, "div", "job-body")?;
        body.append_child(&text_el(document, "h3", "", job.role)?)?;
        body.append_child(&text_el(document, "div", "muted", job.company)?)?;
        body.append_child(&text_el(document, "p", "muted", job.description)?)?;
        row.append_child(&body)?;

        row.append_child(&tag_list(document, job.tech, "tag")?)?;
        card.append_child(&row)?;
    }

    s.append_child(&card)?;
    Ok(s)
}

fn projects_section(document: &Document) -> Result<Element, JsValue> {
    let s = section(document, content::SECTIONS[2], "projects")?;
    let card = el(document, "div", "card")?;
    card.append_child(&text_el(document, "h2", "", content::PROJECTS_HEADING)?)?;

    let grid = el(document, "div", "project-grid")?;
    for project in &content::PROJECTS {
        let article = el(document, "article", "project")?;
        article.append_child(&text_el(document, "div", "kicker", project.status)?)?;
        article.append_child(&text_el(document, "h3", "", project.title)?)?;
        article.append_child(&text_el(document, "p", "muted", project.excerpt)?)?;
        if let Some(url) = project.url {
            let link = text_el(document, "a", "project-link", "Read more →")?;
            link.set_attribute("href", url)?;
            article.append_child(&link)?;
        }
        grid.append_child(&article)?;
    }
    card.append_child(&grid)?;

    s.append_child(&card)?;
    Ok(s)
}

fn connect_section(document: &Document) -> Result<Element, JsValue> {
    let s = section(document, content::SECTIONS[3], "connect")?;
    let card = el(document, "div", "card connect-card")?;

    let left = el(document, "div", "connect-intro")?;
    left.append_child(&text_el(document, "h2", "", content::CONNECT_HEADING)?)?;
    left.append_child(&text_el(document, "p", "muted", content::CONNECT_BLURB)?)?;
    let email = text_el(document, "a", "email-link", content::EMAIL)?;
    email.set_attribute("href", &format!("mailto:{}", content::EMAIL))?;
    left.append_child(&email)?;
    card.append_child(&left)?;

    let right = el(document, "div", "connect-links")?;
    right.append_child(&text_el(document, "div", "kicker", "ELSEWHERE")?)?;
    for social in &content::SOCIALS {
        let link = el(document, "a", "social")?;
        link.set_attribute("href", social.url)?;
        link.append_child(&text_el(document, "div", "social-name", social.name)?)?;
        link.append_child(&text_el(document, "div", "muted small", social.handle)?)?;
        right.append_child(&link)?;
    }
    card.append_child(&right)?;

    s.append_child(&card)?;
    Ok(s)
}
