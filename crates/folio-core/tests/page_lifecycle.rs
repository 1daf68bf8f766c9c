//! End-to-end page navigation scenarios against an in-memory document.

use std::{collections::HashMap, path::Path, time::Duration};

use folio_core::{
    Config, CoreError, DockState, DockStyle, DockSurface, ManualClock, PageSession, Post,
    Result, ScrollSample, ThemeApplier, ThemePolicy, ThemeTarget,
};

/// Minimal stand-in for the browser document.
struct Document {
    vars: HashMap<String, String>,
    indicator: Option<String>,
    title_height: Option<f64>,
    content_height: Option<f64>,
    scroll_offset: f64,
    title_style: Option<DockStyle>,
    style_writes: usize,
}

impl Document {
    fn new() -> Self {
        Self {
            vars: HashMap::new(),
            indicator: Some("#151515".to_string()),
            title_height: Some(80.0),
            content_height: Some(2000.0),
            scroll_offset: 0.0,
            title_style: None,
            style_writes: 0,
        }
    }

    fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    fn tear_down_page(&mut self) {
        self.title_height = None;
        self.content_height = None;
    }
}

impl ThemeTarget for Document {
    fn has_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    fn set_variable(&mut self, property: &str, value: &str) {
        self.vars.insert(property.to_string(), value.to_string());
    }

    fn set_indicator(&mut self, value: &str) {
        self.indicator = Some(value.to_string());
    }
}

impl DockSurface for Document {
    fn sample(&self) -> Option<ScrollSample> {
        Some(ScrollSample::new(
            self.title_height?,
            self.scroll_offset,
            self.content_height?,
        ))
    }

    fn apply(&mut self, style: &DockStyle) -> Result<()> {
        if self.title_height.is_none() {
            return Err(CoreError::missing_target(".work-post-title"));
        }
        self.style_writes += 1;
        self.title_style = Some(style.clone());
        Ok(())
    }
}

const CONFIG: &str = r#"
[site]
title = "Jeff Wolff"
site_url = "http://jeffwolff.net"
"#;

const THEMED: &str = r##"---
title: "Ackbar"
date: 2018-05-04
url: "ackbar.example.com"
theme: true
tbg: "#0b2545"
tbgf: "11, 37, 69"
tp: "#8da9c4"
tpf: "rgba(141,169,196,.78)"
ts: "#eef4ed"
tsf: "#b7c4b6"
twb: "19,49,92"
twt: "255,255,255"
tfbg: "#061a33"
---

<p>Case study.</p>"##;

const PLAIN: &str = r#"---
title: "Tarkin"
date: 2017-02-11
---

<p>Another case study.</p>"#;

fn post(path: &str, source: &str) -> Post {
    Post::from_source(Path::new(path), source).expect("post")
}

fn applier(config: &Config, policy: ThemePolicy) -> ThemeApplier {
    ThemeApplier::new(config.theme.defaults.clone(), policy)
}

#[test]
fn themed_page_writes_palette_and_meta_color() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, config.theme.on_navigate);
    let mut doc = Document::new();
    let page = post("work/ackbar.md", THEMED);

    let mut session = PageSession::new(&config.dock, ManualClock::new());
    session.mount(&mut theme, Some(&page.theme_record()), &mut doc);

    assert_eq!(doc.var("--bg"), Some("#0b2545"));
    assert_eq!(doc.var("--bg-faded"), Some("11, 37, 69"));
    assert_eq!(doc.var("--primary"), Some("#8da9c4"));
    assert_eq!(doc.var("--primary-faded"), Some("rgba(141,169,196,.78)"));
    assert_eq!(doc.var("--secondary"), Some("#eef4ed"));
    assert_eq!(doc.var("--secondary-faded"), Some("#b7c4b6"));
    assert_eq!(doc.var("--window-border"), Some("19,49,92"));
    assert_eq!(doc.var("--window-title"), Some("255,255,255"));
    assert_eq!(doc.var("--footer-bg"), Some("#061a33"));
    assert_eq!(doc.indicator.as_deref(), Some("#0b2545"));
}

#[test]
fn plain_page_leaves_default_theme_untouched() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, ThemePolicy::Carry);
    let mut doc = Document::new();
    let page = post("work/tarkin.md", PLAIN);

    let mut session = PageSession::new(&config.dock, ManualClock::new());
    session.mount(&mut theme, Some(&page.theme_record()), &mut doc);

    assert!(doc.vars.is_empty());
    assert_eq!(doc.indicator.as_deref(), Some("#151515"));
}

#[test]
fn carry_policy_leaks_theme_into_next_page() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, ThemePolicy::Carry);
    let mut doc = Document::new();

    let mut first = PageSession::new(&config.dock, ManualClock::new());
    first.mount(&mut theme, Some(&post("work/ackbar.md", THEMED).theme_record()), &mut doc);
    first.unmount();

    let mut second = PageSession::new(&config.dock, ManualClock::new());
    second.mount(&mut theme, Some(&post("work/tarkin.md", PLAIN).theme_record()), &mut doc);

    assert_eq!(doc.var("--bg"), Some("#0b2545"));
    assert_eq!(theme.current().meta_theme_color(), "#0b2545");
}

#[test]
fn reset_policy_restores_defaults_on_next_page() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, ThemePolicy::Reset);
    let mut doc = Document::new();

    let mut first = PageSession::new(&config.dock, ManualClock::new());
    first.mount(&mut theme, Some(&post("work/ackbar.md", THEMED).theme_record()), &mut doc);
    first.unmount();

    let mut second = PageSession::new(&config.dock, ManualClock::new());
    second.mount(&mut theme, None, &mut doc);

    assert_eq!(doc.var("--bg"), Some("#151515"));
    assert_eq!(doc.var("--primary"), Some("#ff0"));
    assert_eq!(doc.indicator.as_deref(), Some("#151515"));
}

#[test]
fn configured_defaults_reach_the_first_plain_page() {
    let config = Config::from_toml_str(&format!(
        "{CONFIG}\n[theme.defaults]\nbackground = \"#ffffff\"\nprimary = \"#222\"\n"
    ))
    .expect("config");
    let mut theme = applier(&config, config.theme.on_navigate);
    let mut doc = Document::new();

    let mut session = PageSession::new(&config.dock, ManualClock::new());
    session.mount(&mut theme, Some(&post("work/tarkin.md", PLAIN).theme_record()), &mut doc);

    assert_eq!(doc.var("--bg"), Some("#ffffff"));
    assert_eq!(doc.var("--primary"), Some("#222"));
    assert_eq!(doc.var("--secondary"), Some("#2828ef"));
    assert_eq!(doc.indicator.as_deref(), Some("#ffffff"));
    assert_eq!(theme.current().meta_theme_color(), "#ffffff");
}

#[test]
fn scrolling_docks_then_anchors_title() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, config.theme.on_navigate);
    let mut doc = Document::new();
    let clock = ManualClock::new();

    let mut session = PageSession::new(&config.dock, clock.clone());
    session.mount(&mut theme, None, &mut doc);

    assert_eq!(session.on_scroll(&mut doc), Some(DockState::Pinned));
    assert_eq!(doc.title_style.as_ref().map(|s| s.position), Some("fixed"));

    // A burst of scroll events inside the interval is dropped.
    for offset in [500.0, 1000.0, 1950.0] {
        doc.scroll_offset = offset;
        clock.advance(Duration::from_millis(10));
        assert_eq!(session.on_scroll(&mut doc), None);
    }

    clock.advance(Duration::from_millis(50));
    assert_eq!(session.on_scroll(&mut doc), Some(DockState::Anchored(1920.0)));
    let style = doc.title_style.clone().expect("style");
    assert_eq!(style.position, "absolute");
    assert_eq!(style.top, "1920px");
    assert_eq!(doc.style_writes, 2);
}

#[test]
fn teardown_race_does_not_write() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, config.theme.on_navigate);
    let mut doc = Document::new();
    let clock = ManualClock::new();

    let mut session = PageSession::new(&config.dock, clock.clone());
    session.mount(&mut theme, None, &mut doc);
    doc.tear_down_page();

    assert_eq!(session.on_scroll(&mut doc), None);
    session.unmount();
    clock.advance(Duration::from_secs(1));
    assert_eq!(session.on_scroll(&mut doc), None);
    assert_eq!(doc.style_writes, 0);
}

#[test]
fn missing_indicator_still_starts_docking() {
    let config = Config::from_toml_str(CONFIG).expect("config");
    let mut theme = applier(&config, config.theme.on_navigate);
    let mut doc = Document::new();
    doc.indicator = None;

    let mut session = PageSession::new(&config.dock, ManualClock::new());
    session.mount(&mut theme, Some(&post("work/ackbar.md", THEMED).theme_record()), &mut doc);

    assert!(doc.vars.is_empty());
    assert!(session.docker().is_running());
    assert_eq!(theme.current().meta_theme_color(), "#151515");
}
