//! Application state management for the portfolio viewer.
//!
//! This module contains the core `App` struct that manages all application
//! state: the loaded content, the reveal engine driving the scroll-gated
//! animations, the page layout, the contact form, and the timer tasks
//! behind its submission simulation.

use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::config::Config;
use crate::content::{AssetMap, Portfolio, Project, ProjectFilter, SkillCategory};
use crate::form::{self, ContactForm, SubmitAttempt};
use crate::reveal::{
    delay_for, Easing, RevealEngine, RevealHandle, RevealState, Transition, VisualParams,
};
use crate::scroll::PageScroll;
use crate::ui::decor::Decor;
use crate::ui::marquee::Marquee;
use crate::ui::sections::{self, Section};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the timer event channel.
/// A submission produces two events; 8 leaves room for stale stragglers.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Whole-page fade at startup, run once before any section choreography.
const ENTRANCE_FADE: Duration = Duration::from_millis(1000);

/// Rows the page sits low while the entrance fade runs.
const ENTRANCE_RISE: f32 = 1.0;

/// Rows a section container rises while fading in.
const SECTION_RISE: f32 = 2.5;

/// Duration of a section container reveal.
const SECTION_DURATION: Duration = Duration::from_millis(800);

/// Gap between sibling cards in a grid cascade.
pub const CARD_STAGGER: Duration = Duration::from_millis(200);

/// Rows a grid card rises while fading in.
const CARD_RISE: f32 = 2.5;

/// Scale a grid card swells up from.
const CARD_SCALE: f32 = 0.9;

/// Duration of a single card reveal.
const CARD_DURATION: Duration = Duration::from_millis(600);

/// Skill-bar percentages roll in `[MIN, MAX)` once at startup, so the
/// bars differ between runs but hold still within one.
const SKILL_LEVEL_MIN: u8 = 60;
const SKILL_LEVEL_MAX: u8 = 100;

/// Geometry assumed until the first draw reports the real terminal size.
const FALLBACK_WIDTH: u16 = 80;
const FALLBACK_HEIGHT: u16 = 24;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Viewing,
    EditingForm,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Timer Events
// ============================================================================

/// Events from the spawned form timers.
///
/// These variants are sent through an MPSC channel from the timer tasks
/// back to the main application. Each carries the submission epoch that
/// scheduled it so the form machine can drop events that arrive after it
/// has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    /// The simulated delivery delay for a submission elapsed
    FormDelivered { epoch: u64 },
    /// The success panel's display window elapsed
    FormDisplayDone { epoch: u64 },
}

// ============================================================================
// Page Layout
// ============================================================================

/// One section's place in the virtual page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub section: Section,
    /// First page row of the section.
    pub start: u16,
    pub height: u16,
}

/// Every reveal handle the app keeps. Section handles are scroll-gated;
/// card handles are fired as one cascade when their section's reveal
/// starts, so a grid animates together no matter how much of it fits on
/// screen.
pub struct Handles {
    /// Whole-page entrance fade, triggered at startup.
    pub entrance: RevealHandle,
    pub hero: RevealHandle,
    pub about: RevealHandle,
    pub skills: RevealHandle,
    pub projects: RevealHandle,
    pub certificates: RevealHandle,
    pub contact: RevealHandle,
    pub footer: RevealHandle,
    /// Indexed by `SkillCategory::ALL` position.
    pub skill_cards: Vec<RevealHandle>,
    /// Indexed by position in the currently filtered project list.
    pub project_cards: Vec<RevealHandle>,
    pub certificate_cards: Vec<RevealHandle>,
}

impl Handles {
    pub fn section(&self, section: Section) -> RevealHandle {
        match section {
            Section::Hero => self.hero,
            Section::About => self.about,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Certificates => self.certificates,
            Section::Contact => self.contact,
            Section::Footer => self.footer,
        }
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Content
    pub config: Config,
    pub portfolio: Portfolio,
    pub assets: AssetMap,

    // UI state
    pub state: AppState,
    pub filter: ProjectFilter,
    pub form: ContactForm,
    /// When the success panel appeared, for its pop-in pose.
    pub form_settled_at: Option<Instant>,

    // Motion state
    pub engine: RevealEngine,
    pub scroll: PageScroll,
    pub marquee: Marquee,
    pub decor: Decor,
    pub handles: Handles,
    /// Frame clock, advanced once per tick so a whole frame renders one
    /// instant.
    pub now: Instant,

    // Page geometry
    pub layout: Vec<SectionSlot>,
    pub page_width: u16,
    pub page_height: u16,
    pub viewport_height: u16,
    /// Page row of the skills marquee, for mouse hover hit-testing.
    pub marquee_page_row: Option<u16>,
    /// Scroll offset the engine last heard about. `None` forces a push,
    /// set on layout changes.
    pushed_offset: Option<u16>,

    /// Level-bar percentages rolled at startup, indexed like the skills.
    skill_levels: Vec<Vec<u8>>,

    // Timer task channel
    timer_rx: Option<mpsc::Receiver<TimerEvent>>,
    timer_tx: mpsc::Sender<TimerEvent>,
}

impl App {
    /// Create a new application instance around already-loaded content.
    pub fn new(config: Config, portfolio: Portfolio, assets: AssetMap) -> Self {
        let reduced = config.reduced_motion;

        let mut engine = RevealEngine::new();
        engine.set_instant(reduced);
        let mut scroll = PageScroll::new();
        scroll.set_instant(reduced);

        let handles = Self::register_handles(&mut engine, &portfolio, ProjectFilter::All);

        let now = Instant::now();
        // The entrance and the hero are on screen at startup, not waiting
        // to be scrolled to.
        engine.trigger(handles.entrance, now);
        engine.trigger(handles.hero, now);

        let skill_levels = roll_skill_levels(&portfolio);
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let mut app = Self {
            config,
            portfolio,
            assets,

            state: AppState::Viewing,
            filter: ProjectFilter::All,
            form: ContactForm::new(),
            form_settled_at: None,

            engine,
            scroll,
            marquee: Marquee::new(),
            decor: Decor::generate(FALLBACK_WIDTH, FALLBACK_HEIGHT),
            handles,
            now,

            layout: Vec::new(),
            page_width: 0,
            page_height: 0,
            viewport_height: 0,
            marquee_page_row: None,
            pushed_offset: None,

            skill_levels,

            timer_rx: Some(rx),
            timer_tx: tx,
        };

        // Lay the page out at a fallback size so the first frame has
        // geometry, then scatter the blob field over the real page height.
        app.rebuild_layout(FALLBACK_WIDTH, FALLBACK_HEIGHT);
        app.decor = Decor::generate(app.page_width, app.page_height);
        app.decor.set_frozen(reduced);
        app.marquee.set_frozen(reduced);
        app
    }

    /// Register every reveal the page performs.
    fn register_handles(
        engine: &mut RevealEngine,
        portfolio: &Portfolio,
        filter: ProjectFilter,
    ) -> Handles {
        let container = Transition::fade_rise(SECTION_RISE, SECTION_DURATION, Easing::EaseOut);
        let observe_section = |engine: &mut RevealEngine, s: Section| {
            engine.observe_with(s.threshold(), true, container)
        };

        let entrance = engine.observe_with(
            0.0,
            true,
            Transition::fade_rise(ENTRANCE_RISE, ENTRANCE_FADE, Easing::EaseOut),
        );
        // The hero never moves as a block; its handle anchors the
        // per-element timeline to one trigger instant.
        let hero = engine.observe_with(
            Section::Hero.threshold(),
            true,
            Transition::new(
                VisualParams::VISIBLE,
                VisualParams::VISIBLE,
                Duration::ZERO,
                Easing::Linear,
            ),
        );
        let about = observe_section(engine, Section::About);
        let skills = observe_section(engine, Section::Skills);
        let projects = observe_section(engine, Section::Projects);
        let certificates = observe_section(engine, Section::Certificates);
        let contact = observe_section(engine, Section::Contact);
        let footer = observe_section(engine, Section::Footer);

        // Skill cards keep one handle per category slot so renderers can
        // index them directly; delays cascade over the non-empty ones
        // actually shown.
        let mut skill_cards = Vec::with_capacity(SkillCategory::ALL.len());
        let mut shown = 0usize;
        for category in SkillCategory::ALL {
            skill_cards.push(engine.observe_with(
                Section::Skills.threshold(),
                true,
                card_transition(delay_for(Duration::ZERO, CARD_STAGGER, shown)),
            ));
            if !portfolio.skills.category(category).is_empty() {
                shown += 1;
            }
        }

        let project_cards = Self::register_cards(engine, filter.apply(&portfolio.projects).len());
        let certificate_cards = Self::register_cards(engine, portfolio.certificates.len());

        Handles {
            entrance,
            hero,
            about,
            skills,
            projects,
            certificates,
            contact,
            footer,
            skill_cards,
            project_cards,
            certificate_cards,
        }
    }

    /// One handle per card in a grid, delays cascading in declared order.
    fn register_cards(engine: &mut RevealEngine, count: usize) -> Vec<RevealHandle> {
        (0..count)
            .map(|i| {
                engine.observe_with(
                    0.0,
                    true,
                    card_transition(delay_for(Duration::ZERO, CARD_STAGGER, i)),
                )
            })
            .collect()
    }

    // =========================================================================
    // Layout & Geometry
    // =========================================================================

    /// Recompute the page layout for a terminal size. Called on startup
    /// and on every resize; the scroll offset re-clamps itself.
    pub fn rebuild_layout(&mut self, width: u16, viewport_height: u16) {
        self.page_width = width;
        self.viewport_height = viewport_height;

        let mut layout = Vec::with_capacity(Section::ALL.len());
        let mut start = 0u16;
        for section in Section::ALL {
            let height = sections::section_height(self, section, width);
            layout.push(SectionSlot {
                section,
                start,
                height,
            });
            start = start.saturating_add(height);
        }
        self.layout = layout;
        self.page_height = start;
        self.scroll.set_geometry(start, viewport_height);

        self.marquee_page_row = self
            .layout
            .iter()
            .find(|s| s.section == Section::Skills)
            .map(|s| s.start + sections::skills::marquee_row(width));

        // New geometry invalidates whatever visibility the engine heard.
        self.pushed_offset = None;
    }

    /// The section the viewport is currently reading, for the nav
    /// highlight: the last one whose anchor has passed the upper third of
    /// the screen.
    pub fn active_section(&self) -> Section {
        let anchor = self.scroll.offset() + self.viewport_height / 3;
        let mut active = Section::Hero;
        for slot in &self.layout {
            if slot.start <= anchor {
                active = slot.section;
            }
        }
        active
    }

    // =========================================================================
    // Frame Tick
    // =========================================================================

    /// Advance every time-driven piece of state by one frame.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.engine.tick(now);
        self.scroll.tick(now);
        self.marquee.tick(now);
        // Visibility is pushed, not polled: the engine hears about
        // intersections only when the viewport moved or the page
        // re-laid out.
        if self.pushed_offset != Some(self.scroll.offset()) {
            self.push_visibility();
            self.pushed_offset = Some(self.scroll.offset());
        }
        self.check_timer_events();
    }

    /// Feed current section visibility to the reveal engine. A section
    /// whose state leaves `Hidden` here also fires its card cascade.
    fn push_visibility(&mut self) {
        for i in 0..self.layout.len() {
            let slot = self.layout[i];
            let handle = self.handles.section(slot.section);
            let before = self.engine.state(handle);
            let fraction = self.scroll.visible_fraction(slot.start, slot.height);
            self.engine.viewport_changed(handle, fraction, self.now);
            if before == Some(RevealState::Hidden) && self.engine.state(handle) != before {
                self.trigger_section_cards(slot.section);
            }
        }
    }

    fn trigger_section_cards(&mut self, section: Section) {
        let cards = match section {
            Section::Skills => &self.handles.skill_cards,
            Section::Projects => &self.handles.project_cards,
            Section::Certificates => &self.handles.certificate_cards,
            _ => return,
        };
        for &handle in cards {
            self.engine.trigger(handle, self.now);
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Glide the viewport to a section anchor.
    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(slot) = self.layout.iter().find(|s| s.section == section) {
            self.scroll.glide_to(slot.start, self.now);
        }
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// Projects passing the current filter, in declared order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.filter.apply(&self.portfolio.projects)
    }

    /// Flip the project filter and restage the card cascade: old handles
    /// are released, fresh ones registered for the filtered set, and the
    /// cascade re-fired if the section is already on screen.
    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.next();

        for handle in std::mem::take(&mut self.handles.project_cards) {
            self.engine.release(handle);
        }
        let count = self.filtered_projects().len();
        self.handles.project_cards = Self::register_cards(&mut self.engine, count);

        self.rebuild_layout(self.page_width, self.viewport_height);

        let section = self.handles.section(Section::Projects);
        if self.engine.state(section) != Some(RevealState::Hidden) {
            self.trigger_section_cards(Section::Projects);
        }
        debug!(filter = ?self.filter, count, "Project filter toggled");
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// Proficiency shown by a level bar, stable for the life of the run.
    /// Unknown indices fall back to the range floor.
    pub fn skill_level(&self, cat_idx: usize, skill_idx: usize) -> u8 {
        self.skill_levels
            .get(cat_idx)
            .and_then(|levels| levels.get(skill_idx))
            .copied()
            .unwrap_or(SKILL_LEVEL_MIN)
    }

    // =========================================================================
    // Form Submission
    // =========================================================================

    /// Try to submit the contact form. On acceptance the simulated
    /// delivery timer starts; validation failures have already flagged and
    /// focused the offending field.
    pub fn submit_contact_form(&mut self) -> SubmitAttempt {
        let attempt = self.form.submit();
        if attempt == SubmitAttempt::Accepted {
            let epoch = self.form.epoch();
            self.schedule_timer(form::SUBMIT_DELAY, TimerEvent::FormDelivered { epoch });
            debug!(epoch, "Contact form accepted, delivery timer started");
        }
        attempt
    }

    /// Spawn a task that delivers `event` after `delay`.
    fn schedule_timer(&self, delay: Duration, event: TimerEvent) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tx.send(event).await {
                error!(error = %e, "Failed to send timer event - channel closed");
            }
        });
    }

    /// Check for fired timers and process their events
    pub fn check_timer_events(&mut self) {
        // Collect all pending events first to avoid borrow conflicts
        let events: Vec<TimerEvent> = {
            if let Some(ref mut rx) = self.timer_rx {
                let mut events = Vec::new();
                while let Ok(event) = rx.try_recv() {
                    events.push(event);
                }
                events
            } else {
                Vec::new()
            }
        };

        for event in events {
            self.process_timer_event(event);
        }
    }

    /// Process a single timer event. The form machine decides whether the
    /// event still applies; stale epochs are dropped there.
    fn process_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::FormDelivered { epoch } => {
                if self.form.delivery_complete(epoch) {
                    self.form_settled_at = Some(self.now);
                    self.schedule_timer(
                        form::SUBMITTED_DISPLAY,
                        TimerEvent::FormDisplayDone { epoch },
                    );
                    debug!(epoch, "Form delivered, display timer started");
                } else {
                    debug!(epoch, "Stale delivery event dropped");
                }
            }
            TimerEvent::FormDisplayDone { epoch } => {
                if self.form.display_elapsed(epoch) {
                    self.form_settled_at = None;
                    debug!(epoch, "Success panel dismissed, form reset");
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn reduced_motion(&self) -> bool {
        self.config.reduced_motion
    }

    /// Pose of the whole-page entrance fade.
    pub fn entrance_params(&self) -> VisualParams {
        self.engine
            .params(self.handles.entrance, self.now)
            .unwrap_or(VisualParams::VISIBLE)
    }
}

/// The grid card pose: rise and swell into place.
fn card_transition(delay: Duration) -> Transition {
    Transition::new(
        VisualParams::new(0.0, CARD_RISE, 0.0, CARD_SCALE),
        VisualParams::VISIBLE,
        CARD_DURATION,
        Easing::EaseOut,
    )
    .with_delay(delay)
}

fn roll_skill_levels(portfolio: &Portfolio) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    SkillCategory::ALL
        .iter()
        .map(|c| {
            portfolio
                .skills
                .category(*c)
                .iter()
                .map(|_| rng.gen_range(SKILL_LEVEL_MIN..SKILL_LEVEL_MAX))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::content::{Achievement, Credential, Person, Skills};
    use crate::form::{FormFocus, FormState};

    fn sample_portfolio() -> Portfolio {
        Portfolio {
            personal: Person {
                name: "Ada Lovelace".to_string(),
                title: "Analytical Engine Programmer".to_string(),
                bio: "Writes notes considerably longer than the memoir itself.".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 0000 0000".to_string(),
                location: "London, UK".to_string(),
                photo: None,
            },
            social: [
                ("github".to_string(), "https://github.com/ada".to_string()),
                (
                    "linkedin".to_string(),
                    "https://linkedin.com/in/ada".to_string(),
                ),
            ]
            .into_iter()
            .collect(),
            skills: Skills {
                frontend: vec!["Bernoulli diagrams".to_string(), "Punch cards".to_string()],
                backend: vec!["Difference engine".to_string()],
                tools: vec!["Telescope".to_string()],
                other: vec![],
            },
            projects: vec![
                Project {
                    id: "notes".to_string(),
                    title: "Notes on the Analytical Engine".to_string(),
                    featured: true,
                    ..Project::default()
                },
                Project {
                    id: "flyology".to_string(),
                    title: "Flyology".to_string(),
                    featured: false,
                    ..Project::default()
                },
                Project {
                    id: "loops".to_string(),
                    title: "Loop Notation".to_string(),
                    featured: true,
                    ..Project::default()
                },
            ],
            certificates: vec![Credential {
                id: "maths".to_string(),
                title: "Private Mathematics Tuition".to_string(),
                issuer: "Augustus De Morgan".to_string(),
                date: "1840".to_string(),
                ..Credential::default()
            }],
            achievements: vec![Achievement {
                id: "first-program".to_string(),
                title: "First Published Program".to_string(),
                issuer: "Scientific Memoirs".to_string(),
                date: "1843".to_string(),
                ..Achievement::default()
            }],
        }
    }

    fn sample_app() -> App {
        let portfolio = sample_portfolio();
        let assets = AssetMap::build(&portfolio, Path::new("assets"));
        App::new(Config::default(), portfolio, assets)
    }

    #[test]
    fn layout_is_contiguous_and_ordered() {
        let mut app = sample_app();
        app.rebuild_layout(100, 30);

        assert_eq!(app.layout.len(), Section::ALL.len());
        let mut expected_start = 0u16;
        for (slot, section) in app.layout.iter().zip(Section::ALL) {
            assert_eq!(slot.section, section);
            assert_eq!(slot.start, expected_start);
            assert!(slot.height > 0, "{:?} has zero height", section);
            expected_start += slot.height;
        }
        assert_eq!(app.page_height, expected_start);
        assert_eq!(app.scroll.content_height(), app.page_height);
    }

    #[test]
    fn entrance_and_hero_run_at_startup() {
        let app = sample_app();
        assert_ne!(
            app.engine.state(app.handles.entrance),
            Some(RevealState::Hidden)
        );
        assert_ne!(
            app.engine.state(app.handles.hero),
            Some(RevealState::Hidden)
        );
        // Everything below the fold waits for the scroll.
        assert_eq!(
            app.engine.state(app.handles.about),
            Some(RevealState::Hidden)
        );
        assert_eq!(
            app.engine.state(app.handles.contact),
            Some(RevealState::Hidden)
        );
    }

    #[test]
    fn scrolling_in_reveals_a_section_and_fires_its_cards() {
        let mut app = sample_app();
        app.rebuild_layout(100, 30);

        let skills = app
            .layout
            .iter()
            .find(|s| s.section == Section::Skills)
            .copied()
            .unwrap();
        for &handle in &app.handles.skill_cards {
            assert_eq!(app.engine.state(handle), Some(RevealState::Hidden));
        }

        app.scroll.scroll_to(skills.start);
        app.tick(app.now + Duration::from_millis(33));

        assert_ne!(
            app.engine.state(app.handles.skills),
            Some(RevealState::Hidden)
        );
        for &handle in &app.handles.skill_cards {
            assert_ne!(app.engine.state(handle), Some(RevealState::Hidden));
        }
    }

    #[test]
    fn filter_toggle_restages_project_cards() {
        let mut app = sample_app();
        let all = app.filtered_projects().len();
        assert_eq!(all, 3);
        assert_eq!(app.handles.project_cards.len(), all);
        let tracked_before = app.engine.len();

        app.toggle_filter();
        assert_eq!(app.filter, ProjectFilter::Featured);
        let featured = app.filtered_projects().len();
        assert_eq!(featured, 2);
        assert_eq!(app.handles.project_cards.len(), featured);
        // Released handles left the engine rather than leaking.
        assert_eq!(app.engine.len(), tracked_before - all + featured);
        // The section is still below the fold, so the fresh cards wait.
        for &handle in &app.handles.project_cards {
            assert_eq!(app.engine.state(handle), Some(RevealState::Hidden));
        }

        app.toggle_filter();
        assert_eq!(app.filter, ProjectFilter::All);
        assert_eq!(app.handles.project_cards.len(), all);
    }

    #[test]
    fn filter_change_on_screen_refires_the_cascade() {
        let mut app = sample_app();
        app.rebuild_layout(100, 30);
        let projects = app
            .layout
            .iter()
            .find(|s| s.section == Section::Projects)
            .copied()
            .unwrap();
        app.scroll.scroll_to(projects.start);
        app.tick(app.now + Duration::from_millis(33));

        app.toggle_filter();
        for &handle in &app.handles.project_cards {
            assert_ne!(app.engine.state(handle), Some(RevealState::Hidden));
        }
    }

    #[test]
    fn active_section_tracks_the_viewport() {
        let mut app = sample_app();
        app.rebuild_layout(100, 30);
        assert_eq!(app.active_section(), Section::Hero);

        let about = app
            .layout
            .iter()
            .find(|s| s.section == Section::About)
            .copied()
            .unwrap();
        app.scroll.scroll_to(about.start);
        assert_eq!(app.active_section(), Section::About);
    }

    #[test]
    fn reduced_motion_settles_everything_immediately() {
        let config = Config {
            reduced_motion: true,
            ..Config::default()
        };
        let portfolio = sample_portfolio();
        let assets = AssetMap::build(&portfolio, Path::new("assets"));
        let mut app = App::new(config, portfolio, assets);

        assert_eq!(
            app.engine.state(app.handles.entrance),
            Some(RevealState::Visible)
        );
        assert_eq!(app.entrance_params(), VisualParams::VISIBLE);

        app.rebuild_layout(100, 30);
        app.scroll_to_section(Section::Contact);
        assert!(!app.scroll.is_gliding());
    }

    #[test]
    fn skill_levels_are_stable_and_in_range() {
        let app = sample_app();
        let level = app.skill_level(0, 0);
        assert!((SKILL_LEVEL_MIN..SKILL_LEVEL_MAX).contains(&level));
        assert_eq!(app.skill_level(0, 0), level);
        // Out-of-range lookups fall back instead of panicking.
        assert_eq!(app.skill_level(9, 9), SKILL_LEVEL_MIN);
    }

    #[tokio::test(start_paused = true)]
    async fn form_submission_round_trip() {
        let mut app = sample_app();
        for (focus, text) in [
            (FormFocus::Name, "Ada"),
            (FormFocus::Email, "ada@example.com"),
            (FormFocus::Subject, "Engines"),
            (FormFocus::Message, "About that loop."),
        ] {
            app.form.focus = focus;
            for c in text.chars() {
                app.form.insert_char(c);
            }
        }

        assert_eq!(app.submit_contact_form(), SubmitAttempt::Accepted);
        assert_eq!(app.form.state(), FormState::Submitting);

        // Let the spawned timer task register its sleep before the clock moves.
        tokio::task::yield_now().await;
        tokio::time::advance(form::SUBMIT_DELAY).await;
        tokio::task::yield_now().await;
        app.tick(app.now + form::SUBMIT_DELAY);
        assert_eq!(app.form.state(), FormState::Submitted);
        assert!(app.form_settled_at.is_some());

        tokio::task::yield_now().await;
        tokio::time::advance(form::SUBMITTED_DISPLAY).await;
        tokio::task::yield_now().await;
        app.tick(app.now + form::SUBMITTED_DISPLAY);
        assert_eq!(app.form.state(), FormState::Idle);
        assert!(app.form_settled_at.is_none());
        assert!(app.form.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_submits_schedule_nothing() {
        let mut app = sample_app();
        assert!(matches!(
            app.submit_contact_form(),
            SubmitAttempt::EmptyField(_)
        ));

        // Were a timer scheduled anyway, this would deliver it.
        tokio::time::advance(form::SUBMIT_DELAY + form::SUBMITTED_DISPLAY).await;
        tokio::task::yield_now().await;
        app.check_timer_events();
        assert_eq!(app.form.state(), FormState::Idle);
        assert!(app.form_settled_at.is_none());
    }
}
