use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::content::{self, Breed};
use crate::likes::LikeCounter;
use crate::names::{NameGenerator, RandomSource};
use crate::notify::Notifier;
use crate::rotator::{FactRotator, FactTimer};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Breeds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Programs tried, in order, to open an image URL
const OPENERS: &[&str] = &["xdg-open", "open"];

pub struct App {
    pub tab: Tab,
    pub popup: Popup,

    // Session state
    pub likes: LikeCounter,
    pub rotator: FactRotator,
    pub generated_name: Option<String>,
    names: NameGenerator<Box<dyn RandomSource>>,

    // Breed carousel position
    pub carousel: usize,

    // Status line toasts
    pub notifier: Notifier,

    pub theme: Theme,

    // Rotation timer, only while the page is active
    fact_interval: Duration,
    timer: Option<FactTimer>,
}

impl App {
    pub fn new(config: &AppConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            tab: Tab::About,
            popup: Popup::None,

            likes: LikeCounter::new(),
            rotator: FactRotator::new(content::FACTS),
            generated_name: None,
            names: NameGenerator::new(content::NAME_PREFIXES, content::NAME_SUFFIXES, rng),

            carousel: 0,

            notifier: Notifier::new(
                Duration::from_secs(config.toast_secs),
                config.desktop_notifications,
            ),

            theme: Theme::load(&config.theme),

            fact_interval: Duration::from_secs(config.fact_interval_secs),
            timer: None,
        }
    }

    /// Start rotating facts. A second call while active does nothing.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }
        let timer = FactTimer::start(self.fact_interval);
        tracing::info!("Page active, rotating facts every {:?}", timer.period());
        self.timer = Some(timer);
    }

    /// Stop rotating facts; no tick is applied after this returns
    pub fn deactivate(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
            tracing::info!("Page inactive, fact rotation stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Apply timer ticks that fired since the last call
    pub fn pump_timer(&mut self) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.drain(),
            None => 0,
        };
        for _ in 0..fired {
            self.rotator.tick();
        }
        if fired > 0 {
            tracing::debug!("Fact {} of {}", self.rotator.index() + 1, self.rotator.len());
        }
    }

    /// Periodic housekeeping between events
    pub fn tick(&mut self) {
        self.pump_timer();
        self.notifier.expire(Instant::now());
    }

    pub fn like(&mut self) {
        self.likes.like();
        self.notifier.show(
            "Thanks for the love!",
            format!("This page now has {}", self.likes.label()),
        );
        tracing::debug!("Liked, total {}", self.likes.count());
    }

    pub fn generate_name(&mut self) {
        let name = self.names.generate();
        self.notifier.show("New cat name generated!", format!("Your cat's new name is {}", name));
        self.generated_name = Some(name);
    }

    pub fn next_fact(&mut self) {
        self.rotator.tick();
    }

    pub fn current_breed(&self) -> &'static Breed {
        &content::BREEDS[self.carousel]
    }

    fn carousel_next(&mut self) {
        self.carousel = (self.carousel + 1) % content::BREEDS.len();
    }

    fn carousel_prev(&mut self) {
        self.carousel = (self.carousel + content::BREEDS.len() - 1) % content::BREEDS.len();
    }

    /// URL and caption of the image currently on screen
    pub fn current_image(&self) -> (&'static str, &'static str) {
        match self.tab {
            Tab::About => (content::BANNER_IMAGE, content::BANNER_ALT),
            Tab::Breeds => {
                let breed = self.current_breed();
                (breed.image, breed.name)
            }
        }
    }

    /// Hand the current image to the system opener
    fn open_image(&mut self) -> Result<()> {
        let (url, caption) = self.current_image();

        for opener in OPENERS {
            if let Ok(child) = Command::new(opener)
                .arg(url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                reap_in_background(*opener, child);
                self.notifier.show("Opening image", caption);
                return Ok(());
            }
        }

        anyhow::bail!("No image opener found (tried {})", OPENERS.join(", "))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle popups first
        if self.popup == Popup::Help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.popup = Popup::None;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.tab = match self.tab {
                    Tab::About => Tab::Breeds,
                    Tab::Breeds => Tab::About,
                };
            }
            KeyCode::Char('1') => self.tab = Tab::About,
            KeyCode::Char('2') => self.tab = Tab::Breeds,

            KeyCode::Char('l') | KeyCode::Char(' ') => self.like(),
            KeyCode::Char('g') => self.generate_name(),
            KeyCode::Char('n') => self.next_fact(),

            KeyCode::Right => self.carousel_next(),
            KeyCode::Left => self.carousel_prev(),
            KeyCode::Char('o') => self.open_image()?,

            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }
}

/// Wait for an opener off the UI thread and log a failed exit
fn reap_in_background(opener: &'static str, mut child: Child) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        return;
    };
    handle.spawn_blocking(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::debug!("{} exited with {}", opener, status);
        }
        Ok(_) => {}
        Err(e) => tracing::debug!("Failed to wait for {}: {}", opener, e),
    });
}
