//! Staggered entrance of page sections.
//!
//! A page declares a [`RevealPlan`]: when each section starts appearing
//! and how long it takes. A [`RevealClock`] advances through the plan on
//! ticks and answers how far along each section is. The view hides a
//! section at progress 0 and dims it until it reaches 1.

use std::time::Duration;

use strum::Display;

use crate::domain::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Section {
    Header,
    Project,
    Kpis,
    CostChart,
    LcoeChart,
    Matrix,
    SpecTable,
    Recommendations,
    Metrics,
    Breakdown,
    PowerCurve,
    Cartridges,
    Design,
    Logistics,
    Scalability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub section: Section,
    pub delay: Duration,
    pub duration: Duration,
}

impl RevealStep {
    const fn ms(section: Section, delay: u64, duration: u64) -> Self {
        Self {
            section,
            delay: Duration::from_millis(delay),
            duration: Duration::from_millis(duration),
        }
    }

    fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

const HOME_STEPS: [RevealStep; 7] = [
    RevealStep::ms(Section::Project, 0, 600),
    RevealStep::ms(Section::Kpis, 100, 600),
    RevealStep::ms(Section::CostChart, 300, 600),
    RevealStep::ms(Section::LcoeChart, 400, 600),
    RevealStep::ms(Section::SpecTable, 800, 800),
    RevealStep::ms(Section::Recommendations, 900, 800),
    RevealStep::ms(Section::Matrix, 1200, 2000),
];

const TECHNOLOGY_STEPS: [RevealStep; 8] = [
    RevealStep::ms(Section::Header, 0, 600),
    RevealStep::ms(Section::Metrics, 200, 600),
    RevealStep::ms(Section::Breakdown, 400, 800),
    RevealStep::ms(Section::PowerCurve, 500, 800),
    RevealStep::ms(Section::Cartridges, 500, 800),
    RevealStep::ms(Section::Design, 600, 800),
    RevealStep::ms(Section::Logistics, 700, 800),
    RevealStep::ms(Section::Scalability, 800, 800),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealPlan {
    steps: Vec<RevealStep>,
}

impl RevealPlan {
    pub fn new(steps: Vec<RevealStep>) -> Self {
        Self { steps }
    }

    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Self::new(HOME_STEPS.to_vec()),
            _ => Self::new(TECHNOLOGY_STEPS.to_vec()),
        }
    }

    /// Speeds the whole plan up (`speed > 1`) or slows it down.
    /// Non-positive speeds leave the plan untouched.
    pub fn scaled(self, speed: f64) -> Self {
        if speed.is_nan() || speed <= 0.0 || speed == 1.0 {
            return self;
        }
        let scale = |d: Duration| Duration::from_nanos((d.as_nanos() as f64 / speed).round() as u64);
        Self {
            steps: self
                .steps
                .into_iter()
                .map(|step| RevealStep {
                    section: step.section,
                    delay: scale(step.delay),
                    duration: scale(step.duration),
                })
                .collect(),
        }
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Time after which every section is fully shown.
    pub fn total(&self) -> Duration {
        self.steps
            .iter()
            .map(RevealStep::end)
            .max()
            .unwrap_or_default()
    }

    /// Progress of `section` in `[0, 1]` at `elapsed`. Sections without a
    /// step are always fully shown.
    pub fn progress(&self, section: Section, elapsed: Duration) -> f64 {
        let Some(step) = self.steps.iter().find(|s| s.section == section) else {
            return 1.0;
        };
        if elapsed < step.delay {
            return 0.0;
        }
        if elapsed >= step.end() || step.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - step.delay).as_secs_f64() / step.duration.as_secs_f64();
        ease_out(t)
    }
}

fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Plays a [`RevealPlan`] forward on ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealClock {
    plan: RevealPlan,
    elapsed: Duration,
    cancelled: bool,
}

impl RevealClock {
    pub fn new(plan: RevealPlan) -> Self {
        Self {
            plan,
            elapsed: Duration::ZERO,
            cancelled: false,
        }
    }

    /// A clock that shows everything from the start.
    pub fn finished() -> Self {
        Self {
            cancelled: true,
            ..Default::default()
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.is_complete() {
            self.elapsed = self.elapsed.saturating_add(dt);
        }
    }

    /// Completes the reveal at once.
    pub fn skip(&mut self) {
        self.cancelled = true;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_complete(&self) -> bool {
        self.cancelled || self.elapsed >= self.plan.total()
    }

    pub fn progress(&self, section: Section) -> f64 {
        if self.cancelled {
            1.0
        } else {
            self.plan.progress(section, self.elapsed)
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.progress(section) > 0.0
    }
}
