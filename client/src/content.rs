//! Site copy and catalog data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page displays is described here and deserialized from
//! `content/site.json`, embedded at compile time. The server reuses the same
//! types for `/api/courses`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

const EMBEDDED_SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroConfig,
    pub courses: CarouselConfig,
    pub lab: LabSection,
    pub platform: PlatformSection,
    pub testimonials: TestimonialSection,
    pub about: AboutSection,
    pub contact: ContactSection,
    pub preload: PreloadSettings,
}

impl SiteContent {
    /// Parse the content document compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the embedded document is malformed.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not a valid content document.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Embedded content, or empty content when it cannot be parsed.
    pub fn embedded_or_default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("embedded site content is malformed: {e}");
            Self::default()
        })
    }
}

/// A navigation entry pointing at a section anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub section: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_section: String,
    pub background_image: String,
    /// Max layer shift in px at full pointer deflection.
    pub parallax_strength: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            eyebrow: String::new(),
            title: String::new(),
            subtitle: String::new(),
            cta_label: String::new(),
            cta_section: String::new(),
            background_image: String::new(),
            parallax_strength: 24.0,
        }
    }
}

/// Entrance animation applied to carousel cards once revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    #[default]
    Fade,
    SlideUp,
    Zoom,
}

impl AnimationStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::Fade => "animate-fade",
            Self::SlideUp => "animate-slide-up",
            Self::Zoom => "animate-zoom",
        }
    }
}

/// Shortest autoplay interval honored; faster settings are raised to this.
pub const MIN_AUTOPLAY_MS: u64 = 1000;

/// Display options for a carousel section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Course>,
    pub animation: AnimationStyle,
    pub visible_count: usize,
    /// Autoplay step in ms. `None` disables autoplay; values below
    /// [`MIN_AUTOPLAY_MS`] are raised to it by [`CarouselConfig::autoplay_interval`].
    pub autoplay_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            items: Vec::new(),
            animation: AnimationStyle::default(),
            visible_count: 3,
            autoplay_ms: None,
        }
    }
}

impl CarouselConfig {
    /// Effective autoplay step, never shorter than [`MIN_AUTOPLAY_MS`].
    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.autoplay_ms.map(|ms| Duration::from_millis(ms.max(MIN_AUTOPLAY_MS)))
    }
}

/// Image references a course list renders: each thumbnail followed by its
/// instructor avatar, in display order.
pub fn course_images(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .flat_map(|course| [course.image.as_str(), course.instructor.avatar.as_str()])
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instructor {
    pub name: String,
    pub avatar: String,
    pub title: String,
}

/// Course difficulty. Unknown labels in the catalog map to `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    #[serde(other)]
    Other,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Other => "All levels",
        }
    }

    /// Badge colour modifier.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Beginner => "level-badge--beginner",
            Self::Intermediate => "level-badge--intermediate",
            Self::Advanced => "level-badge--advanced",
            Self::Other => "level-badge--general",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub instructor: Instructor,
    pub level: SkillLevel,
    /// Free-form length, e.g. "8 weeks".
    pub duration: String,
    pub lessons: u32,
    pub rating: f32,
    pub enrolled_students: u32,
}

impl Course {
    /// Star string rounded to the nearest half star, e.g. `★★★★½`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(&self) -> String {
        let halves = (self.rating.clamp(0.0, 5.0) * 2.0).round() as u32;
        let mut out = "★".repeat((halves / 2) as usize);
        if halves % 2 == 1 {
            out.push('½');
        }
        out
    }

    /// Enrollment with thousands separators, e.g. `12,480 students`.
    pub fn enrolled_label(&self) -> String {
        let digits = self.enrolled_students.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let noun = if self.enrolled_students == 1 { "student" } else { "students" };
        format!("{grouped} {noun}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Shortest particle spawn period honored; faster settings are raised to this.
pub const MIN_PARTICLE_INTERVAL_MS: u64 = 50;

/// Hands-on lab showcase: a code workspace, a rendered dashboard, and the
/// particle stream running between them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSection {
    pub title: String,
    pub description: String,
    pub workspace_label: String,
    pub code_sample: String,
    pub tools: Vec<String>,
    pub run_label: String,
    pub visualization_label: String,
    pub visualization_image: String,
    pub visualization_alt: String,
    pub status: String,
    pub tracks: Vec<Feature>,
    pub cta_label: String,
    pub cta_note: String,
    /// Spawn period of the particle stream. Values below
    /// [`MIN_PARTICLE_INTERVAL_MS`] are raised to it by
    /// [`LabSection::particle_interval`].
    pub particle_interval_ms: u64,
}

impl Default for LabSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            workspace_label: String::new(),
            code_sample: String::new(),
            tools: Vec::new(),
            run_label: String::new(),
            visualization_label: String::new(),
            visualization_image: String::new(),
            visualization_alt: String::new(),
            status: String::new(),
            tracks: Vec::new(),
            cta_label: String::new(),
            cta_note: String::new(),
            particle_interval_ms: 200,
        }
    }
}

impl LabSection {
    pub fn particle_interval(&self) -> Duration {
        Duration::from_millis(self.particle_interval_ms.max(MIN_PARTICLE_INTERVAL_MS))
    }

    pub fn image_urls(&self) -> Vec<String> {
        if self.visualization_image.is_empty() { Vec::new() } else { vec![self.visualization_image.clone()] }
    }
}

/// Platform feature grid over a field of floating bubbles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
    pub bubbles: usize,
}

impl Default for PlatformSection {
    fn default() -> Self {
        Self { title: String::new(), subtitle: String::new(), items: Vec::new(), bubbles: 8 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub title: String,
    pub intro: String,
    pub story_title: String,
    /// Story paragraphs, in order.
    pub story: Vec<String>,
    pub highlights: Vec<Feature>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialSection {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
}

/// Preload gate tuning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadSettings {
    /// Give up on a single image after this long. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}
