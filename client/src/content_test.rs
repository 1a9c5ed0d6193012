use super::*;

#[test]
fn embedded_content_parses() {
    let content = SiteContent::embedded().expect("embedded site.json should parse");
    assert_eq!(content.brand, "Coursewave");
    assert!(!content.courses.items.is_empty());
    assert!(!content.lab.tracks.is_empty());
    assert!(!content.platform.items.is_empty());
    assert!(!content.testimonials.items.is_empty());
    assert!(!content.about.story.is_empty());
    assert_eq!(content.preload.timeout_ms, None);
}

#[test]
fn embedded_nav_targets_are_unique() {
    let content = SiteContent::embedded_or_default();
    let mut sections = content.nav.iter().map(|link| link.section.as_str()).collect::<Vec<_>>();
    let before = sections.len();
    sections.sort_unstable();
    sections.dedup();
    assert_eq!(sections.len(), before);
    assert!(sections.contains(&content.hero.cta_section.as_str()));
}

#[test]
fn embedded_nav_covers_every_section() {
    let content = SiteContent::embedded_or_default();
    let sections = content.nav.iter().map(|link| link.section.as_str()).collect::<Vec<_>>();
    assert_eq!(sections, vec!["home", "courses", "features", "assistant", "testimonials", "about", "contact"]);
}

#[test]
fn course_images_pair_thumbnail_with_avatar() {
    let content = SiteContent::embedded_or_default();
    let urls = course_images(&content.courses.items);
    assert_eq!(urls.len(), content.courses.items.len() * 2);
    for (pair, course) in urls.chunks(2).zip(&content.courses.items) {
        assert_eq!(pair[0], course.image);
        assert_eq!(pair[1], course.instructor.avatar);
    }
}

#[test]
fn course_images_skip_missing_avatars() {
    let courses = vec![
        Course { image: "/a.svg".to_owned(), ..Course::default() },
        Course {
            image: "/b.svg".to_owned(),
            instructor: Instructor { avatar: "/b-face.svg".to_owned(), ..Instructor::default() },
            ..Course::default()
        },
    ];
    assert_eq!(course_images(&courses), vec!["/a.svg", "/b.svg", "/b-face.svg"]);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let content = SiteContent::from_json(r#"{ "brand": "Tiny" }"#).unwrap();
    assert_eq!(content.brand, "Tiny");
    assert!(content.nav.is_empty());
    assert_eq!(content.courses.visible_count, 3);
    assert_eq!(content.courses.animation, AnimationStyle::Fade);
    assert_eq!(content.hero.parallax_strength, 24.0);
    assert_eq!(content.lab.particle_interval_ms, 200);
    assert_eq!(content.platform.bubbles, 8);
    assert!(content.about.story.is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(SiteContent::from_json("{ not json").is_err());
}

#[test]
fn animation_style_uses_kebab_case() {
    let style: AnimationStyle = serde_json::from_str(r#""slide-up""#).unwrap();
    assert_eq!(style, AnimationStyle::SlideUp);
    assert_eq!(style.class(), "animate-slide-up");
    assert!(serde_json::from_str::<AnimationStyle>(r#""bounce""#).is_err());
}

#[test]
fn preload_timeout_is_optional() {
    let content = SiteContent::from_json(r#"{ "preload": { "timeout_ms": 8000 } }"#).unwrap();
    assert_eq!(content.preload.timeout_ms, Some(8000));
}

#[test]
fn stars_round_to_half() {
    let mut course = Course { rating: 4.8, ..Course::default() };
    assert_eq!(course.stars(), "★★★★★");
    course.rating = 4.3;
    assert_eq!(course.stars(), "★★★★½");
    course.rating = 9.0;
    assert_eq!(course.stars(), "★★★★★");
    course.rating = 0.0;
    assert_eq!(course.stars(), "");
}

#[test]
fn enrolled_label_groups_thousands() {
    let mut course = Course { enrolled_students: 12_480, ..Course::default() };
    assert_eq!(course.enrolled_label(), "12,480 students");
    course.enrolled_students = 1_245_000;
    assert_eq!(course.enrolled_label(), "1,245,000 students");
    course.enrolled_students = 999;
    assert_eq!(course.enrolled_label(), "999 students");
    course.enrolled_students = 1;
    assert_eq!(course.enrolled_label(), "1 student");
}

#[test]
fn skill_level_badges_differ_per_level() {
    let levels: Vec<SkillLevel> = serde_json::from_str(r#"["Beginner", "Intermediate", "Advanced", "Expert"]"#).unwrap();
    assert_eq!(levels[3], SkillLevel::Other);
    assert_eq!(levels[3].label(), "All levels");
    let mut badges = levels.iter().map(|l| l.badge_class()).collect::<Vec<_>>();
    badges.dedup();
    assert_eq!(badges.len(), 4);
    assert_eq!(SkillLevel::Advanced.badge_class(), "level-badge--advanced");
}

#[test]
fn course_accepts_partial_records() {
    let course: Course = serde_json::from_str(r#"{ "id": "x", "title": "X", "level": "Advanced" }"#).unwrap();
    assert_eq!(course.level, SkillLevel::Advanced);
    assert!(course.instructor.name.is_empty());
    assert_eq!(course.enrolled_students, 0);
}

#[test]
fn autoplay_interval_has_a_floor() {
    let mut config = CarouselConfig { autoplay_ms: Some(250), ..CarouselConfig::default() };
    assert_eq!(config.autoplay_interval(), Some(Duration::from_millis(MIN_AUTOPLAY_MS)));
    config.autoplay_ms = Some(6000);
    assert_eq!(config.autoplay_interval(), Some(Duration::from_millis(6000)));
    config.autoplay_ms = None;
    assert_eq!(config.autoplay_interval(), None);
}

#[test]
fn lab_preloads_only_a_configured_image() {
    let mut lab = LabSection::default();
    assert!(lab.image_urls().is_empty());
    lab.visualization_image = "/images/lab/dashboard.svg".to_owned();
    assert_eq!(lab.image_urls(), vec!["/images/lab/dashboard.svg"]);
}

#[test]
fn particle_interval_has_a_floor() {
    let mut lab = LabSection { particle_interval_ms: 5, ..LabSection::default() };
    assert_eq!(lab.particle_interval(), Duration::from_millis(MIN_PARTICLE_INTERVAL_MS));
    lab.particle_interval_ms = 200;
    assert_eq!(lab.particle_interval(), Duration::from_millis(200));
}
