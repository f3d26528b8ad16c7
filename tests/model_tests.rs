#[cfg(test)]
pub mod model_tests {
    use portfolio::data::{self, CERTIFICATES, PROJECTS};
    use portfolio::models::*;

    #[test]
    fn test_image_source_falls_back_once() {
        let mut source = ImageSource::new("/broken.png", "/fallback.png");
        assert_eq!(source.current(), "/broken.png");

        assert!(source.on_error());
        assert_eq!(source.current(), "/fallback.png");

        // The fallback failing too must not loop.
        assert!(!source.on_error());
        assert_eq!(source.current(), "/fallback.png");
    }

    #[test]
    fn test_image_source_settles_failure_seen_before_listener() {
        let mut source = ImageSource::new("/broken.png", "/fallback.png");

        assert!(source.settle(true, 0));
        assert_eq!(source.current(), "/fallback.png");

        // The error event arriving late must not swap again.
        assert!(!source.on_error());
        assert!(!source.settle(true, 0));
    }

    #[test]
    fn test_image_source_settle_ignores_pending_or_loaded() {
        let mut source = ImageSource::new("/photo.png", "/fallback.png");

        assert!(!source.settle(false, 0));
        assert!(!source.settle(true, 1260));
        assert_eq!(source.current(), "/photo.png");

        // Still able to fall back on a later error.
        assert!(source.on_error());
    }

    #[test]
    fn test_certificate_image_fallback_target() {
        let mut source = ImageSource::for_certificate(&CERTIFICATES[0]);
        source.on_error();
        assert_eq!(source.current(), FALLBACK_CERTIFICATE_IMAGE);
    }

    #[test]
    fn test_certificate_link_skips_placeholders() {
        let with_placeholder = &CERTIFICATES[0];
        assert_eq!(with_placeholder.url, Some("#"));
        assert_eq!(with_placeholder.link(), None);

        let without_url = &CERTIFICATES[2];
        assert_eq!(without_url.link(), None);

        let real = Certificate {
            url: Some("https://example.com/verify/42"),
            ..with_placeholder.clone()
        };
        assert_eq!(real.link(), Some("https://example.com/verify/42"));
    }

    #[test]
    fn test_skill_level_boundaries() {
        assert_eq!(SkillLevel::from_percent(0), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_percent(39), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_percent(40), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_percent(69), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_percent(70), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_percent(100), SkillLevel::Advanced);
    }

    #[test]
    fn test_skill_clamps_level() {
        let skill = Skill::new("Rust", 250, "fas fa-code");
        assert_eq!(skill.level(), 100);
        assert_eq!(skill.bar_width(), "100%");
        assert_eq!(skill.label().to_string(), "Advanced");
    }

    #[test]
    fn test_skill_groups_hold_valid_levels() {
        for group in data::SKILL_GROUPS.iter() {
            assert!(!group.skills.is_empty(), "{} has no skills", group.title);
            for skill in group.skills {
                assert!(skill.level() <= Skill::MAX_LEVEL);
            }
        }
    }

    #[test]
    fn test_project_summary_prefers_short_description() {
        let project = &PROJECTS[0];
        assert_eq!(
            project.summary(),
            "A modern e-commerce platform with full shopping functionality"
        );
    }

    #[test]
    fn test_project_summary_truncates_description() {
        let project = Project {
            short_description: None,
            ..PROJECTS[0].clone()
        };

        let summary = project.summary();

        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 83);
        assert!(project.description.starts_with(summary.trim_end_matches("...")));
    }

    #[test]
    fn test_featured_projects() {
        let featured: Vec<_> = data::projects::featured().map(|p| p.id).collect();
        assert_eq!(featured, vec![1]);
    }

    #[test]
    fn test_tech_icon_fallback() {
        assert_eq!(data::tech_icon("React"), "fab fa-react");
        assert_eq!(data::tech_icon("COBOL"), "fas fa-code");
    }
}
