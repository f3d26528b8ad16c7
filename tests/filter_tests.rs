mod common;

#[cfg(test)]
pub mod filter_tests {
    use super::common::*;

    use portfolio::data::{CERTIFICATES, PROJECTS};
    use portfolio::models::*;

    #[test]
    fn test_filter_parse_all_variants() {
        assert_eq!(CategoryFilter::<CertificateCategory>::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<CertificateCategory>::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<CertificateCategory>::parse(""), CategoryFilter::All);
    }

    #[test]
    fn test_filter_parse_known_category() {
        assert_eq!(
            CategoryFilter::parse("seminar"),
            CategoryFilter::Only(CertificateCategory::Seminar)
        );
        assert_eq!(
            CategoryFilter::parse("Ecommerce"),
            CategoryFilter::Only(ProjectCategory::Ecommerce)
        );
    }

    #[test]
    fn test_filter_parse_unknown_category() {
        assert_eq!(
            CategoryFilter::<CertificateCategory>::parse("workshop"),
            CategoryFilter::Unknown("workshop".to_string())
        );
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let items = get_seed_tagged();
        let filtered = CategoryFilter::All.apply(&items);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_all_keeps_projects_unchanged() {
        let filtered = CategoryFilter::<ProjectCategory>::parse("all").apply(PROJECTS);

        let expected: Vec<&Project> = PROJECTS.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_only_preserves_order() {
        let items = get_seed_tagged();
        let filtered = CategoryFilter::Only(CertificateCategory::Certificate).apply(&items);
        assert_eq!(ids(&filtered), vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_unknown_returns_nothing() {
        let items = get_seed_tagged();
        let filtered = CategoryFilter::<CertificateCategory>::parse("bogus").apply(&items);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_empty_category_returns_nothing() {
        let filtered = CategoryFilter::Only(ProjectCategory::Extensible).apply(PROJECTS);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_seed_certificates_split() {
        let seminars = CategoryFilter::Only(CertificateCategory::Seminar).apply(CERTIFICATES);
        let certificates = CategoryFilter::Only(CertificateCategory::Certificate).apply(CERTIFICATES);

        assert_eq!(CERTIFICATES.len(), 15);
        assert_eq!(
            seminars.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3, 5, 9, 11, 14]
        );
        assert_eq!(seminars.len() + certificates.len(), CERTIFICATES.len());
    }

    #[test]
    fn test_filter_key_round_trips_through_parse() {
        let filter = CategoryFilter::Only(CertificateCategory::Seminar);
        assert_eq!(filter.key(), "seminar");
        assert_eq!(CategoryFilter::parse(&filter.key()), filter);
    }
}
