use super::*;
use tempfile::tempdir;

mod common {
    use super::*;

    pub(super) fn titles(catalog: &Catalog) -> Vec<&str> {
        catalog.items().iter().map(|item| item.title()).collect()
    }
}

mod from_titles {
    use super::common::*;
    use super::*;

    #[test]
    fn test_assigns_sequential_ids() {
        let catalog = Catalog::from_titles(["Firefox Browser", "File Manager"]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, ItemId::new(0));
        assert_eq!(catalog.items()[1].id, ItemId::new(1));
        assert_eq!(titles(&catalog), vec!["Firefox Browser", "File Manager"]);
    }

    #[test]
    fn test_rejects_blank_title() {
        let err = Catalog::from_titles(["Calculator", "   "]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTitleAt { position: 1, .. }));
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::from_titles(Vec::<String>::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.is_sorted_by_title());
    }
}

mod parse {
    use super::common::*;
    use super::*;

    #[test]
    fn test_lines_skip_blank() {
        let catalog = Catalog::parse_lines("Firefox Browser\n\n  \nCalculator\n").unwrap();

        assert_eq!(titles(&catalog), vec!["Firefox Browser", "Calculator"]);
        assert_eq!(catalog.items()[1].id, ItemId::new(1));
    }

    #[test]
    fn test_lines_report_real_line_number() {
        let long = "x".repeat(crate::types::MAX_TITLE_LENGTH + 1);
        let content = format!("a\n\n{long}\n");

        let err = Catalog::parse_lines(&content).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTitle { line: 3, .. }));
    }

    #[test]
    fn test_json() {
        let catalog = Catalog::parse_json(
            r#"[{"id": 7, "title": "Terminal"}, {"id": 3, "title": "Text Editor"}]"#,
        )
        .unwrap();

        assert_eq!(catalog.get(ItemId::new(3)).unwrap().title(), "Text Editor");
        assert!(catalog.get(ItemId::new(0)).is_none());
    }

    #[test]
    fn test_json_rejects_duplicate_id() {
        let err =
            Catalog::parse_json(r#"[{"id": 1, "title": "a"}, {"id": 1, "title": "b"}]"#)
                .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == ItemId::new(1)));
    }

    #[test]
    fn test_json_rejects_empty_title() {
        let err = Catalog::parse_json(r#"[{"id": 1, "title": "  "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}

mod load {
    use super::common::*;
    use super::*;

    #[test]
    fn test_load_by_extension() {
        let tmp = tempdir().unwrap();
        let txt = tmp.path().join("apps.txt");
        let json = tmp.path().join("apps.JSON");
        std::fs::write(&txt, "Calculator\nFile Manager\n").unwrap();
        std::fs::write(&json, r#"[{"id": 0, "title": "Calculator"}]"#).unwrap();

        assert_eq!(titles(&Catalog::load(&txt).unwrap()), vec!["Calculator", "File Manager"]);
        assert_eq!(titles(&Catalog::load(&json).unwrap()), vec!["Calculator"]);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempdir().unwrap();
        let err = Catalog::load(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

mod sort_by_title {
    use super::common::*;
    use super::*;

    #[test]
    fn test_sorts_case_insensitively() {
        let mut catalog =
            Catalog::from_titles(["firefox Browser", "Calculator", "File Manager"]).unwrap();
        assert!(!catalog.is_sorted_by_title());

        catalog.sort_by_title();

        assert!(catalog.is_sorted_by_title());
        assert_eq!(
            titles(&catalog),
            vec!["Calculator", "File Manager", "firefox Browser"]
        );
    }
}

mod item_id {
    use super::*;

    #[test]
    fn test_positions_map_to_ids() {
        assert_eq!(item_id(0).unwrap(), ItemId::new(0));
        assert_eq!(item_id(u32::MAX as usize).unwrap(), ItemId::new(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_position_past_u32_is_rejected() {
        let position = u32::MAX as usize + 1;
        let err = item_id(position).unwrap_err();
        assert!(matches!(err, CatalogError::TooManyItems(p) if p == position));
    }
}
