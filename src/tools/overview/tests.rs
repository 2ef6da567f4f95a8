#![cfg(test)]
mod tests {
    use crate::error::ExtractError;
    use crate::selectors::CREATURE_ROW_SELECTOR;
    use crate::tools::extract::match_creature_row;
    use crate::tools::overview::*;
    use crate::tools::parse::{load_fragment, select_all_inner};
    use crate::types::{ApiDetails, Information};
    use chrono::{DateTime, Utc};

    const BOOSTED_P: &str = r#"<p>Today's boosted creature: <a href="https://www.tibia.com/library/?subtopic=creatures&amp;race=rotworm">Rotworm</a> <img src="https://static.tibia.com/images/library/rotworm.gif" alt="Rotworm"></p>"#;

    fn information() -> Information {
        let ts: DateTime<Utc> = "2026-01-01T00:00:00Z".parse().unwrap();
        Information::new(ApiDetails::default(), ts)
    }

    fn creature_box(race: &str, name: &str) -> String {
        format!(
            r#"<div class="CreatureBox"><a href="https://www.tibia.com/library/?subtopic=creatures&amp;race={race}"><img src="https://static.tibia.com/images/library/{race}.gif" border="0"><div>{name}</div></a></div>"#
        )
    }

    fn library_page(header: &str, boxes: &[String]) -> String {
        format!(
            "<div class=\"BoxContent\">\n<div class=\"InnerTableContainer\">{header}</div>\n<div class=\"CreatureList\">\n{}\n</div>\n</div>",
            boxes.join("\n")
        )
    }

    fn default_page() -> String {
        library_page(
            BOOSTED_P,
            &[
                creature_box("rat", "Rat"),
                creature_box("rotworm", "Rotworm"),
                creature_box("dragonlord", "Dragon&nbsp;Lord"),
                creature_box("x", "X"),
            ],
        )
    }

    #[test]
    fn test_boosted_creature() {
        let res = extract_overview(&default_page(), information()).unwrap();
        assert_eq!(
            res.creatures.boosted,
            OverviewCreature {
                name: "Rotworm".into(),
                race: "rotworm".into(),
                image_url: "https://static.tibia.com/images/library/rotworm.gif".into(),
                featured: true,
            }
        );
    }

    #[test]
    fn test_creature_list_document_order() {
        let res = extract_overview(&default_page(), information()).unwrap();
        let races: Vec<&str> = res
            .creatures
            .creatures
            .iter()
            .map(|c| c.race.as_str())
            .collect();
        assert_eq!(races, vec!["rat", "rotworm", "dragonlord"]);
        assert_eq!(res.creatures.creatures[2].name, "Dragon Lord");
        assert_eq!(
            res.creatures.creatures[0].image_url,
            "https://static.tibia.com/images/library/rat.gif"
        );
    }

    #[test]
    fn test_serialized_boxes_match_with_extra_attributes() {
        let boxes = [
            r#"<div class="CreatureBox"><a href="https://www.tibia.com/library/?subtopic=creatures&amp;race=rat"><img src="https://static.tibia.com/images/library/rat.gif" border="0" alt="Rat" width="64"><div>Rat</div></a></div>"#.to_string(),
            r#"<div class="CreatureBox"><a href="https://www.tibia.com/library/?subtopic=creatures&amp;race=bat"><img border="0" src="https://static.tibia.com/images/library/bat.gif"><div>Bat</div></a></div>"#.to_string(),
        ];
        let page = library_page(BOOSTED_P, &boxes);

        let doc = load_fragment(&page).unwrap();
        let rows = select_all_inner(&doc, &CREATURE_ROW_SELECTOR);
        let races: Vec<String> = rows
            .iter()
            .filter_map(|row| match_creature_row(row))
            .map(|caps| caps.race)
            .collect();
        assert_eq!(races, vec!["rat", "bat"]);

        for _ in 0..16 {
            let res = extract_overview(&page, information()).unwrap();
            let names: Vec<&str> = res.creatures.creatures.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Rat", "Bat"]);
            assert_eq!(
                res.creatures.creatures[1].image_url,
                "https://static.tibia.com/images/library/bat.gif"
            );
        }
    }

    #[test]
    fn test_single_character_name_excluded() {
        let res = extract_overview(&default_page(), information()).unwrap();
        assert!(res.creatures.creatures.iter().all(|c| c.race != "x"));
    }

    #[test]
    fn test_name_decoding_to_one_char_excluded() {
        let page = library_page(BOOSTED_P, &[creature_box("amp", "&amp;"), creature_box("bat", "Bat")]);
        let res = extract_overview(&page, information()).unwrap();
        assert_eq!(res.creatures.creatures.len(), 1);
        assert_eq!(res.creatures.creatures[0].name, "Bat");
    }

    #[test]
    fn test_listed_boosted_race_is_featured_too() {
        let res = extract_overview(&default_page(), information()).unwrap();
        let featured: Vec<&str> = res
            .creatures
            .creatures
            .iter()
            .filter(|c| c.featured)
            .map(|c| c.race.as_str())
            .collect();
        assert_eq!(featured, vec!["rotworm"]);
    }

    #[test]
    fn test_boosted_absent_from_list_features_nothing() {
        let page = library_page(BOOSTED_P, &[creature_box("rat", "Rat"), creature_box("bat", "Bat")]);
        let res = extract_overview(&page, information()).unwrap();
        assert!(res.creatures.boosted.featured);
        assert!(res.creatures.creatures.iter().all(|c| !c.featured));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let page = library_page(BOOSTED_P, &[]);
        let res = extract_overview(&page, information()).unwrap();
        assert!(res.creatures.creatures.is_empty());
        assert_eq!(res.creatures.boosted.race, "rotworm");
    }

    #[test]
    fn test_missing_header_is_structure_error() {
        let page = r#"<div class="BoxContent"><div><div>Rat</div></div></div>"#;
        assert_eq!(
            extract_overview(page, information()).unwrap_err(),
            ExtractError::structure_not_found(".InnerTableContainer p")
        );
    }

    #[test]
    fn test_header_without_anchor() {
        let page = library_page(
            r#"<p>No boosted creature today <img src="https://static.tibia.com/images/library/none.gif"></p>"#,
            &[creature_box("rat", "Rat")],
        );
        assert!(matches!(
            extract_overview(&page, information()).unwrap_err(),
            ExtractError::BoostedCreatureMalformed { field: "race and name" }
        ));
    }

    #[test]
    fn test_header_without_image() {
        let page = library_page(
            r#"<p>Today's boosted creature: <a href="https://www.tibia.com/library/?subtopic=creatures&amp;race=rotworm">Rotworm</a></p>"#,
            &[creature_box("rat", "Rat")],
        );
        assert_eq!(
            extract_overview(&page, information()).unwrap_err(),
            ExtractError::BoostedCreatureMalformed { field: "image" }
        );
    }

    #[test]
    fn test_not_markup() {
        assert_eq!(
            extract_overview("rotworm", information()).unwrap_err(),
            ExtractError::MarkupParse
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let page = default_page();
        let a = extract_overview(&page, information()).unwrap();
        let b = extract_overview(&page, information()).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_json_wire_names() {
        let res = extract_overview(&default_page(), information()).unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["creatures"]["boosted"]["featured"], true);
        assert_eq!(json["creatures"]["creature_list"][0]["name"], "Rat");
        assert_eq!(json["creatures"]["creature_list"][0]["image_url"], "https://static.tibia.com/images/library/rat.gif");
        assert!(json["information"]["api"]["version"].is_string());
    }
}
