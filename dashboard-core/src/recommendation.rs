use capacity_schema::{display_value, OpenMap, Recommendation, RecommendationStatus};

/// The panel only ever shows the newest recommendation.
pub fn latest(recommendations: &[Recommendation]) -> Option<&Recommendation> {
    recommendations.first()
}

pub fn badge_class(status: RecommendationStatus) -> &'static str {
    match status {
        RecommendationStatus::Approved => "badge approved",
        RecommendationStatus::Rejected => "badge rejected",
        _ => "badge pending",
    }
}

/// `oxygen_liters` -> `Oxygen Liters`.
pub fn supply_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn supply_rows(supplies: &OpenMap) -> Vec<(String, String)> {
    supplies
        .iter()
        .map(|(key, value)| (supply_label(key), display_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_schema::Staffing;

    fn rec(id: &str, status: RecommendationStatus, confidence: f64) -> Recommendation {
        Recommendation {
            id: id.into(),
            recommended_staffing: Staffing {
                doctors: 4,
                nurses: 11,
            },
            recommended_supplies: OpenMap::new().with("oxygen_liters", 800).with("beds", 12),
            confidence,
            status,
        }
    }

    #[test]
    fn first_recommendation_drives_the_panel() {
        let list = vec![
            rec("new", RecommendationStatus::Approved, 0.91),
            rec("old", RecommendationStatus::Rejected, 0.4),
        ];
        let shown = latest(&list).expect("latest");
        assert_eq!(shown.id, "new");
        assert_eq!(badge_class(shown.status), "badge approved");
        assert_eq!(crate::format::format_percent(shown.confidence), "91.0%");
    }

    #[test]
    fn empty_list_has_nothing_to_show() {
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn non_final_statuses_share_pending_badge() {
        assert_eq!(badge_class(RecommendationStatus::Pending), "badge pending");
        assert_eq!(badge_class(RecommendationStatus::Modified), "badge pending");
        assert_eq!(badge_class(RecommendationStatus::Rejected), "badge rejected");
    }

    #[test]
    fn supply_rows_are_labelled() {
        let rows = supply_rows(&rec("r", RecommendationStatus::Pending, 0.5).recommended_supplies);
        assert_eq!(
            rows,
            vec![
                ("Beds".to_string(), "12".to_string()),
                ("Oxygen Liters".to_string(), "800".to_string()),
            ]
        );
    }
}
