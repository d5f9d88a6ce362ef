use crate::calendar::Categories;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
    pub conflicting: bool,
}

/// Category key, independent of month and filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn build(categories: &Categories, fallback: &str) -> Self {
        let entries = categories
            .iter()
            .map(|c| LegendEntry {
                name: c.name.clone(),
                color: c.color.clone().unwrap_or_else(|| fallback.to_string()),
                conflicting: c.conflicting,
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventRecord;

    #[test]
    fn one_entry_per_category_with_fallback() {
        let records: Vec<EventRecord> = serde_json::from_str(
            r##"[
                {"ActivityService": "Art", "ActSerColor": "#f00"},
                {"ActivityService": "Music"},
                {"ActivityService": "Art", "ActSerColor": "#0f0"}
            ]"##,
        )
        .unwrap();
        let legend = Legend::build(&Categories::from_records(&records), "#000");

        assert_eq!(
            legend.entries,
            vec![
                LegendEntry {
                    name: "Art".into(),
                    color: "#f00".into(),
                    conflicting: true
                },
                LegendEntry {
                    name: "Music".into(),
                    color: "#000".into(),
                    conflicting: false
                },
            ]
        );
    }
}
