/// Text rendering of a plan for the terminal
use super::planner::{Plan, PlanEntry};

fn format_entry(entry: &PlanEntry) -> Vec<String> {
    let f = &entry.feasibility;
    let mut lines = Vec::new();
    if f.missing_level > 0 {
        lines.push(format!(
            "  [ ] {} (lvl {}): needs {} more level{}",
            entry.name,
            entry.required_level,
            f.missing_level,
            if f.missing_level == 1 { "" } else { "s" }
        ));
        return lines;
    }

    let mark = if f.is_craftable() { "x" } else { " " };
    let service = entry
        .service
        .as_ref()
        .map(|s| format!(" @ {}", s))
        .unwrap_or_default();
    lines.push(format!(
        "  [{}] {} (lvl {}){}: {} normal / {} fine",
        mark, entry.name, entry.required_level, service, f.normal_craftable, f.fine_craftable
    ));
    for short in &entry.shortfall {
        lines.push(format!(
            "      missing {} {} (have {})",
            short.missing(),
            short.name,
            short.available
        ));
    }
    lines
}

/// Render a plan one profession at a time. With `craftable_only`, recipes
/// that cannot be crafted in either tier are dropped, as are empty groups.
pub fn format_plan_compact(plan: &Plan, craftable_only: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for profession in &plan.professions {
        let entries: Vec<&PlanEntry> = profession
            .entries
            .iter()
            .filter(|e| !craftable_only || e.feasibility.is_craftable())
            .collect();
        if entries.is_empty() {
            continue;
        }
        lines.push(format!("{} (lvl {})", profession.profession, profession.current_level));
        for entry in entries {
            lines.extend(format_entry(entry));
        }
    }
    if lines.is_empty() {
        lines.push("Nothing to craft".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::grouping::UNAFFILIATED_GROUP;
    use crate::crafting::planner::build_plan;
    use crate::crafting::types::{Character, Recipe};

    fn sample_plan() -> Plan {
        let catalog = vec![
            Recipe::new("Birch Plank", "Birch Plank")
                .with_profession("Carpentry", 1)
                .with_material("Wood Scrap", 5)
                .with_service("Workbench"),
            Recipe::new("Oak Plank", "Oak Plank")
                .with_profession("Carpentry", 4)
                .with_material("Oak Log", 1),
            Recipe::new("Crate", "Crate")
                .with_profession("Carpentry", 2)
                .with_material("Wood Scrap", 20),
        ];
        let character = Character::new()
            .with_skill("carpentry", 200)
            .with_item("wood_scrap", 12);
        build_plan(&catalog, &character, None, UNAFFILIATED_GROUP)
    }

    #[test]
    fn renders_all_states() {
        let lines = format_plan_compact(&sample_plan(), false);
        assert_eq!(
            lines,
            vec![
                "Carpentry (lvl 3)",
                "  [x] Birch Plank (lvl 1) @ Workbench: 2 normal / 0 fine",
                "  [ ] Crate (lvl 2): 0 normal / 0 fine",
                "      missing 8 Wood Scrap (have 12)",
                "  [ ] Oak Plank (lvl 4): needs 1 more level",
            ]
        );
    }

    #[test]
    fn craftable_only_filters_entries() {
        let lines = format_plan_compact(&sample_plan(), true);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Birch Plank"));
    }

    #[test]
    fn empty_plan_says_so() {
        assert_eq!(format_plan_compact(&Plan::default(), false), vec!["Nothing to craft"]);
    }
}
