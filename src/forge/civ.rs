//! Finished per-player civilization record

use crate::allocator::GeneratedItem;
use crate::catalog::SynergyRule;
use crate::scoring::{Difficulty, PhaseRatings};
use crate::settings::{Archetype, BUDGET};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const REPORT_RULE: &str = "========================================";

/// One player's generated civilization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCiv {
    pub id: String,
    pub player_name: String,
    pub archetype: Archetype,
    /// Seed the loadout was generated from
    pub seed: String,
    pub points_spent: u32,
    /// Items in purchase order
    pub items: Vec<GeneratedItem>,
    pub ratings: PhaseRatings,
    pub summary: String,
    /// Dominant spending group; `None` for an empty loadout
    pub primary_category: Option<String>,
    pub reasoning: String,
    pub power_score: u8,
    pub legendary: bool,
    pub difficulty: Difficulty,
    pub synergies: Vec<SynergyRule>,
    pub warnings: Vec<String>,
    pub reroll_used: bool,
    pub is_valid: bool,
}

impl PlayerCiv {
    /// Points left unspent out of the fixed budget
    pub fn residual_points(&self) -> u32 {
        BUDGET.saturating_sub(self.points_spent)
    }

    pub fn powers(&self) -> impl Iterator<Item = &GeneratedItem> {
        self.items.iter().filter(|item| item.is_power())
    }

    /// Plain-text card for sharing outside the app
    pub fn tactical_report(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Tactical Data: {}", self.player_name);
        let _ = writeln!(text, "Spec: {}", self.summary);
        let _ = writeln!(text, "Power Level: {}", self.power_score);
        let _ = writeln!(text, "{}", REPORT_RULE);
        for (i, item) in self.items.iter().enumerate() {
            let _ = writeln!(text, "[{:02}] {} (Cost: {})", i + 1, item.name, item.cost);
        }
        let _ = writeln!(text, "{}", REPORT_RULE);
        let _ = writeln!(text, "Residual Points: {}", self.residual_points());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::ItemKind;

    fn civ() -> PlayerCiv {
        PlayerCiv {
            id: "civ-0".to_string(),
            player_name: "Taco".to_string(),
            archetype: Archetype::Economic,
            seed: "EF-1-Taco-0".to_string(),
            points_spent: 39,
            items: vec![
                GeneratedItem {
                    name: "20% Farming".to_string(),
                    kind: ItemKind::Boost,
                    category: None,
                    cost: 9,
                    original_cost: 9,
                    inflation_applied: 0,
                    description: None,
                    trace: String::new(),
                },
                GeneratedItem {
                    name: "Expansionism".to_string(),
                    kind: ItemKind::Power,
                    category: None,
                    cost: 30,
                    original_cost: 30,
                    inflation_applied: 0,
                    description: Some("Start with extra settlers".to_string()),
                    trace: String::new(),
                },
            ],
            ratings: PhaseRatings::default(),
            summary: "Economic doctrine built around Civilization Powers".to_string(),
            primary_category: Some("Civilization Powers".to_string()),
            reasoning: String::new(),
            power_score: 42,
            legendary: false,
            difficulty: Difficulty::Beginner,
            synergies: Vec::new(),
            warnings: Vec::new(),
            reroll_used: false,
            is_valid: true,
        }
    }

    #[test]
    fn test_tactical_report_layout() {
        let report = civ().tactical_report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Tactical Data: Taco");
        assert_eq!(lines[2], "Power Level: 42");
        assert_eq!(lines[4], "[01] 20% Farming (Cost: 9)");
        assert_eq!(lines[5], "[02] Expansionism (Cost: 30)");
        assert_eq!(lines[7], "Residual Points: 61");
    }

    #[test]
    fn test_residual_points_against_fixed_budget() {
        let mut civ = civ();
        assert_eq!(civ.residual_points(), 61);
        civ.points_spent = 100;
        assert_eq!(civ.residual_points(), 0);
    }

    #[test]
    fn test_powers_iterator() {
        let civ = civ();
        let names: Vec<&str> = civ.powers().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Expansionism"]);
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let json = serde_json::to_value(civ()).unwrap();
        assert_eq!(json["player_name"], "Taco");
        assert_eq!(json["items"][1]["kind"], "power");
        assert_eq!(json["difficulty"], "Beginner");
    }
}
