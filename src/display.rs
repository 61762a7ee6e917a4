use colored::Colorize;

use crate::config::FormationTemplate;
use crate::domain::{PositionGroup, RosterEntry, SquadRecord};

const GROUP_ORDER: [PositionGroup; 4] = [
    PositionGroup::Goalkeeper,
    PositionGroup::Defender,
    PositionGroup::Midfielder,
    PositionGroup::Forward,
];

/// `ST   Son Heung-min (50.0, 12.0)` with the code in its group colour
pub fn format_entry(entry: &RosterEntry) -> String {
    let (r, g, b) = entry.position.group().rgb();
    let code = format!("{:<4}", entry.position.as_str()).truecolor(r, g, b).bold();
    format!("{} {} ({:.1}, {:.1})", code, entry.name, entry.x, entry.y)
}

/// Starters grouped by line, then the bench
pub fn format_roster(entries: &[RosterEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    for group in GROUP_ORDER {
        let members: Vec<&RosterEntry> = entries
            .iter()
            .filter(|e| e.is_starter() && e.position.group() == group)
            .collect();
        if members.is_empty() {
            continue;
        }
        lines.push(group.as_str().dimmed().to_string());
        lines.extend(members.into_iter().map(|e| format!("  {}", format_entry(e))));
    }

    let bench: Vec<&RosterEntry> = entries.iter().filter(|e| e.is_bench).collect();
    if !bench.is_empty() {
        lines.push("bench".dimmed().to_string());
        lines.extend(bench.into_iter().map(|e| format!("  {}", format_entry(e))));
    }
    lines
}

pub fn format_formation(formation: &FormationTemplate) -> String {
    let codes: Vec<&str> = formation.slots.iter().map(|s| s.position.as_str()).collect();
    format!(
        "{:<12} {:<8} {}",
        formation.name.bold(),
        formation.ruleset.as_str(),
        codes.join(" ")
    )
}

pub fn format_squad_summary(record: &SquadRecord) -> String {
    let id = record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let updated = record
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!(
        "{:>5}  {:<24} {:<12} {:>2} players  {}",
        id,
        record.name,
        record.formation,
        record.players.len(),
        updated
    )
}
