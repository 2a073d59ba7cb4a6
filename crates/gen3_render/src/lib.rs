//! Shared text and JSON rendering for decoded save data.
//!
//! The core library reports species, moves, and items as numeric ids;
//! an optional [`NameCatalog`] loaded from plain-text data files turns
//! those into display names. Without a catalog every id renders as a
//! `#NNN` placeholder, so the renderers work on a bare decode too.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use gen3_core::core_api::{IntegrityWarning, RosterRecord, TrainerRecord};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// EV/IV labels in substructure storage order.
const STAT_LABELS: [&str; 6] = ["HP", "Atk", "Def", "Spe", "SpA", "SpD"];

/// Id-to-name lookups loaded from a data directory.
///
/// `Species.txt`, `Moves.txt`, and `Items.txt` hold one name per line,
/// 1-indexed; `species_abilities.csv` (optional) maps a species name to
/// its primary, secondary, and hidden abilities.
#[derive(Debug, Clone, Default)]
pub struct NameCatalog {
    species: Vec<String>,
    moves: Vec<String>,
    items: Vec<String>,
    abilities: HashMap<String, [String; 3]>,
}

impl NameCatalog {
    pub fn load_dir(dir: &Path) -> io::Result<Self> {
        let species = load_lookup(&dir.join("Species.txt"))?;
        let moves = load_lookup(&dir.join("Moves.txt"))?;
        let items = load_lookup(&dir.join("Items.txt"))?;

        let abilities_path = dir.join("species_abilities.csv");
        let abilities = if abilities_path.is_file() {
            parse_abilities(&fs::read_to_string(&abilities_path)?)
        } else {
            HashMap::new()
        };

        Ok(Self {
            species,
            moves,
            items,
            abilities,
        })
    }

    pub fn species(&self, id: u16) -> Option<&str> {
        lookup(&self.species, id)
    }

    pub fn move_name(&self, id: u16) -> Option<&str> {
        lookup(&self.moves, id)
    }

    pub fn item(&self, id: u16) -> Option<&str> {
        lookup(&self.items, id)
    }

    /// Ability name for a species and slot (0 primary, 1 secondary,
    /// 2 hidden).
    pub fn ability(&self, species: &str, slot: u8) -> Option<&str> {
        let entry = self.abilities.get(&species.to_lowercase())?;
        let name = match slot {
            2 => &entry[2],
            1 => &entry[1],
            _ => &entry[0],
        };
        if name.is_empty() { None } else { Some(name) }
    }
}

/// Prepend a dummy entry so that `names[id]` lines up with 1-indexed
/// data files.
fn load_lookup(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let mut names = vec![String::new()];
    names.extend(text.lines().map(|line| line.trim().to_string()));
    Ok(names)
}

fn lookup(names: &[String], id: u16) -> Option<&str> {
    names
        .get(id as usize)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}

fn parse_abilities(csv: &str) -> HashMap<String, [String; 3]> {
    let mut map = HashMap::new();
    for line in csv.lines().skip(1) {
        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() >= 4 {
            map.insert(
                cols[0].trim().to_lowercase(),
                [
                    cols[1].trim().to_string(),
                    cols[2].trim().to_string(),
                    cols[3].trim().to_string(),
                ],
            );
        }
    }
    map
}

pub fn species_label(catalog: Option<&NameCatalog>, id: u16) -> String {
    catalog
        .and_then(|c| c.species(id))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{id:03}"))
}

pub fn move_label(catalog: Option<&NameCatalog>, id: u16) -> String {
    catalog
        .and_then(|c| c.move_name(id))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{id:03}"))
}

pub fn item_label(catalog: Option<&NameCatalog>, id: u16) -> String {
    catalog
        .and_then(|c| c.item(id))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{id:03}"))
}

/// Battle-simulator import block for one roster record.
pub fn render_export(record: &RosterRecord, catalog: Option<&NameCatalog>) -> String {
    let species = species_label(catalog, record.species_id);

    let mut out = String::new();
    match record.held_item_id {
        Some(item) => {
            let _ = writeln!(
                out,
                "{} ({}) @ {}",
                record.nickname,
                species,
                item_label(catalog, item)
            );
        }
        None => {
            let _ = writeln!(out, "{} ({})", record.nickname, species);
        }
    }
    let _ = writeln!(out, "Level: {}", record.level);
    let _ = writeln!(out, "{} Nature", record.nature);
    if let Some(ability) = catalog.and_then(|c| c.ability(&species, record.ability_slot)) {
        let _ = writeln!(out, "Ability: {ability}");
    }
    if let Some(line) = spread_line(&record.evs, |ev| ev != 0) {
        let _ = writeln!(out, "EVs: {line}");
    }
    if let Some(line) = spread_line(&record.ivs, |iv| iv != 31) {
        let _ = writeln!(out, "IVs: {line}");
    }
    for m in &record.moves {
        let _ = writeln!(out, "- {}", move_label(catalog, *m));
    }
    out.trim_end().to_string()
}

/// `"4 HP / 252 Def"`-style spread listing only the entries `keep`
/// selects; `None` when nothing qualifies.
fn spread_line(values: &[u8; 6], keep: impl Fn(u8) -> bool) -> Option<String> {
    let parts: Vec<String> = values
        .iter()
        .zip(STAT_LABELS)
        .filter(|&(&v, _)| keep(v))
        .map(|(&v, label)| format!("{v} {label}"))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}

/// Short trainer summary for terminal output.
pub fn render_trainer_text(trainer: &TrainerRecord) -> String {
    format!(
        "Trainer: {} ({})\nID: {:05}\nSID: {:05}",
        trainer.name, trainer.gender, trainer.trainer_id, trainer.secret_id
    )
}

pub fn trainer_to_json(trainer: &TrainerRecord) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(trainer.name.clone()));
    m.insert(
        "gender".to_string(),
        JsonValue::String(trainer.gender.to_string()),
    );
    m.insert("trainer_id".to_string(), JsonValue::from(trainer.trainer_id));
    m.insert("secret_id".to_string(), JsonValue::from(trainer.secret_id));
    JsonValue::Object(m)
}

pub fn record_to_json(record: &RosterRecord, catalog: Option<&NameCatalog>) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert(
        "nickname".to_string(),
        JsonValue::String(record.nickname.clone()),
    );
    m.insert(
        "species".to_string(),
        JsonValue::String(species_label(catalog, record.species_id)),
    );
    m.insert("species_id".to_string(), JsonValue::from(record.species_id));
    m.insert("level".to_string(), JsonValue::from(record.level));
    m.insert("experience".to_string(), JsonValue::from(record.experience));
    m.insert(
        "nature".to_string(),
        JsonValue::String(record.nature.clone()),
    );
    m.insert(
        "item".to_string(),
        match record.held_item_id {
            Some(id) => JsonValue::String(item_label(catalog, id)),
            None => JsonValue::Null,
        },
    );
    m.insert(
        "ot".to_string(),
        JsonValue::String(record.ot_name.clone()),
    );
    m.insert("personality".to_string(), JsonValue::from(record.personality));
    m.insert(
        "hp".to_string(),
        JsonValue::String(format!("{}/{}", record.current_hp, record.max_hp)),
    );
    m.insert(
        "stats".to_string(),
        serde_json::json!({
            "attack": record.stats.attack,
            "defense": record.stats.defense,
            "speed": record.stats.speed,
            "sp_attack": record.stats.sp_attack,
            "sp_defense": record.stats.sp_defense,
        }),
    );
    m.insert(
        "moves".to_string(),
        JsonValue::Array(
            record
                .moves
                .iter()
                .map(|&id| {
                    let mut mv = JsonMap::new();
                    mv.insert("id".to_string(), JsonValue::from(id));
                    mv.insert(
                        "name".to_string(),
                        JsonValue::String(move_label(catalog, id)),
                    );
                    JsonValue::Object(mv)
                })
                .collect(),
        ),
    );
    m.insert(
        "evs".to_string(),
        JsonValue::Array(record.evs.iter().map(|&v| JsonValue::from(v)).collect()),
    );
    m.insert(
        "ivs".to_string(),
        JsonValue::Array(record.ivs.iter().map(|&v| JsonValue::from(v)).collect()),
    );
    JsonValue::Object(m)
}

/// Canonical JSON document: trainer, party, and integrity warnings.
pub fn render_json_full(
    trainer: Option<&TrainerRecord>,
    party: Option<&[RosterRecord]>,
    warnings: &[IntegrityWarning],
    catalog: Option<&NameCatalog>,
) -> JsonValue {
    let mut out = JsonMap::new();
    if let Some(trainer) = trainer {
        out.insert("trainer".to_string(), trainer_to_json(trainer));
    }
    if let Some(party) = party {
        out.insert(
            "party".to_string(),
            JsonValue::Array(
                party
                    .iter()
                    .map(|record| record_to_json(record, catalog))
                    .collect(),
            ),
        );
    }
    out.insert(
        "warnings".to_string(),
        JsonValue::Array(
            warnings
                .iter()
                .map(|w| {
                    let mut m = JsonMap::new();
                    m.insert("section_id".to_string(), JsonValue::from(w.section_id));
                    m.insert(
                        "signature".to_string(),
                        JsonValue::String(format!("{:#010x}", w.signature)),
                    );
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );
    JsonValue::Object(out)
}
