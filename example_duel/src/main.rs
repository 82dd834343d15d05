//! Example duel - a marksman build squaring off against a tank build
//!
//! This example shows:
//! - Loading vendor-format champion and item data (calc_core)
//! - Reducing build events into immutable sessions
//! - Penetration resolution and the damage summary for both directions
//! - Heuristic ability damage estimation from a tooltip

use calc_core::damage::{estimate_ability_damage, AbilityEstimator, TooltipEstimator};
use calc_core::prelude::*;

const CHAMPIONS: &str = r#"{
    "data": {
        "Ashe": {
            "id": "Ashe",
            "key": "22",
            "name": "Ashe",
            "title": "the Frost Archer",
            "tags": ["Marksman"],
            "partype": "Mana",
            "stats": {
                "hp": 610.0, "hpperlevel": 101.0,
                "mp": 280.0, "mpperlevel": 32.0,
                "movespeed": 325.0, "attackrange": 600.0,
                "armor": 26.0, "armorperlevel": 4.6,
                "spellblock": 30.0, "spellblockperlevel": 1.3,
                "hpregen": 3.5, "hpregenperlevel": 0.55,
                "mpregen": 7.0, "mpregenperlevel": 0.65,
                "attackdamage": 59.0, "attackdamageperlevel": 2.95,
                "attackspeed": 0.658, "attackspeedperlevel": 3.33
            }
        },
        "Malphite": {
            "id": "Malphite",
            "key": "54",
            "name": "Malphite",
            "title": "Shard of the Monolith",
            "tags": ["Tank"],
            "partype": "Mana",
            "stats": {
                "hp": 644.0, "hpperlevel": 104.0,
                "mp": 280.0, "mpperlevel": 60.0,
                "movespeed": 335.0, "attackrange": 125.0,
                "armor": 37.0, "armorperlevel": 4.95,
                "spellblock": 28.0, "spellblockperlevel": 1.55,
                "hpregen": 7.0, "hpregenperlevel": 0.55,
                "mpregen": 7.3, "mpregenperlevel": 0.55,
                "attackdamage": 62.0, "attackdamageperlevel": 4.0,
                "attackspeed": 0.736, "attackspeedperlevel": 3.4
            }
        }
    }
}"#;

const ITEMS: &str = r#"{
    "data": {
        "3031": {
            "name": "Infinity Edge",
            "description": "<stats>+65 Attack Damage</stats><passive>Perfection: Critical strikes deal bonus damage.</passive>",
            "plaintext": "Massively enhances critical strikes",
            "gold": { "base": 625, "total": 3450, "sell": 2415 },
            "tags": ["Damage", "CriticalStrike"],
            "stats": { "FlatPhysicalDamageMod": 65.0, "FlatCritChanceMod": 0.25 }
        },
        "3036": {
            "name": "Lord Dominik's Regards",
            "description": "<stats>+35 Attack Damage</stats>",
            "plaintext": "Armor penetration against durable foes",
            "gold": { "base": 1100, "total": 3100, "sell": 2170 },
            "tags": ["Damage", "ArmorPenetration"],
            "stats": {
                "FlatPhysicalDamageMod": 35.0,
                "FlatCritChanceMod": 0.25,
                "PercentArmorPenetrationMod": 0.35
            }
        },
        "3006": {
            "name": "Berserker's Greaves",
            "description": "<stats>+25% Attack Speed</stats>",
            "plaintext": "Enhances attack speed",
            "gold": { "base": 500, "total": 1100, "sell": 770 },
            "tags": ["Boots", "AttackSpeed"],
            "stats": { "PercentAttackSpeedMod": 0.25, "FlatMovementSpeedMod": 45.0 }
        },
        "3068": {
            "name": "Sunfire Aegis",
            "description": "<stats>+350 Health +50 Armor</stats>",
            "plaintext": "Burns nearby enemies",
            "gold": { "base": 1000, "total": 2700, "sell": 1890 },
            "tags": ["Health", "Armor"],
            "stats": { "FlatHPPoolMod": 350.0, "FlatArmorMod": 50.0 }
        }
    }
}"#;

fn print_stats(name: &str, finals: &FinalStats) {
    println!("=== {name} ===");
    for (stat, value) in finals.stats.iter() {
        if stat.is_growth() {
            continue;
        }
        println!("  {stat:<28} {value:>8.2}");
    }
    println!("  {:<28} {:>7.1}%", "cooldownReduction", finals.cooldown_reduction);
    println!(
        "  effective health: {:.0} vs physical, {:.0} vs magic",
        finals.effective_health.physical, finals.effective_health.magical
    );
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::default();
    let mut data = GameData::new();
    data.load_champions_json(CHAMPIONS)?;
    data.load_items_json(ITEMS, &config.mappings)?;

    // Marksman: crit items, armor pen, adaptive shards.
    let ashe = BuildSession::new(data.champion("Ashe")?.clone())
        .apply(BuildEvent::SetLevel(11), &config)?
        .apply(BuildEvent::AddItem(data.item("3031")?.clone()), &config)?
        .apply(BuildEvent::AddItem(data.item("3036")?.clone()), &config)?
        .apply(BuildEvent::AddItem(data.item("3006")?.clone()), &config)?
        .apply(
            BuildEvent::SetShards {
                offense: Some(OffenseShard::AdaptiveForce),
                flex: Some(FlexShard::AdaptiveForce),
                defense: Some(DefenseShard::Armor),
            },
            &config,
        )?;

    // Tank: health and armor, dragon stacks from a winning early game.
    let malphite = BuildSession::new(data.champion("Malphite")?.clone())
        .apply(BuildEvent::SetLevel(11), &config)?
        .apply(BuildEvent::AddItem(data.item("3068")?.clone()), &config)?
        .apply(
            BuildEvent::SetShards {
                offense: Some(OffenseShard::AbilityHaste),
                flex: Some(FlexShard::AdaptiveForce),
                defense: Some(DefenseShard::Health),
            },
            &config,
        )?
        .apply(BuildEvent::SetDragonStacks(2), &config)?;

    let ashe_eval = ashe.evaluate(&config);
    let malphite_eval = malphite.evaluate(&config);
    print_stats("Ashe, level 11", &ashe_eval.stats);
    print_stats("Malphite, level 11", &malphite_eval.stats);

    println!(
        "Ashe penetration: {:.0} lethality, {:.0}% armor pen",
        ashe_eval.penetration.lethality, ashe_eval.penetration.armor_pen_percent
    );
    println!(
        "Ashe build: {} gold, {:.0}% gold efficient",
        ashe.total_cost(),
        ashe.gold_efficiency(&config)
    );
    println!();

    let ashe_attack = ashe.combat_against(&malphite, &config);
    println!("Ashe -> Malphite: {}", ashe_attack.summary());
    let malphite_attack = malphite.combat_against(&ashe, &config);
    println!("Malphite -> Ashe: {}", malphite_attack.summary());
    println!();

    // Tooltip-based estimate for an ability cast into the tank.
    let tooltip = "Deals 70 (+90% AP) magic damage and slows the target.";
    if let Some(estimate) = TooltipEstimator.estimate(tooltip) {
        let damage = estimate_ability_damage(
            &estimate,
            &ashe_eval.stats,
            &ashe_eval.penetration,
            &malphite_eval.stats,
            malphite.level,
            &config.constants,
        );
        println!("Ability estimate against Malphite: {damage:.0} damage");
        println!("  (base {:.0}, ratio {:.2})", estimate.base, estimate.ratio);
    }

    Ok(())
}
