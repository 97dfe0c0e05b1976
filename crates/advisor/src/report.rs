use crate::{Advice, AdvisorError, Recommendation};
use serde::Serialize;
use std::fs;
use std::path::Path;
use ventuno_core::{EvTable, Hand};

/// Everything one advice run produced, for the CLI and for JSON dumps.
/// `evs` is absent when the hand settled before estimation.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceReport {
    pub seed: u64,
    pub mode: &'static str,
    pub trials: u32,
    pub hand: Hand,
    pub evs: Option<EvTable>,
    pub advice: Advice,
    pub elapsed_ms: u64,
}

impl AdviceReport {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "hand/手牌: player/玩家={} dealer/庄家={} soft/软牌={} double/可加倍={}",
                self.hand.player_sum,
                self.hand.dealer_upcard,
                flag_label(self.hand.has_ace),
                flag_label(self.hand.can_double_down)
            ),
            format!(
                "engine/引擎: mode/模式={} trials/试验={} seed/种子={} wall_ms/耗时毫秒={}",
                self.mode, self.trials, self.seed, self.elapsed_ms
            ),
        ];
        if let Some(evs) = &self.evs {
            lines.push(format!(
                "ev/期望值: stand/停牌={:.4} hit/要牌={:.4} double/加倍={}",
                evs.stand,
                evs.hit,
                ev_label(evs.double_down)
            ));
        }
        lines.push(String::new());
        match &self.advice {
            Advice::Settled(verdict) => {
                push_recommendation(&mut lines, "verdict/裁定", verdict);
            }
            Advice::Weighed { mixed, normal } => {
                push_recommendation(&mut lines, "mixed/均衡策略", mixed);
                lines.push(String::new());
                push_recommendation(&mut lines, "normal/基本策略", normal);
            }
        }
        lines.join("\n")
    }
}

fn push_recommendation(lines: &mut Vec<String>, label: &str, line: &Recommendation) {
    lines.push(format!("{label}: {}", line.recommendation));
    lines.push(format!("  reason/理由: {}", line.reasoning));
    let mut probabilities = format!(
        "  stand/停牌={:.3} hit/要牌={:.3}",
        line.stand_probability, line.hit_probability
    );
    if let Some(weight) = line.double_down_probability {
        probabilities.push_str(&format!(" double/加倍={weight:.3}"));
    }
    lines.push(probabilities);
}

fn flag_label(flag: bool) -> &'static str {
    if flag {
        "yes/是"
    } else {
        "no/否"
    }
}

fn ev_label(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        "n/a/无".to_string()
    }
}

pub fn write_json(path: &Path, report: &AdviceReport) -> Result<(), AdvisorError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &AdviceReport) -> Result<(), AdvisorError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
