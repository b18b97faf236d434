//! Static narration scripts for the four freight scenarios
//!
//! Each script is the canned console output of one contingency situation for
//! a soy shipment leaving Sorriso (MT): normal progress lines, warnings, and a
//! final outcome line. The data is configuration, not computed.

use serde::Serialize;

/// One scenario's narration script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioScript {
    /// Scenario key (`"1"`..`"4"`), the suffix of the scenario view id
    pub key: &'static str,
    /// Short title shown above the terminal
    pub title: &'static str,
    /// Ordered narration lines
    pub lines: &'static [&'static str],
}

/// All scenario scripts, in severity order
pub static SCENARIO_LOGS: [ScenarioScript; 4] = [
    ScenarioScript {
        key: "1",
        title: "Cenário 1: Rota Norte (BR-163)",
        lines: &[
            "> INICIANDO SISTEMA...",
            "> Origem: Sorriso (MT) | Destino: Miritituba (PA)",
            "> Rota Norte via Sinop selecionada (BR-163).",
            "> Condição da via: OPERACIONAL",
            "> Custo calculado: R$ 180.00/ton",
            "[SUCESSO] Entrega Confirmada.",
        ],
    },
    ScenarioScript {
        key: "2",
        title: "Cenário 2: Contingência (1 Falha)",
        lines: &[
            "> INICIANDO SISTEMA...",
            "> Rota Norte via Sinop selecionada (BR-163).",
            "[ALERTA] Bloqueio detectado próximo a Sinop (MT).",
            "> Retornando à origem. Recalculando rota...",
            "> Rota Sul via Cuiabá ativada. Destino: Santos (SP)",
            "> Custo real com retorno: R$ 350.00/ton",
            "[SUCESSO] Entrega Confirmada com atraso.",
        ],
    },
    ScenarioScript {
        key: "3",
        title: "Cenário 3: Crítico (2 Falhas)",
        lines: &[
            "> INICIANDO SISTEMA...",
            "> Rota Norte via Sinop selecionada (BR-163).",
            "[ALERTA] Bloqueio detectado próximo a Sinop (MT).",
            "> Rota Sul via Cuiabá ativada.",
            "[ALERTA] Atoleiro registrado na BR-364. Via interditada.",
            "> Rota Leste via Água Boa ativada (BR-158).",
            "> Custo real com retornos: R$ 580.00/ton",
            "[CRÍTICO] Entrega realizada com prejuízo.",
        ],
    },
    ScenarioScript {
        key: "4",
        title: "Cenário 4: Pior Cenário (Colapso)",
        lines: &[
            "> INICIANDO SISTEMA...",
            "[ALERTA] Bloqueio detectado próximo a Sinop (MT).",
            "[ALERTA] Atoleiro registrado na BR-364. Via interditada.",
            "[ALERTA] Ponte danificada na BR-158 (Água Boa).",
            "> Última alternativa: Rota Oeste via Campo Novo do Parecis.",
            "> Custo real com retornos: R$ 770.00/ton",
            "[FALHA] Colapso logístico. Margem da safra comprometida.",
        ],
    },
];

/// Look up a scenario script by key
pub fn scenario_log(key: &str) -> Option<&'static ScenarioScript> {
    SCENARIO_LOGS.iter().find(|script| script.key == key)
}

/// Visual category of a narration line, derived from its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Ordinary `>` progress output
    #[default]
    Progress,
    /// `[ALERTA]` lines
    Warning,
    /// `[SUCESSO]` lines
    Success,
    /// `[CRÍTICO]` and `[FALHA]` lines
    Failure,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with("[SUCESSO]") {
            LineKind::Success
        } else if line.starts_with("[ALERTA]") {
            LineKind::Warning
        } else if line.starts_with("[CRÍTICO]") || line.starts_with("[FALHA]") {
            LineKind::Failure
        } else {
            LineKind::Progress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_one_script() {
        let script = scenario_log("1").unwrap();
        assert_eq!(script.lines.len(), 6);
        assert_eq!(script.lines[0], "> INICIANDO SISTEMA...");
        assert_eq!(script.lines[5], "[SUCESSO] Entrega Confirmada.");
    }

    #[test]
    fn test_every_script_ends_with_an_outcome() {
        for script in &SCENARIO_LOGS {
            let last = script.lines.last().copied().unwrap_or_default();
            assert!(
                matches!(
                    LineKind::classify(last),
                    LineKind::Success | LineKind::Failure
                ),
                "scenario {} ends with {:?}",
                script.key,
                last
            );
        }
    }

    #[test]
    fn test_unknown_scenario() {
        assert!(scenario_log("5").is_none());
        assert!(scenario_log("").is_none());
    }

    #[test]
    fn test_line_kind_classification() {
        assert_eq!(LineKind::classify("> Rota Norte"), LineKind::Progress);
        assert_eq!(LineKind::classify("[ALERTA] Bloqueio"), LineKind::Warning);
        assert_eq!(LineKind::classify("[SUCESSO] ok"), LineKind::Success);
        assert_eq!(LineKind::classify("[CRÍTICO] prejuízo"), LineKind::Failure);
        assert_eq!(LineKind::classify("[FALHA] colapso"), LineKind::Failure);
    }
}
