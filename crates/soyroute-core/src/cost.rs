//! Real freight cost per scenario
//!
//! A scenario tries the export corridors in a fixed order until one works.
//! Every failed attempt is paid twice (the truck drove the first leg and had
//! to come back), so the real cost of a scenario is the base cost of the
//! corridor that finally worked plus the round trips of the ones that failed.

use serde::Serialize;

use crate::chart::COST_CATEGORIES;

/// One export corridor out of Sorriso (MT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAttempt {
    pub corridor: &'static str,
    /// First hub on the corridor, where failures are detected
    pub via: &'static str,
    /// Cost per ton of the full corridor
    pub base_cost: u64,
    /// Cost per ton of the leg up to `via`
    pub first_leg: u64,
}

/// Corridors in the order they are attempted
pub const ROUTE_ATTEMPTS: [RouteAttempt; 4] = [
    RouteAttempt {
        corridor: "Norte",
        via: "Sinop (MT)",
        base_cost: 180,
        first_leg: 40,
    },
    RouteAttempt {
        corridor: "Sul",
        via: "Cuiabá (MT)",
        base_cost: 270,
        first_leg: 60,
    },
    RouteAttempt {
        corridor: "Leste",
        via: "Água Boa (MT)",
        base_cost: 380,
        first_leg: 90,
    },
    RouteAttempt {
        corridor: "Oeste",
        via: "Campo Novo do Parecis (MT)",
        base_cost: 390,
        first_leg: 70,
    },
];

/// Cost of finishing on `final_route` after every route in `failed` broke down
pub fn real_cost(final_route: &RouteAttempt, failed: &[RouteAttempt]) -> u64 {
    let wasted: u64 = failed.iter().map(|r| r.first_leg * 2).sum();
    final_route.base_cost + wasted
}

/// Cost breakdown of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioCost {
    pub title: &'static str,
    pub corridor: &'static str,
    pub failures: usize,
    pub base_cost: u64,
    pub wasted: u64,
    pub total: u64,
}

impl ScenarioCost {
    /// Line of the executive summary, e.g. `1. Melhor Cenário: R$ 180.00/ton`
    pub fn summary_line(&self) -> String {
        format!("{}: R$ {}.00/ton", self.title, self.total)
    }
}

/// Scenario `n` (0-based) fails on the first `n` corridors
pub fn scenario_costs() -> Vec<ScenarioCost> {
    ROUTE_ATTEMPTS
        .iter()
        .enumerate()
        .map(|(n, route)| {
            let failed = &ROUTE_ATTEMPTS[..n];
            let total = real_cost(route, failed);
            ScenarioCost {
                title: COST_CATEGORIES[n],
                corridor: route.corridor,
                failures: n,
                base_cost: route.base_cost,
                wasted: total - route.base_cost,
                total,
            }
        })
        .collect()
}
