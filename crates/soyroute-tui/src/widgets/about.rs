//! "Sobre o Projeto" view
//!
//! Static project description followed by the export corridors and the real
//! cost each scenario ends up paying.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget, Wrap},
};
use soyroute_core::{scenario_costs, ROUTE_ATTEMPTS};

use crate::theme::styles;

const INTRO: &str = "Simulação de contingência logística para o escoamento de soja a partir \
de Sorriso (MT). Cada cenário tenta os corredores de exportação em ordem; toda rota que falha \
é paga em dobro até o primeiro polo, e o custo real por tonelada cresce com o número de falhas.";

pub struct AboutView;

impl AboutView {
    fn corridor_table() -> Table<'static> {
        let header = Row::new(vec!["Corredor", "Primeiro polo", "Custo base", "Trecho inicial"])
            .style(styles::accent_bold());
        let rows = ROUTE_ATTEMPTS.iter().map(|route| {
            Row::new(vec![
                Cell::from(route.corridor),
                Cell::from(route.via),
                Cell::from(format!("R$ {}/ton", route.base_cost)),
                Cell::from(format!("R$ {}/ton", route.first_leg)),
            ])
            .style(styles::text_primary())
        });
        Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Min(14),
                Constraint::Length(12),
                Constraint::Length(14),
            ],
        )
        .header(header)
    }

    fn cost_lines() -> Vec<Line<'static>> {
        scenario_costs()
            .into_iter()
            .map(|cost| {
                Line::from(vec![
                    Span::styled(cost.title, styles::text_secondary()),
                    Span::raw(" "),
                    Span::styled(format!("R$ {}/ton", cost.total), styles::accent()),
                    Span::styled(
                        format!(" ({} + {} desperdiçado)", cost.base_cost, cost.wasted),
                        styles::text_muted(),
                    ),
                ])
            })
            .collect()
    }
}

impl Widget for AboutView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Sobre o Projeto ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let costs = Self::cost_lines();
        let [intro, table, summary] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(ROUTE_ATTEMPTS.len() as u16 + 1),
            Constraint::Length(costs.len() as u16),
        ])
        .spacing(1)
        .areas(inner);

        Paragraph::new(INTRO)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(intro, buf);
        Self::corridor_table().render(table, buf);
        Paragraph::new(costs).render(summary, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_about_lists_corridors() {
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(AboutView, term.area());

        assert!(term.buffer_contains("Sobre o Projeto"));
        assert!(term.buffer_contains("Sinop (MT)"));
        assert!(term.buffer_contains("R$ 390/ton"));
    }

    #[test]
    fn test_about_shows_real_costs() {
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(AboutView, term.area());

        assert!(term.buffer_contains("R$ 180/ton"));
        assert!(term.buffer_contains("R$ 770/ton"));
    }

    #[test]
    fn test_about_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(10, 3);
        term.render_widget(AboutView, term.area());
    }
}
