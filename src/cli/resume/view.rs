use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::aggregator::summarize;
use crate::cli::resume::{load_records, text::empty_message};
use crate::error::Result;
use crate::models::{CategorySummary, TransactionKind};
use crate::period::Period;
use crate::settings::get_data_dir;
use crate::store::Store;
use crate::tui::{
    hex_color, money_span, run_view, wrap_text, View, ViewAction, ACTIVE_TOGGLE_STYLE,
    AMOUNT_NEG_STYLE, FOOTER_STYLE, HEADER_STYLE, NOTICE_STYLE,
};

pub fn run(period: Period, kind: TransactionKind) -> Result<()> {
    let mut view = ResumeView::new(Store::open(get_data_dir()), period, kind);
    run_view(&mut view)
}

/// The interactive category-summary screen: month navigation, kind toggle,
/// a proportional distribution bar, and the category cards.
struct ResumeView {
    store: Store,
    period: Period,
    kind: TransactionKind,
    summaries: Vec<CategorySummary>,
    /// Store read problem — persists until a reload succeeds.
    warning: Option<String>,
    /// Transient user notice (e.g. future months unavailable).
    notice: Option<String>,
    offset: usize,
    visible_count: usize,
}

impl ResumeView {
    fn new(store: Store, period: Period, kind: TransactionKind) -> Self {
        let mut view = Self {
            store,
            period,
            kind,
            summaries: Vec::new(),
            warning: None,
            notice: None,
            offset: 0,
            visible_count: 10,
        };
        view.reload();
        view
    }

    /// One sequential read-filter-aggregate pass. Triggered on open and on
    /// every month or kind change.
    fn reload(&mut self) {
        let (records, warning) = load_records(&self.store);
        self.summaries = summarize(&records, self.kind, self.period);
        self.warning = warning;
        self.offset = 0;
    }

    fn set_kind(&mut self, kind: TransactionKind) {
        if self.kind != kind {
            self.kind = kind;
            self.notice = None;
            self.reload();
        }
    }

    fn draw_toggle(&self, frame: &mut Frame, area: Rect) {
        let inactive = FOOTER_STYLE;
        let (income_style, expense_style) = match self.kind {
            TransactionKind::Income => (ACTIVE_TOGGLE_STYLE, inactive),
            TransactionKind::Expense => (inactive, ACTIVE_TOGGLE_STYLE),
        };
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(" Entradas (i) ", income_style),
            Span::raw("  "),
            Span::styled(" Saídas (e) ", expense_style),
        ]);
        frame.render_widget(ratatui::widgets::Paragraph::new(line), area);
    }

    /// One thick bar where each category's slice is proportional to its
    /// share of the filtered total.
    fn distribution_line(&self, width: u16) -> Line<'static> {
        let total: f64 = self.summaries.iter().map(|s| s.total).sum();
        if total <= 0.0 || width == 0 {
            return Line::from("");
        }
        let width = width.saturating_sub(2) as usize;
        let mut spans = vec![Span::raw(" ")];
        let mut cum = 0.0;
        let mut used = 0;
        for s in &self.summaries {
            cum += s.total;
            let end = ((cum / total) * width as f64).round() as usize;
            let w = end.saturating_sub(used);
            used = end;
            if w > 0 {
                spans.push(Span::styled(
                    "\u{2588}".repeat(w),
                    Style::default().fg(hex_color(s.color)),
                ));
            }
        }
        Line::from(spans)
    }

    fn card_line(&self, s: &CategorySummary, name_width: usize) -> Line<'static> {
        let amount = match self.kind {
            TransactionKind::Income => money_span(s.total),
            TransactionKind::Expense => Span::styled(s.total_formatted.clone(), AMOUNT_NEG_STYLE),
        };
        Line::from(vec![
            Span::styled("\u{25a0} ", Style::default().fg(hex_color(s.color))),
            Span::raw(format!("{:<width$}  ", s.name, width = name_width)),
            amount,
            Span::styled(format!("  {:>7}", s.percent), FOOTER_STYLE),
        ])
    }
}

impl View for ResumeView {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, sep_area, month_area, toggle_area, chart_area, content_area, notice_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        use ratatui::widgets::Paragraph;

        frame.render_widget(
            Paragraph::new(" Resumo por categoria").style(HEADER_STYLE),
            header_area,
        );
        frame.render_widget(
            Paragraph::new("\u{2501}".repeat(area.width as usize)).style(FOOTER_STYLE),
            sep_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" \u{25c0} ", FOOTER_STYLE),
                Span::styled(
                    format!(" {} ", self.period.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" \u{25b6} ", FOOTER_STYLE),
            ])),
            month_area,
        );

        self.draw_toggle(frame, toggle_area);

        if self.summaries.is_empty() {
            let msg = self
                .warning
                .clone()
                .unwrap_or_else(|| empty_message(self.kind).to_string());
            let (wrapped, _) = wrap_text(&msg, content_area.width.saturating_sub(2) as usize);
            frame.render_widget(
                Paragraph::new(format!("\n {wrapped}")).style(FOOTER_STYLE),
                content_area,
            );
        } else {
            frame.render_widget(
                Paragraph::new(vec![self.distribution_line(area.width), Line::from("")]),
                chart_area,
            );

            let visible = content_area.height as usize;
            self.visible_count = visible.max(1);
            let name_width = self
                .summaries
                .iter()
                .map(|s| s.name.chars().count())
                .max()
                .unwrap_or(10);

            let lines: Vec<Line> = self
                .summaries
                .iter()
                .skip(self.offset)
                .take(visible)
                .map(|s| self.card_line(s, name_width))
                .collect();
            frame.render_widget(Paragraph::new(lines), content_area);
        }

        if let Some(w) = &self.warning {
            frame.render_widget(
                Paragraph::new(format!(" {w}")).style(AMOUNT_NEG_STYLE),
                notice_area,
            );
        } else if let Some(n) = &self.notice {
            frame.render_widget(
                Paragraph::new(format!(" {n}")).style(NOTICE_STYLE),
                notice_area,
            );
        }

        frame.render_widget(
            Paragraph::new(
                " \u{2190}/\u{2192}=mês  i/e=tipo  \u{2191}/\u{2193}=rolar  r=recarregar  q/Esc=sair",
            )
            .style(FOOTER_STYLE),
            footer_area,
        );
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        let max = self.summaries.len().saturating_sub(self.visible_count);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Left => {
                self.period = self.period.prev();
                self.notice = None;
                self.reload();
            }
            KeyCode::Right => match self.period.next() {
                Some(p) => {
                    self.period = p;
                    self.notice = None;
                    self.reload();
                }
                None => {
                    self.notice = Some("Meses futuros indisponíveis".to_string());
                }
            },
            KeyCode::Char('i') => self.set_kind(TransactionKind::Income),
            KeyCode::Char('e') => self.set_kind(TransactionKind::Expense),
            KeyCode::Tab => {
                let next = self.kind.toggled();
                self.set_kind(next);
            }
            KeyCode::Char('r') => {
                self.notice = None;
                self.reload();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.offset = self.offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.offset = (self.offset + 1).min(max);
            }
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = max,
            _ => {}
        }
        ViewAction::Continue
    }
}
