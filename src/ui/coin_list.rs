// ============================================================================
// CoinList - Rendu de l'écran principal
// ============================================================================
// Dessine la liste des cryptomonnaies : header, lignes, footer
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones
// 3. List / ListItem : une ligne par cryptomonnaie
// 4. Line et Span : plusieurs styles sur une même ligne
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::CoinRecord;

/// Titre affiché dans la barre du haut
pub const TITLE: &str = "Crypto Wallet";

/// Largeur de la colonne nom
const NAME_WIDTH: usize = 16;

/// Largeur de la colonne symbole
const SYMBOL_WIDTH: usize = 8;

/// Dessine l'écran complet
///
/// # Arguments
/// * `frame` - Surface de dessin ratatui
/// * `app` - État de l'application (lecture seule)
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, app, chunks[0]);
    render_coins(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Liste
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", TITLE))
        .title_alignment(Alignment::Center);

    let separator = Span::styled(" | ", Style::default().fg(Color::Gray));
    let mut spans = vec![Span::styled(
        format!("{} coins", app.snapshot.len()),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];

    // Ligne sélectionnée (absente si la liste est vide)
    if let Some(coin) = app.selected_coin() {
        spans.push(separator.clone());
        spans.push(Span::raw("Selected: "));
        spans.push(Span::styled(
            coin.symbol.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let updated = app.snapshot.taken_at().format("%H:%M:%S UTC");
    spans.push(separator);
    spans.push(Span::styled(
        format!("Updated {}", updated),
        Style::default().fg(Color::Gray),
    ));

    let text = Line::from(spans);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Liste
// ============================================================================

/// Dessine une ligne par cryptomonnaie, dans l'ordre du snapshot
fn render_coins(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Prices ");

    if app.snapshot.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No coins",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    // Largeur utile : on retire les deux bordures
    let inner_width = usize::from(area.width.saturating_sub(2));

    let items: Vec<ListItem> = app
        .snapshot
        .iter()
        .enumerate()
        .map(|(index, coin)| {
            let item = ListItem::new(coin_line(coin, inner_width));

            if index == app.selected_index {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Construit la ligne d'une cryptomonnaie
///
/// Format : " Bitcoin          BTC                 $67,432.10 "
/// - nom en gras, symbole en gris, prix en vert aligné à droite
fn coin_line(coin: &CoinRecord, width: usize) -> Line<'static> {
    let name = format!(" {:<w$}", truncate(&coin.name, NAME_WIDTH), w = NAME_WIDTH);
    let symbol = format!(" {:<w$}", truncate(&coin.symbol, SYMBOL_WIDTH), w = SYMBOL_WIDTH);
    let price = format!("{} ", coin.formatted_price());

    let used = name.chars().count() + symbol.chars().count() + price.chars().count();
    let padding = " ".repeat(width.saturating_sub(used));

    Line::from(vec![
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(symbol, Style::default().fg(Color::Gray)),
        Span::raw(padding),
        Span::styled(
            price,
            Style::default().fg(Color::Green),
        ),
    ])
}

/// Tronque un texte à `max` caractères avec ellipse si nécessaire
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

// ============================================================================
// Footer
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("Press ", key_style),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(" again to quit, any other key to cancel", key_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", key_style),
            Span::raw(" Quit  "),
            Span::styled("[↑↓ / j k]", key_style),
            Span::raw(" Navigate  "),
            Span::styled("[r]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Refresh"),
        ])
    };

    let paragraph = Paragraph::new(shortcuts)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================
// CONCEPT RATATUI : TestBackend
// - Terminal en mémoire, on lit le Buffer dessiné ligne par ligne
// ============================================================================
