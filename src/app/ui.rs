use crate::app::state::{AppMode, AppState, Panel};
use crate::app::view_model::Listing;
use crate::components::category_grid::CategoryCard;
use crate::components::detail::{CommandList, DetailPanel, EmptyState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::help::HelpModal;
use crate::components::search_bar::SearchBar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 2;
pub const SEARCH_HEIGHT: u16 = 3;
pub const CARD_HEIGHT: u16 = 4;
pub const COMPACT_CARD_HEIGHT: u16 = 3;
/// Lines above the command list inside the detail panel: description, gap, section title.
pub const DETAIL_PREAMBLE: u16 = 3;
/// Each command row is a name line plus a description line.
pub const COMMAND_ROW_HEIGHT: u16 = 2;
const MIN_DETAIL_HEIGHT: u16 = 8;

pub struct AppLayout {
    pub header: Rect,
    pub grid: Rect,
    pub cards: Vec<Rect>,
    pub search: Rect,
    pub detail: Rect,
    pub command_list: Rect,
    pub footer: Rect,
}

/// One column on narrow terminals, two on medium, three on wide.
pub fn grid_columns(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 72 {
        2
    } else {
        1
    }
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let count = app_state.view.catalog().len();
    let columns = grid_columns(area.width);
    let rows = count.div_ceil(columns) as u16;

    let fixed = HEADER_HEIGHT + SEARCH_HEIGHT + 1;
    let card_height = if fixed + rows * CARD_HEIGHT + MIN_DETAIL_HEIGHT > area.height {
        COMPACT_CARD_HEIGHT
    } else {
        CARD_HEIGHT
    };

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(rows * card_height),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let grid = main[1];
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(card_height); rows as usize])
        .split(grid);

    let mut cards = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for cell in cells.iter() {
            if cards.len() < count {
                cards.push(*cell);
            }
        }
    }

    let detail = main[3];
    let command_list = Rect {
        x: detail.x.saturating_add(2),
        y: detail.y.saturating_add(1 + DETAIL_PREAMBLE),
        width: detail.width.saturating_sub(4),
        height: detail.height.saturating_sub(2 + DETAIL_PREAMBLE),
    };

    AppLayout {
        header: main[0],
        grid,
        cards,
        search: main[2],
        detail,
        command_list,
        footer: main[4],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), app_state);
    let theme = &app_state.theme;

    // --- Header ---
    if layout.header.height > 0 {
        f.render_widget(
            Header {
                theme,
                icon_style: app_state.icon_style,
            },
            layout.header,
        );
    }

    // --- Category Grid ---
    let selected = app_state.view.selected_index();
    let categories_focused =
        app_state.mode == AppMode::Browse && app_state.focused_panel == Panel::Categories;
    for (idx, (category, area)) in app_state
        .view
        .catalog()
        .categories()
        .iter()
        .zip(layout.cards.iter())
        .enumerate()
    {
        if area.width == 0 || area.height == 0 {
            continue;
        }
        f.render_widget(
            CategoryCard {
                category,
                theme,
                icon_style: app_state.icon_style,
                number: idx + 1,
                selected: idx == selected,
                focused: categories_focused && idx == selected,
            },
            *area,
        );
    }

    // --- Search ---
    if layout.search.height > 0 {
        f.render_widget(
            SearchBar {
                input: &app_state.search,
                query: app_state.view.query(),
                theme,
                active: app_state.mode == AppMode::Search,
            },
            layout.search,
        );
    }

    // --- Detail ---
    let view = app_state.view.derive();
    if layout.detail.width > 0 && layout.detail.height > 0 {
        f.render_widget(
            DetailPanel {
                category: view.category,
                theme,
                icon_style: app_state.icon_style,
                focused: app_state.mode == AppMode::Browse
                    && app_state.focused_panel == Panel::Commands,
                visible: view.len(),
            },
            layout.detail,
        );
    }

    if layout.command_list.width > 0 && layout.command_list.height > 0 {
        match view.listing() {
            Listing::Results => {
                f.render_stateful_widget(
                    CommandList {
                        commands: &view.commands,
                        theme,
                    },
                    layout.command_list,
                    &mut app_state.command_list,
                );
            }
            Listing::NoResults => {
                f.render_widget(
                    EmptyState {
                        theme,
                        query: app_state.view.query(),
                    },
                    layout.command_list,
                );
            }
        }
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        f.render_widget(Footer { state: app_state }, layout.footer);
    }

    // --- Modals ---
    if app_state.mode == AppMode::Help {
        f.render_widget(
            HelpModal {
                theme: &app_state.theme,
            },
            f.area(),
        );
    }
}
