use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, Panel};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                FooterItem::new("Enter", "keep"),
                FooterItem::new("Esc", "clear"),
                FooterItem::new("\u{2191}/\u{2193}", "move"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc/?", "close")],
        }],
        AppMode::Browse => {
            let has_query = !state.view.query().is_empty();
            vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![
                        FooterItem::new("h/l", "category")
                            .highlighted(state.focused_panel == Panel::Categories),
                        FooterItem::new("j/k", "command")
                            .highlighted(state.focused_panel == Panel::Commands),
                        FooterItem::new("1-9", "jump"),
                    ],
                },
                FooterGroup {
                    name: "FIND",
                    items: vec![
                        FooterItem::new("/", "search"),
                        FooterItem::new("x", "clear").highlighted(has_query),
                        FooterItem::new("y", "copy"),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![
                        FooterItem::new("t", "theme"),
                        FooterItem::new("?", "help"),
                        FooterItem::new("q", "quit"),
                    ],
                },
            ]
        }
    }
}
