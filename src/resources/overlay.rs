//! 2D overlay state, layout and hit-testing.
//!
//! The overlay is drawn with raylib primitives and hit-tested here, without
//! a GUI toolkit. [`OverlayState`] holds what is open; [`OverlayLayout`] is
//! recomputed from it and the window size each frame, and both the overlay
//! system (for pointer hits) and the renderer (for drawing) read the same
//! rectangles.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::windowsize::WindowSize;

pub const FONT_SIZE: i32 = 16;
pub const TITLE_FONT_SIZE: i32 = 20;
pub const PANEL_TITLE: &str = "Fielding Positions";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a position";
pub const WELCOME_TITLE: &str = "Cricket Field Explorer";
pub const WELCOME_BODY: &str = "Hover over a marker to see the fielder standing there and click it to \
read about the position. Drag with the left button to orbit, with the right button to pan, \
and scroll to zoom.";
pub const WELCOME_BUTTON: &str = "Start Exploring";
/// Offset of the tooltip from the pointer.
pub const TOOLTIP_OFFSET: Vector2 = Vector2 { x: 15.0, y: 15.0 };

const MARGIN: f32 = 10.0;
const PADDING: f32 = 10.0;
const PANEL_WIDTH: f32 = 230.0;
const ROW_HEIGHT: f32 = 28.0;
const ENTRY_HEIGHT: f32 = 22.0;
const CHECKBOX_SIZE: f32 = 16.0;
const CARD_WIDTH: f32 = 320.0;
const CLOSE_SIZE: f32 = 22.0;
const LINE_HEIGHT: f32 = 20.0;
const WELCOME_WIDTH: f32 = 480.0;
const WELCOME_BUTTON_WIDTH: f32 = 180.0;
const WELCOME_BUTTON_HEIGHT: f32 = 40.0;
/// Approximate advance of the default font per character at [`FONT_SIZE`].
const CHAR_WIDTH: f32 = FONT_SIZE as f32 * 0.6;

/// Text shown next to the pointer while a marker is hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub at: Vector2,
}

/// Card describing the last clicked position.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoCard {
    pub title: String,
    pub body: String,
}

/// Overlay element under a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayHit {
    Panel,
    LabelsCheckbox,
    LinesCheckbox,
    DropdownHeader,
    DropdownEntry(usize),
    ThemeButton,
    Card,
    CardClose,
    /// Anywhere on screen while the welcome modal is open.
    WelcomeModal,
    WelcomeStart,
}

/// Who receives the pointer while a mouse button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerOwner {
    /// No button held; whatever is under the pointer gets it.
    #[default]
    Free,
    /// The press started over the 3D scene (orbit or pan drag).
    Scene,
    /// The press started over an overlay element.
    Overlay,
}

#[derive(Resource, Clone, Debug)]
pub struct OverlayState {
    pub tooltip: Option<Tooltip>,
    pub card: Option<InfoCard>,
    pub welcome_open: bool,
    pub dropdown_open: bool,
    /// Catalog index chosen in the dropdown.
    pub selected: Option<usize>,
    /// Element under the pointer this frame, for hover highlighting.
    pub hovered: Option<OverlayHit>,
    pub pointer_owner: PointerOwner,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            tooltip: None,
            card: None,
            welcome_open: false,
            dropdown_open: false,
            selected: None,
            hovered: None,
            pointer_owner: PointerOwner::Free,
        }
    }
}

impl OverlayState {
    pub fn show_tooltip(&mut self, text: impl Into<String>, pointer: Vector2) {
        self.tooltip = Some(Tooltip {
            text: text.into(),
            at: Vector2 {
                x: pointer.x + TOOLTIP_OFFSET.x,
                y: pointer.y + TOOLTIP_OFFSET.y,
            },
        });
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn open_card(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.card = Some(InfoCard {
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn close_card(&mut self) {
        self.card = None;
    }

    /// Caption of the dropdown header for the current selection.
    pub fn dropdown_caption<'a>(&self, names: &'a [String]) -> &'a str {
        self.selected
            .and_then(|i| names.get(i))
            .map(String::as_str)
            .unwrap_or(DROPDOWN_PLACEHOLDER)
    }
}

/// Screen rectangles of every overlay element for one frame.
#[derive(Clone, Debug)]
pub struct OverlayLayout {
    pub panel: Rectangle,
    pub labels_checkbox: Rectangle,
    pub lines_checkbox: Rectangle,
    pub dropdown_header: Rectangle,
    /// Empty while the dropdown is closed.
    pub dropdown_entries: Vec<Rectangle>,
    pub theme_button: Rectangle,
    pub card: Option<Rectangle>,
    pub card_close: Option<Rectangle>,
    pub card_lines: Vec<String>,
    pub welcome: Option<Rectangle>,
    pub welcome_button: Option<Rectangle>,
    pub welcome_lines: Vec<String>,
}

impl OverlayLayout {
    pub fn compute(window: &WindowSize, state: &OverlayState, entry_count: usize) -> Self {
        let inner = PANEL_WIDTH - 2.0 * PADDING;
        let mut y = MARGIN + PADDING + ROW_HEIGHT;
        let labels_checkbox = Rectangle::new(MARGIN + PADDING, y, inner, ROW_HEIGHT);
        y += ROW_HEIGHT;
        let lines_checkbox = Rectangle::new(MARGIN + PADDING, y, inner, ROW_HEIGHT);
        y += ROW_HEIGHT;
        let dropdown_header = Rectangle::new(MARGIN + PADDING, y + 2.0, inner, ROW_HEIGHT - 4.0);
        y += ROW_HEIGHT;
        let theme_button = Rectangle::new(MARGIN + PADDING, y + 4.0, inner, ROW_HEIGHT);
        y += ROW_HEIGHT + 4.0;
        let panel = Rectangle::new(MARGIN, MARGIN, PANEL_WIDTH, y + PADDING - MARGIN);

        let dropdown_entries = if state.dropdown_open {
            let top = dropdown_header.y + dropdown_header.height;
            (0..entry_count)
                .map(|i| {
                    Rectangle::new(
                        dropdown_header.x,
                        top + i as f32 * ENTRY_HEIGHT,
                        dropdown_header.width,
                        ENTRY_HEIGHT,
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let (card, card_close, card_lines) = match &state.card {
            Some(info) => {
                let lines = wrap_text(&info.body, chars_per_line(CARD_WIDTH - 2.0 * PADDING));
                let height = PADDING * 2.0 + LINE_HEIGHT * 1.5 + lines.len() as f32 * LINE_HEIGHT;
                let x = (window.w as f32 - CARD_WIDTH - MARGIN).max(0.0);
                let y = (window.h as f32 - height - MARGIN).max(0.0);
                let rect = Rectangle::new(x, y, CARD_WIDTH, height);
                let close = Rectangle::new(
                    x + CARD_WIDTH - CLOSE_SIZE - 6.0,
                    y + 6.0,
                    CLOSE_SIZE,
                    CLOSE_SIZE,
                );
                (Some(rect), Some(close), lines)
            }
            None => (None, None, Vec::new()),
        };

        let (welcome, welcome_button, welcome_lines) = if state.welcome_open {
            let lines = wrap_text(WELCOME_BODY, chars_per_line(WELCOME_WIDTH - 2.0 * PADDING));
            let height = PADDING * 3.0
                + LINE_HEIGHT * 2.0
                + lines.len() as f32 * LINE_HEIGHT
                + WELCOME_BUTTON_HEIGHT;
            let x = ((window.w as f32 - WELCOME_WIDTH) * 0.5).max(0.0);
            let y = ((window.h as f32 - height) * 0.5).max(0.0);
            let rect = Rectangle::new(x, y, WELCOME_WIDTH, height);
            let button = Rectangle::new(
                x + (WELCOME_WIDTH - WELCOME_BUTTON_WIDTH) * 0.5,
                y + height - PADDING - WELCOME_BUTTON_HEIGHT,
                WELCOME_BUTTON_WIDTH,
                WELCOME_BUTTON_HEIGHT,
            );
            (Some(rect), Some(button), lines)
        } else {
            (None, None, Vec::new())
        };

        Self {
            panel,
            labels_checkbox,
            lines_checkbox,
            dropdown_header,
            dropdown_entries,
            theme_button,
            card,
            card_close,
            card_lines,
            welcome,
            welcome_button,
            welcome_lines,
        }
    }

    /// Square drawn at the left of a checkbox row.
    pub fn checkbox_box(row: &Rectangle) -> Rectangle {
        Rectangle::new(
            row.x,
            row.y + (row.height - CHECKBOX_SIZE) * 0.5,
            CHECKBOX_SIZE,
            CHECKBOX_SIZE,
        )
    }

    /// Topmost overlay element under `point`. The welcome modal swallows
    /// every point while open; an open dropdown list sits above the card and
    /// the panel.
    pub fn hit_test(&self, point: Vector2) -> Option<OverlayHit> {
        if self.welcome.is_some() {
            if self.welcome_button.is_some_and(|b| contains(&b, point)) {
                return Some(OverlayHit::WelcomeStart);
            }
            return Some(OverlayHit::WelcomeModal);
        }
        if let Some(i) = self.dropdown_entries.iter().position(|r| contains(r, point)) {
            return Some(OverlayHit::DropdownEntry(i));
        }
        if self.card_close.is_some_and(|r| contains(&r, point)) {
            return Some(OverlayHit::CardClose);
        }
        if self.card.is_some_and(|r| contains(&r, point)) {
            return Some(OverlayHit::Card);
        }
        if contains(&self.labels_checkbox, point) {
            return Some(OverlayHit::LabelsCheckbox);
        }
        if contains(&self.lines_checkbox, point) {
            return Some(OverlayHit::LinesCheckbox);
        }
        if contains(&self.dropdown_header, point) {
            return Some(OverlayHit::DropdownHeader);
        }
        if contains(&self.theme_button, point) {
            return Some(OverlayHit::ThemeButton);
        }
        if contains(&self.panel, point) {
            return Some(OverlayHit::Panel);
        }
        None
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Approximate pixel width of `text` in the default font.
pub fn text_width(text: &str, font_size: i32) -> f32 {
    text.chars().count() as f32 * font_size as f32 * 0.6
}

fn chars_per_line(width: f32) -> usize {
    ((width / CHAR_WIDTH).floor() as usize).max(1)
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than a
/// line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
