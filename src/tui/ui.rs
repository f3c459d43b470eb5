use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActionBar, FavoritesList, JokePanel, NoticeBar, TitleBar};

/// Splits the screen into title, joke, actions, favorites and notice areas.
///
/// The joke panel is sized to fit its wrapped text; favorites take the rest.
fn screen_layout(area: Rect, joke_height: u16) -> [Rect; 5] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(joke_height), Length(1), Min(0), Length(1)])
        .areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();

    let mut joke_panel = JokePanel::new(&app.joke, app.is_loading(), spinner_frame);
    let joke_height = joke_panel.calculate_height(area.width);
    let [title_area, joke_area, action_area, favorites_area, notice_area] =
        screen_layout(area, joke_height);

    TitleBar::new(&app.category, &app.status_message, app.favorites.len())
        .render(frame, title_area);
    joke_panel.render(frame, joke_area);
    ActionBar::new(app.favorites.is_visible(), app.is_loading()).render(frame, action_area);

    if app.favorites.is_visible() {
        FavoritesList::new(&mut tui.favorites, app.favorites.list()).render(frame, favorites_area);
    }

    NoticeBar::new(app.notice.as_deref()).render(frame, notice_area);
}
