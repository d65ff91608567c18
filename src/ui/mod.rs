pub mod play;
pub mod result;
pub mod title;

use ratatui::prelude::*;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Title => title::render(frame, frame.area(), app),
        // The countdown shows the (still empty) play field with the digit
        // overlaid, exactly until the game starts
        Screen::Countdown | Screen::Playing => play::render(frame, frame.area(), app),
        Screen::Result => result::render(frame, frame.area(), app),
    }
}
